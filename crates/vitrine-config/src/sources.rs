// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where Vitrine's localization and logging settings come from.
//!
//! Three sources feed [`load_from_sources`](crate::load_from_sources): the
//! built-in defaults, an optional TOML file and `VITRINE_*` environment
//! variables. Each yields a partial [`VitrineConfigLayer`]; later layers fill
//! in or override fields of earlier ones.

use std::path::PathBuf;

use tracing::{debug, trace};
use vitrine_content::EmptyValuePolicy;

use crate::error::ConfigError;
use crate::layer::VitrineConfigLayer;
use crate::sections::{I18nConfigLayer, LogFormat, LoggingConfigLayer};

/// Order in which layers are merged. An environment override beats the
/// config file, which beats the built-in locale set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Something that can produce a partial Vitrine configuration.
///
/// `name` only shows up in logs.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<VitrineConfigLayer, ConfigError>;
}

/// The empty layer: every field left unset so section `finalize` supplies
/// `en` as default locale, `en`/`ko` as supported set and `info` logging.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<VitrineConfigLayer, ConfigError> {
		debug!("using built-in locale and logging defaults");
		Ok(VitrineConfigLayer::default())
	}
}

/// A TOML file with optional `[i18n]` and `[logging]` tables.
///
/// A missing file yields an empty layer, so deployments without one run on
/// defaults plus environment.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// The deployment-wide file at `/etc/vitrine/config.toml`.
	pub fn system() -> Self {
		Self::new("/etc/vitrine/config.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<VitrineConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "no vitrine config file, using other sources");
			return Ok(VitrineConfigLayer::default());
		}

		debug!(path = %self.path.display(), "reading vitrine config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: VitrineConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!(
			has_i18n = layer.i18n.is_some(),
			has_logging = layer.logging.is_some(),
			"parsed vitrine config file"
		);
		Ok(layer)
	}
}

/// Per-deployment overrides from the process environment.
///
/// Reads `VITRINE_DEFAULT_LOCALE`, `VITRINE_SUPPORTED_LOCALES`
/// (comma-separated), `VITRINE_EMPTY_VALUE_POLICY`, `VITRINE_LOG_LEVEL` and
/// `VITRINE_LOG_FORMAT`. Unset and empty variables leave the field alone.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<VitrineConfigLayer, ConfigError> {
		debug!("reading VITRINE_* overrides");
		load_from_lookup(|name| std::env::var(name).ok())
	}
}

fn load_from_lookup<F>(lookup: F) -> Result<VitrineConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let env_var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	let empty_value_policy = match env_var("VITRINE_EMPTY_VALUE_POLICY") {
		Some(v) => Some(
			v.parse::<EmptyValuePolicy>()
				.map_err(|e| ConfigError::InvalidValue {
					key: "VITRINE_EMPTY_VALUE_POLICY".to_string(),
					message: e.to_string(),
				})?,
		),
		None => None,
	};

	let format = match env_var("VITRINE_LOG_FORMAT") {
		Some(v) => Some(
			v.parse::<LogFormat>()
				.map_err(|message| ConfigError::InvalidValue {
					key: "VITRINE_LOG_FORMAT".to_string(),
					message,
				})?,
		),
		None => None,
	};

	let supported_locales = env_var("VITRINE_SUPPORTED_LOCALES").map(|s| {
		s.split(',')
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty())
			.collect()
	});

	Ok(VitrineConfigLayer {
		i18n: Some(I18nConfigLayer {
			default_locale: env_var("VITRINE_DEFAULT_LOCALE"),
			supported_locales,
			empty_value_policy,
		}),
		logging: Some(LoggingConfigLayer {
			level: env_var("VITRINE_LOG_LEVEL"),
			format,
		}),
	})
}
