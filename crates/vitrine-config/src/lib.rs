// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration for Vitrine localization.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - The supported locale set, default locale and empty value policy used by
//!   content resolution
//! - Logging settings and subscriber initialization
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_config::{init_tracing, load_config};
//!
//! let config = load_config()?;
//! init_tracing(&config.logging)?;
//! let resolver = config.resolver();
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;
mod subscriber;

pub use error::ConfigError;
pub use layer::VitrineConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};
pub use subscriber::init_tracing;

use std::path::PathBuf;

use tracing::{debug, info};
use vitrine_common_i18n::{LocaleSet, RequestLocale};
use vitrine_content::Resolver;

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct VitrineConfig {
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,
}

impl VitrineConfig {
	pub fn locale_set(&self) -> &LocaleSet {
		&self.i18n.locales
	}

	/// A content resolver using the configured default locale and policy.
	pub fn resolver(&self) -> Resolver {
		Resolver::new(self.i18n.locales.default_locale().clone())
			.with_policy(self.i18n.empty_value_policy)
	}

	/// Locale provider for a request whose route carries `candidate`.
	pub fn request_locale(&self, candidate: &str) -> RequestLocale {
		RequestLocale::from_candidate(self.i18n.locales.clone(), candidate)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`VITRINE_*`)
/// 2. Config file (`/etc/vitrine/config.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<VitrineConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<VitrineConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<VitrineConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<VitrineConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = VitrineConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: VitrineConfigLayer) -> Result<VitrineConfig, ConfigError> {
	let i18n = layer.i18n.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		default_locale = %i18n.locales.default_locale(),
		supported_locales = i18n.locales.len(),
		empty_value_policy = %i18n.empty_value_policy,
		log_level = %logging.level,
		"Vitrine configuration loaded"
	);

	Ok(VitrineConfig { i18n, logging })
}
