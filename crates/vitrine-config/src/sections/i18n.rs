// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization configuration section.

use serde::{Deserialize, Serialize};
use vitrine_common_i18n::{LocaleSet, DEFAULT_LOCALE};
use vitrine_content::EmptyValuePolicy;

use crate::error::ConfigError;

/// Locales served when nothing is configured.
pub const DEFAULT_SUPPORTED_LOCALES: &[&str] = &["en", "ko"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub default_locale: Option<String>,
	pub supported_locales: Option<Vec<String>>,
	pub empty_value_policy: Option<EmptyValuePolicy>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.supported_locales.is_some() {
			self.supported_locales = other.supported_locales;
		}
		if other.empty_value_policy.is_some() {
			self.empty_value_policy = other.empty_value_policy;
		}
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let default_locale = self
			.default_locale
			.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
		let supported = self.supported_locales.unwrap_or_else(|| {
			DEFAULT_SUPPORTED_LOCALES
				.iter()
				.map(|s| s.to_string())
				.collect()
		});

		let locales = LocaleSet::new(&default_locale, &supported)?;

		Ok(I18nConfig {
			locales,
			empty_value_policy: self.empty_value_policy.unwrap_or_default(),
		})
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	pub locales: LocaleSet,
	pub empty_value_policy: EmptyValuePolicy,
}
