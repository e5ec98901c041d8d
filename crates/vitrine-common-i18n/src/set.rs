// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed set of locales a deployment serves.

use tracing::debug;

use crate::error::I18nError;
use crate::locale::Locale;

/// Supported locales plus the designated default.
///
/// The default is always a member of the set. Declaration order is kept so
/// language pickers render in the configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
	supported: Vec<Locale>,
	default: Locale,
}

impl LocaleSet {
	pub fn new<I, S>(default: &str, supported: I) -> Result<Self, I18nError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut locales: Vec<Locale> = Vec::new();
		for code in supported {
			let locale = Locale::parse(code.as_ref().trim())?;
			if !locales.contains(&locale) {
				locales.push(locale);
			}
		}

		if locales.is_empty() {
			return Err(I18nError::Empty);
		}

		let default = Locale::parse(default.trim())?;
		if !locales.contains(&default) {
			return Err(I18nError::DefaultNotSupported {
				default: default.to_string(),
				supported: join_codes(&locales),
			});
		}

		Ok(Self {
			supported: locales,
			default,
		})
	}

	pub fn default_locale(&self) -> &Locale {
		&self.default
	}

	pub fn contains(&self, code: &str) -> bool {
		self.find(code).is_some()
	}

	/// Find the supported locale matching `code`, ignoring case, separator
	/// style and surrounding whitespace.
	pub fn find(&self, code: &str) -> Option<&Locale> {
		let candidate = Locale::parse(code.trim()).ok()?;
		self.supported.iter().find(|locale| **locale == candidate)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Locale> {
		self.supported.iter()
	}

	pub fn len(&self) -> usize {
		self.supported.len()
	}

	pub fn is_empty(&self) -> bool {
		self.supported.is_empty()
	}

	/// Return `candidate` if supported, otherwise the default locale.
	pub fn validate(&self, candidate: &str) -> Locale {
		match self.find(candidate) {
			Some(locale) => locale.clone(),
			None => {
				debug!(
					candidate,
					default = %self.default,
					"unsupported locale, using default"
				);
				self.default.clone()
			}
		}
	}
}

fn join_codes(locales: &[Locale]) -> String {
	locales
		.iter()
		.map(Locale::as_str)
		.collect::<Vec<_>>()
		.join(", ")
}
