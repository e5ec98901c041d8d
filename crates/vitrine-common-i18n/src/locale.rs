// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale codes and per-language display metadata.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::I18nError;

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

const MIN_CODE_LEN: usize = 2;
const MAX_CODE_LEN: usize = 35;

/// A locale code such as `en`, `ko` or `pt-br`.
///
/// Codes are lowercased on parse and `_` is normalized to `-`, so `pt_BR`,
/// `pt-BR` and `pt-br` are the same locale. Surrounding whitespace is not
/// accepted. A `Locale` only guarantees that the code is well formed;
/// membership in the supported set is checked by [`LocaleSet`](crate::LocaleSet).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(Arc<str>);

impl Locale {
	pub fn parse(code: &str) -> Result<Self, I18nError> {
		let well_formed = (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.len())
			&& code.starts_with(|c: char| c.is_ascii_alphabetic())
			&& code
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

		if !well_formed {
			return Err(I18nError::InvalidCode(code.to_string()));
		}

		let normalized: String = code
			.chars()
			.map(|c| match c {
				'_' => '-',
				c => c.to_ascii_lowercase(),
			})
			.collect();

		Ok(Self(Arc::from(normalized)))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The primary language subtag, e.g. `pt` for `pt-br`.
	pub fn primary_language(&self) -> &str {
		let code = self.as_str();
		code.split(['-', '_']).next().unwrap_or(code)
	}

	pub fn direction(&self) -> Direction {
		locale_info(self.as_str())
			.map(|info| info.direction)
			.unwrap_or_default()
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Locale {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl AsRef<str> for Locale {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for Locale {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for Locale {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}

/// Text direction of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
	#[default]
	Ltr,
	Rtl,
}

impl Direction {
	/// Value for the HTML `dir` attribute.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Display metadata for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub code: &'static str,
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
}

/// Languages the platform has display metadata for.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ko",
		name: "Korean",
		native_name: "한국어",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ja",
		name: "Japanese",
		native_name: "日本語",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "es",
		name: "Spanish",
		native_name: "Español",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "de",
		name: "German",
		native_name: "Deutsch",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "he",
		name: "Hebrew",
		native_name: "עברית",
		direction: Direction::Rtl,
	},
];

/// Look up display metadata by code, matching on the primary language subtag.
pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	let primary = code.split(['-', '_']).next().unwrap_or(code);
	LOCALES
		.iter()
		.find(|info| info.code.eq_ignore_ascii_case(primary))
}

/// Whether a locale is written right-to-left. Unknown codes are LTR.
pub fn is_rtl(code: &str) -> bool {
	locale_info(code).is_some_and(|info| info.direction == Direction::Rtl)
}
