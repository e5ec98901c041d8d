// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use tracing::trace;

use crate::locale::Locale;
use crate::set::LocaleSet;

/// Resolve the effective locale from a stored preference and a fallback.
///
/// Resolution order (highest to lowest priority):
/// 1. User's stored locale preference (if supported)
/// 2. `fallback`, typically the route or server locale (if supported)
/// 3. The set default
///
/// # Example
///
/// ```
/// use vitrine_common_i18n::{resolve_locale, LocaleSet};
///
/// let set = LocaleSet::new("en", ["en", "ko"]).unwrap();
///
/// // User preference takes priority
/// assert_eq!(resolve_locale(&set, Some("ko"), "en"), "ko");
///
/// // Falls back to the given fallback if user has no preference
/// assert_eq!(resolve_locale(&set, None, "ko"), "ko");
///
/// // Falls back to the set default if both are unsupported
/// assert_eq!(resolve_locale(&set, Some("invalid"), "also_invalid"), "en");
/// ```
pub fn resolve_locale(set: &LocaleSet, user_locale: Option<&str>, fallback: &str) -> Locale {
	if let Some(locale) = user_locale.and_then(|code| set.find(code)) {
		return locale.clone();
	}

	if let Some(locale) = set.find(fallback) {
		return locale.clone();
	}

	set.default_locale().clone()
}

/// Pick a supported locale from an `Accept-Language` header value.
///
/// Tags are tried in descending `q` order, first as-is and then by primary
/// language subtag. `*` selects the default. Tags with `q=0` or an
/// unparsable `q` are skipped.
pub fn negotiate(set: &LocaleSet, accept_language: &str) -> Locale {
	let mut ranges: Vec<(&str, f32)> = accept_language
		.split(',')
		.filter_map(parse_range)
		.filter(|(_, q)| *q > 0.0)
		.collect();

	// Stable sort keeps header order among equal weights.
	ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

	for (tag, q) in ranges {
		if tag == "*" {
			break;
		}

		if let Some(locale) = set.find(tag) {
			trace!(tag, q, locale = %locale, "negotiated exact locale");
			return locale.clone();
		}

		let primary = tag.split(['-', '_']).next().unwrap_or(tag);
		if let Some(locale) = set.find(primary) {
			trace!(tag, q, locale = %locale, "negotiated primary language");
			return locale.clone();
		}
	}

	set.default_locale().clone()
}

fn parse_range(entry: &str) -> Option<(&str, f32)> {
	let mut parts = entry.split(';');
	let tag = parts.next()?.trim();
	if tag.is_empty() {
		return None;
	}

	let mut q = 1.0;
	for param in parts {
		if let Some(value) = param.trim().strip_prefix("q=") {
			q = value.trim().parse::<f32>().ok()?;
			if !(0.0..=1.0).contains(&q) {
				return None;
			}
		}
	}

	Some((tag, q))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set() -> LocaleSet {
		LocaleSet::new("en", ["en", "ko", "ar"]).unwrap()
	}

	#[test]
	fn test_user_preference_takes_priority() {
		assert_eq!(resolve_locale(&set(), Some("ko"), "en"), "ko");
		assert_eq!(resolve_locale(&set(), Some("ar"), "en"), "ar");
	}

	#[test]
	fn test_fallback_when_no_user_preference() {
		assert_eq!(resolve_locale(&set(), None, "ko"), "ko");
		assert_eq!(resolve_locale(&set(), None, "ar"), "ar");
	}

	#[test]
	fn test_fallback_when_user_invalid() {
		assert_eq!(resolve_locale(&set(), Some("invalid"), "ko"), "ko");
		assert_eq!(resolve_locale(&set(), Some("fr"), "en"), "en");
	}

	#[test]
	fn test_default_when_both_invalid() {
		assert_eq!(resolve_locale(&set(), Some("invalid"), "also_invalid"), "en");
		assert_eq!(resolve_locale(&set(), None, "invalid"), "en");
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(&set(), Some(""), "ko"), "ko");
		assert_eq!(resolve_locale(&set(), None, ""), "en");
	}

	#[test]
	fn test_negotiate_exact() {
		assert_eq!(negotiate(&set(), "ko"), "ko");
	}

	#[test]
	fn test_negotiate_primary_subtag() {
		assert_eq!(negotiate(&set(), "ko-KR"), "ko");
	}

	#[test]
	fn test_negotiate_respects_q() {
		assert_eq!(negotiate(&set(), "en;q=0.5, ko;q=0.9"), "ko");
		assert_eq!(negotiate(&set(), "fr, ar;q=0.3, ko;q=0.2"), "ar");
	}

	#[test]
	fn test_negotiate_equal_q_keeps_order() {
		assert_eq!(negotiate(&set(), "ar, ko"), "ar");
	}

	#[test]
	fn test_negotiate_skips_zero_and_bad_q() {
		assert_eq!(negotiate(&set(), "ko;q=0, ar;q=abc"), "en");
		assert_eq!(negotiate(&set(), "ko;q=2"), "en");
	}

	#[test]
	fn test_negotiate_wildcard_and_empty() {
		assert_eq!(negotiate(&set(), "*"), "en");
		assert_eq!(negotiate(&set(), "fr, *;q=0.5, ko;q=0.1"), "en");
		assert_eq!(negotiate(&set(), ""), "en");
		assert_eq!(negotiate(&set(), " , ;q=1"), "en");
	}
}
