// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-field fallback resolution.

use tracing::trace;
use vitrine_common_i18n::Locale;

use crate::binding::BoundResolver;
use crate::field::Field;
use crate::policy::EmptyValuePolicy;
use crate::record::ContentRecord;
use crate::resolved::{FieldSource, Resolution, ResolvedContent};

/// Resolves content records against a requested locale.
///
/// Holds only the deployment's default locale and the empty value policy, so
/// it is cheap to clone and safe to share between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
	default_locale: Locale,
	policy: EmptyValuePolicy,
}

impl Resolver {
	pub fn new(default_locale: Locale) -> Self {
		Self {
			default_locale,
			policy: EmptyValuePolicy::default(),
		}
	}

	pub fn with_policy(mut self, policy: EmptyValuePolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn default_locale(&self) -> &Locale {
		&self.default_locale
	}

	pub fn policy(&self) -> EmptyValuePolicy {
		self.policy
	}

	/// Resolve every field of `record` for `locale`.
	///
	/// `locale` must already be validated against the supported set.
	pub fn resolve(&self, record: &ContentRecord, locale: &Locale) -> ResolvedContent {
		self.resolve_traced(record, locale).into_content()
	}

	/// Like [`Self::resolve`], also reporting which fallback step each field
	/// used.
	pub fn resolve_traced(&self, record: &ContentRecord, locale: &Locale) -> Resolution {
		let mut content = ResolvedContent::default();
		let mut sources = [FieldSource::Empty; 4];

		for field in Field::ALL {
			let (text, source) = self.resolve_field(record, field, locale);
			if source != FieldSource::Exact {
				trace!(%field, %locale, ?source, "field fell back");
			}
			content.set(field, text.to_string());
			sources[field.index()] = source;
		}

		Resolution::new(content, sources)
	}

	/// Walk the fallback chain for a single field.
	pub fn resolve_field<'r>(
		&self,
		record: &'r ContentRecord,
		field: Field,
		locale: &Locale,
	) -> (&'r str, FieldSource) {
		let present = |value: Option<&'r str>| value.filter(|v| self.policy.is_present(v));

		if let Some(text) = present(record.localized(field, locale)) {
			return (text, FieldSource::Exact);
		}

		if let Some(text) = present(record.base(field)) {
			return (text, FieldSource::Base);
		}

		if locale != &self.default_locale {
			if let Some(text) = present(record.localized(field, &self.default_locale)) {
				return (text, FieldSource::DefaultLocale);
			}
		}

		("", FieldSource::Empty)
	}

	/// Close over `locale` for repeated resolution.
	pub fn bind(&self, locale: Locale) -> BoundResolver {
		BoundResolver::new(self.clone(), locale)
	}
}

/// Resolve with the default [`EmptyValuePolicy`].
pub fn resolve(record: &ContentRecord, locale: &Locale, default_locale: &Locale) -> ResolvedContent {
	Resolver::new(default_locale.clone()).resolve(record, locale)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn locale(code: &str) -> Locale {
		Locale::parse(code).unwrap()
	}

	fn resolver() -> Resolver {
		Resolver::new(locale("en"))
	}

	#[test]
	fn test_korean_title_example() {
		let record = ContentRecord::from_flat([("title_ko", "제목"), ("title", "Untitled")]);
		assert_eq!(resolver().resolve(&record, &locale("ko")).title, "제목");
		assert_eq!(resolver().resolve(&record, &locale("en")).title, "Untitled");
	}

	#[test]
	fn test_exact_locale_wins() {
		let record = ContentRecord::from_flat([
			("title_ko", "제목"),
			("title", "Untitled"),
			("title_en", "Title"),
		]);
		let resolution = resolver().resolve_traced(&record, &locale("ko"));
		assert_eq!(resolution.content.title, "제목");
		assert_eq!(resolution.source(Field::Title), FieldSource::Exact);
	}

	#[test]
	fn test_base_before_default_locale() {
		let record = ContentRecord::from_flat([("title", "Untitled"), ("title_en", "Title")]);
		let resolution = resolver().resolve_traced(&record, &locale("ko"));
		assert_eq!(resolution.content.title, "Untitled");
		assert_eq!(resolution.source(Field::Title), FieldSource::Base);
	}

	#[test]
	fn test_default_locale_last() {
		let record = ContentRecord::from_flat([("title_en", "Title")]);
		let resolution = resolver().resolve_traced(&record, &locale("ko"));
		assert_eq!(resolution.content.title, "Title");
		assert_eq!(resolution.source(Field::Title), FieldSource::DefaultLocale);
	}

	#[test]
	fn test_missing_field_is_empty_string() {
		let record = ContentRecord::from_flat([("title_ja", "タイトル")]);
		let resolution = resolver().resolve_traced(&record, &locale("ko"));
		assert_eq!(resolution.content.title, "");
		assert_eq!(resolution.content.country, "");
		assert_eq!(resolution.source(Field::Title), FieldSource::Empty);
	}

	#[test]
	fn test_default_locale_request_uses_exact_not_default_step() {
		let record = ContentRecord::from_flat([("title_en", "Title")]);
		let resolution = resolver().resolve_traced(&record, &locale("en"));
		assert_eq!(resolution.source(Field::Title), FieldSource::Exact);
	}

	#[test]
	fn test_fields_resolve_independently() {
		let record = ContentRecord::from_flat([
			("title_en", "Title"),
			("body", "Base body"),
			("location_ko", "서울"),
		]);
		let resolution = resolver().resolve_traced(&record, &locale("en"));
		assert_eq!(resolution.content.title, "Title");
		assert_eq!(resolution.content.body, "Base body");
		assert_eq!(resolution.content.location, "");
		assert_eq!(resolution.source(Field::Title), FieldSource::Exact);
		assert_eq!(resolution.source(Field::Body), FieldSource::Base);
		assert_eq!(resolution.source(Field::Location), FieldSource::Empty);
	}

	#[test]
	fn test_flat_legacy_record() {
		let record = ContentRecord::from_flat([
			("title", "T"),
			("content", "B"),
			("location", "L"),
			("country", "C"),
		]);
		for code in ["en", "ko"] {
			let content = resolver().resolve(&record, &locale(code));
			assert_eq!(content.title, "T");
			assert_eq!(content.body, "B");
			assert_eq!(content.location, "L");
			assert_eq!(content.country, "C");
		}
	}

	#[test]
	fn test_empty_string_skipped_by_default() {
		let record = ContentRecord::from_flat([("title_ko", ""), ("title", "Untitled")]);
		assert_eq!(resolver().resolve(&record, &locale("ko")).title, "Untitled");
	}

	#[test]
	fn test_whitespace_kept_by_default() {
		let record = ContentRecord::from_flat([("title_ko", "  "), ("title", "Untitled")]);
		assert_eq!(resolver().resolve(&record, &locale("ko")).title, "  ");
	}

	#[test]
	fn test_blank_is_absent_policy() {
		let record = ContentRecord::from_flat([("title_ko", " \n "), ("title", "Untitled")]);
		let resolver = resolver().with_policy(EmptyValuePolicy::BlankIsAbsent);
		assert_eq!(resolver.resolve(&record, &locale("ko")).title, "Untitled");
	}

	#[test]
	fn test_verbatim_policy_keeps_empty() {
		let record = ContentRecord::from_flat([("title_ko", ""), ("title", "Untitled")]);
		let resolver = resolver().with_policy(EmptyValuePolicy::Verbatim);
		let resolution = resolver.resolve_traced(&record, &locale("ko"));
		assert_eq!(resolution.content.title, "");
		assert_eq!(resolution.source(Field::Title), FieldSource::Exact);
	}

	#[test]
	fn test_values_are_not_altered() {
		let record = ContentRecord::from_flat([("body_ko", "  줄 1\n줄 2  ")]);
		assert_eq!(resolver().resolve(&record, &locale("ko")).body, "  줄 1\n줄 2  ");
	}

	#[test]
	fn test_free_function() {
		let record = ContentRecord::from_flat([("country_en", "Korea")]);
		let content = resolve(&record, &locale("ko"), &locale("en"));
		assert_eq!(content.country, "Korea");
	}

	#[test]
	fn test_fully_localized() {
		let record = ContentRecord::from_flat([
			("title_ko", "a"),
			("body_ko", "b"),
			("location_ko", "c"),
			("country_ko", "d"),
		]);
		assert!(resolver()
			.resolve_traced(&record, &locale("ko"))
			.is_fully_localized());
		assert!(!resolver()
			.resolve_traced(&record, &locale("en"))
			.is_fully_localized());
	}

	fn arb_value() -> impl Strategy<Value = Option<String>> {
		prop_oneof![
			Just(None),
			Just(Some(String::new())),
			Just(Some(" ".to_string())),
			"[a-z가-힣 ]{1,8}".prop_map(Some),
		]
	}

	fn arb_record() -> impl Strategy<Value = ContentRecord> {
		let keys = [
			"title", "title_en", "title_ko", "title_ja", "body", "content_ko", "body_en",
			"location", "location_ko", "country_en", "country_ja",
		];
		proptest::collection::vec(arb_value(), keys.len()).prop_map(move |values| {
			ContentRecord::from_flat(
				keys.iter()
					.zip(values)
					.filter_map(|(key, value)| value.map(|v| (*key, v))),
			)
		})
	}

	fn arb_locale() -> impl Strategy<Value = Locale> {
		prop_oneof![Just("en"), Just("ko"), Just("ja")].prop_map(locale)
	}

	proptest! {
		/// Resolution is total and idempotent.
		#[test]
		fn resolve_is_total_and_idempotent(record in arb_record(), l in arb_locale()) {
			let first = resolver().resolve(&record, &l);
			let second = resolver().resolve(&record, &l);
			prop_assert_eq!(first, second);
		}

		/// A present exact value is returned unchanged.
		#[test]
		fn exact_value_wins(record in arb_record(), l in arb_locale(), text in "[a-z]{1,10}") {
			let mut record = record;
			record.insert(Field::Title, crate::Variant::Localized(l.clone()), text.clone());
			prop_assert_eq!(resolver().resolve(&record, &l).title, text);
		}

		/// Each resolved field is one of the candidate values or empty.
		#[test]
		fn resolved_value_comes_from_chain(record in arb_record(), l in arb_locale()) {
			let en = locale("en");
			let resolution = resolver().resolve_traced(&record, &l);
			for field in Field::ALL {
				let expected = match resolution.source(field) {
					FieldSource::Exact => record.localized(field, &l),
					FieldSource::Base => record.base(field),
					FieldSource::DefaultLocale => record.localized(field, &en),
					FieldSource::Empty => Some(""),
				};
				prop_assert_eq!(Some(resolution.content.get(field)), expected);
			}
		}

		/// Empty only when no candidate in the chain is non-empty.
		#[test]
		fn empty_only_when_chain_exhausted(record in arb_record(), l in arb_locale()) {
			let en = locale("en");
			let content = resolver().resolve(&record, &l);
			for field in Field::ALL {
				let any = [record.localized(field, &l), record.base(field), record.localized(field, &en)]
					.into_iter()
					.flatten()
					.any(|v| !v.is_empty());
				prop_assert_eq!(content.get(field).is_empty(), !any);
			}
		}
	}
}
