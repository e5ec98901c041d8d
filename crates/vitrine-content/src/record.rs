// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Multi-language content records.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};
use vitrine_common_i18n::Locale;

use crate::field::Field;

/// Which language slot of a field a value occupies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
	/// The unsuffixed value (`title`), used regardless of locale.
	Base,
	/// A language-specific value (`title_ko`).
	Localized(Locale),
}

/// One content item with text stored per `(field, variant)`.
///
/// Records are owned by the data layer and only read here. Any slot may be
/// missing.
///
/// Serializes to and from the flat row form stored by the backend
/// (`{"id": 42, "title_ko": "...", "title": "..."}`). Only string values are
/// read; `null`, numbers, booleans and nested values are skipped whatever
/// their key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<String, String>")]
pub struct ContentRecord {
	values: BTreeMap<(Field, Variant), String>,
}

impl ContentRecord {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a record from flat backend keys.
	///
	/// A key is `<field>` or `<field>_<locale>`, where `content` is accepted
	/// as an alias for `body`. A `body*` key wins over the matching
	/// `content*` key regardless of order. Keys naming some other column, or
	/// with a malformed locale suffix, are skipped.
	pub fn from_flat<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut record = Self::new();
		let mut ignored = 0usize;

		for (key, value) in entries {
			let key = key.as_ref();
			match parse_key(key) {
				Some(FlatKey {
					field,
					variant,
					alias,
				}) => {
					let slot = (field, variant);
					if alias {
						record.values.entry(slot).or_insert_with(|| value.into());
					} else {
						record.values.insert(slot, value.into());
					}
				}
				None => {
					ignored += 1;
					trace!(key, "skipping non-localizable content key");
				}
			}
		}

		if ignored > 0 {
			debug!(ignored, "flat content record had non-localizable keys");
		}

		record
	}

	pub fn with_base(mut self, field: Field, text: impl Into<String>) -> Self {
		self.insert(field, Variant::Base, text);
		self
	}

	pub fn with_localized(mut self, field: Field, locale: Locale, text: impl Into<String>) -> Self {
		self.insert(field, Variant::Localized(locale), text);
		self
	}

	pub fn insert(&mut self, field: Field, variant: Variant, text: impl Into<String>) {
		self.values.insert((field, variant), text.into());
	}

	pub fn get(&self, field: Field, variant: &Variant) -> Option<&str> {
		self
			.values
			.get(&(field, variant.clone()))
			.map(String::as_str)
	}

	pub fn base(&self, field: Field) -> Option<&str> {
		self.get(field, &Variant::Base)
	}

	pub fn localized(&self, field: Field, locale: &Locale) -> Option<&str> {
		self
			.values
			.get(&(field, Variant::Localized(locale.clone())))
			.map(String::as_str)
	}

	/// Every locale that has at least one stored value, sorted.
	pub fn locales(&self) -> Vec<Locale> {
		let mut locales: Vec<Locale> = self
			.values
			.keys()
			.filter_map(|(_, variant)| match variant {
				Variant::Localized(locale) => Some(locale.clone()),
				Variant::Base => None,
			})
			.collect();
		locales.sort();
		locales.dedup();
		locales
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

struct FlatKey {
	field: Field,
	variant: Variant,
	alias: bool,
}

fn parse_key(key: &str) -> Option<FlatKey> {
	let (prefix, suffix) = match key.split_once('_') {
		Some((prefix, suffix)) => (prefix, Some(suffix)),
		None => (key, None),
	};

	let field = Field::from_key(prefix)?;
	let variant = match suffix {
		None => Variant::Base,
		Some(code) => Variant::Localized(Locale::parse(code).ok()?),
	};

	Some(FlatKey {
		field,
		variant,
		alias: prefix != field.as_str(),
	})
}

/// A single column of a backend row. Anything but a string is `Other`.
enum FlatValue {
	Text(String),
	Other,
}

impl<'de> Deserialize<'de> for FlatValue {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(FlatValueVisitor)
	}
}

struct FlatValueVisitor;

impl<'de> Visitor<'de> for FlatValueVisitor {
	type Value = FlatValue;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a column value")
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		Ok(FlatValue::Text(v.to_owned()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
		Ok(FlatValue::Text(v))
	}

	fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
		Ok(FlatValue::Other)
	}

	fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
		Ok(FlatValue::Other)
	}

	fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
		Ok(FlatValue::Other)
	}

	fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
		Ok(FlatValue::Other)
	}

	fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(FlatValue::Other)
	}

	fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(FlatValue::Other)
	}

	fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(self)
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		while seq.next_element::<IgnoredAny>()?.is_some() {}
		Ok(FlatValue::Other)
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
		Ok(FlatValue::Other)
	}
}

impl<'de> Deserialize<'de> for ContentRecord {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let row = BTreeMap::<String, FlatValue>::deserialize(deserializer)?;
		Ok(Self::from_flat(row.into_iter().filter_map(|(key, value)| {
			match value {
				FlatValue::Text(text) => Some((key, text)),
				FlatValue::Other => None,
			}
		})))
	}
}

impl From<ContentRecord> for BTreeMap<String, String> {
	fn from(record: ContentRecord) -> Self {
		record
			.values
			.into_iter()
			.map(|((field, variant), text)| {
				let key = match variant {
					Variant::Base => field.as_str().to_string(),
					Variant::Localized(locale) => {
						format!("{field}_{}", locale.as_str().replace('-', "_"))
					}
				};
				(key, text)
			})
			.collect()
	}
}
