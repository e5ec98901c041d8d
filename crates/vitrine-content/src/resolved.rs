// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Flat, locale-correct view of a content record, ready for display.
///
/// Every field is always present. Missing content is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedContent {
	pub title: String,
	pub body: String,
	pub location: String,
	pub country: String,
}

impl ResolvedContent {
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Title => &self.title,
			Field::Body => &self.body,
			Field::Location => &self.location,
			Field::Country => &self.country,
		}
	}

	pub(crate) fn set(&mut self, field: Field, text: String) {
		match field {
			Field::Title => self.title = text,
			Field::Body => self.body = text,
			Field::Location => self.location = text,
			Field::Country => self.country = text,
		}
	}
}

/// Which step of the fallback chain produced a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
	/// The requested locale's own value.
	Exact,
	/// The unsuffixed base value.
	Base,
	/// The default locale's value.
	DefaultLocale,
	/// Nothing usable; the field is empty.
	Empty,
}

/// Resolved content together with where each field came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
	pub content: ResolvedContent,
	sources: [FieldSource; 4],
}

impl Resolution {
	pub(crate) fn new(content: ResolvedContent, sources: [FieldSource; 4]) -> Self {
		Self { content, sources }
	}

	pub fn source(&self, field: Field) -> FieldSource {
		self.sources[field.index()]
	}

	/// True when every field came from the requested locale.
	pub fn is_fully_localized(&self) -> bool {
		self.sources.iter().all(|s| *s == FieldSource::Exact)
	}

	pub fn into_content(self) -> ResolvedContent {
		self.content
	}
}
