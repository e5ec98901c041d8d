// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

/// The localizable fields of a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
	Title,
	Body,
	Location,
	Country,
}

impl Field {
	/// Every field, in output order.
	pub const ALL: [Field; 4] = [Field::Title, Field::Body, Field::Location, Field::Country];

	/// Canonical key prefix used in flat records.
	pub fn as_str(&self) -> &'static str {
		match self {
			Field::Title => "title",
			Field::Body => "body",
			Field::Location => "location",
			Field::Country => "country",
		}
	}

	/// Map a flat key prefix to a field. `content` is accepted for `body`.
	pub fn from_key(key: &str) -> Option<Field> {
		match key {
			"title" => Some(Field::Title),
			"body" | "content" => Some(Field::Body),
			"location" => Some(Field::Location),
			"country" => Some(Field::Country),
			_ => None,
		}
	}

	pub(crate) fn index(&self) -> usize {
		*self as usize
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
