// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which stored values count as present when walking the fallback chain.
///
/// Stored values are never altered; the policy only decides whether a slot is
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyValuePolicy {
	/// `""` is absent, whitespace-only text is present.
	#[default]
	EmptyIsAbsent,
	/// `""` and whitespace-only text are both absent.
	BlankIsAbsent,
	/// Anything stored is present, including `""`.
	Verbatim,
}

impl EmptyValuePolicy {
	pub fn is_present(&self, value: &str) -> bool {
		match self {
			EmptyValuePolicy::EmptyIsAbsent => !value.is_empty(),
			EmptyValuePolicy::BlankIsAbsent => !value.trim().is_empty(),
			EmptyValuePolicy::Verbatim => true,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			EmptyValuePolicy::EmptyIsAbsent => "empty_is_absent",
			EmptyValuePolicy::BlankIsAbsent => "blank_is_absent",
			EmptyValuePolicy::Verbatim => "verbatim",
		}
	}
}

impl fmt::Display for EmptyValuePolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown empty value policy '{0}' (expected empty_is_absent, blank_is_absent or verbatim)")]
pub struct ParsePolicyError(pub String);

impl FromStr for EmptyValuePolicy {
	type Err = ParsePolicyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
			"empty_is_absent" => Ok(EmptyValuePolicy::EmptyIsAbsent),
			"blank_is_absent" => Ok(EmptyValuePolicy::BlankIsAbsent),
			"verbatim" => Ok(EmptyValuePolicy::Verbatim),
			_ => Err(ParsePolicyError(s.to_string())),
		}
	}
}
