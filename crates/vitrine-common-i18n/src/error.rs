// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors raised while building locales and locale sets.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum I18nError {
	#[error("invalid locale code: '{0}'")]
	InvalidCode(String),

	#[error("supported locale set is empty")]
	Empty,

	#[error("default locale '{default}' is not in the supported set [{supported}]")]
	DefaultNotSupported { default: String, supported: String },
}
