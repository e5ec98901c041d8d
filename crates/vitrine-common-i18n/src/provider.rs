// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The interface content code uses to learn the active locale.

use crate::locale::Locale;
use crate::set::LocaleSet;

/// Source of the active locale for a request or render context.
///
/// Implementations are request scoped. The active locale is handed to
/// consumers as a value; nothing reads it from global state.
pub trait LocaleProvider {
	fn current_locale(&self) -> Locale;

	fn supported_locales(&self) -> &LocaleSet;

	fn default_locale(&self) -> &Locale {
		self.supported_locales().default_locale()
	}

	/// Return `candidate` if supported, otherwise [`Self::default_locale`].
	fn validate(&self, candidate: &str) -> Locale {
		self.supported_locales().validate(candidate)
	}
}

/// Locale provider for a single request, built from the locale segment of the
/// route or any other untrusted candidate.
#[derive(Debug, Clone)]
pub struct RequestLocale {
	set: LocaleSet,
	current: Locale,
}

impl RequestLocale {
	/// Provider whose current locale is the set default.
	pub fn new(set: LocaleSet) -> Self {
		let current = set.default_locale().clone();
		Self { set, current }
	}

	pub fn from_candidate(set: LocaleSet, candidate: &str) -> Self {
		let current = set.validate(candidate);
		Self { set, current }
	}

	/// Switch locale, e.g. after the user picks another language.
	pub fn set_locale(&mut self, candidate: &str) -> &Locale {
		self.current = self.set.validate(candidate);
		&self.current
	}
}

impl LocaleProvider for RequestLocale {
	fn current_locale(&self) -> Locale {
		self.current.clone()
	}

	fn supported_locales(&self) -> &LocaleSet {
		&self.set
	}
}
