// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale support for Vitrine.
//!
//! This crate answers the question "which locale is this request in?" and
//! nothing more. It owns the closed set of supported locale codes, the
//! designated default, and the rules for coercing an arbitrary candidate
//! string into a member of that set.
//!
//! Content localization itself lives in `vitrine-content`, which only ever
//! receives a [`Locale`] that has already been validated here.
//!
//! # Example
//!
//! ```
//! use vitrine_common_i18n::{is_rtl, negotiate, resolve_locale, LocaleProvider, LocaleSet, RequestLocale};
//!
//! let set = LocaleSet::new("en", ["en", "ko"]).unwrap();
//!
//! // Unsupported codes fall back to the default
//! assert_eq!(set.validate("fr"), "en");
//!
//! // Resolve a user's stored preference against a server fallback
//! assert_eq!(resolve_locale(&set, Some("ko"), "en"), "ko");
//!
//! // Pick from an Accept-Language header
//! assert_eq!(negotiate(&set, "ko-KR,ko;q=0.9,en;q=0.8"), "ko");
//!
//! // Request-scoped provider
//! let provider = RequestLocale::from_candidate(set, "ko");
//! assert_eq!(provider.current_locale(), "ko");
//!
//! if is_rtl("ar") {
//!     // Add dir="rtl" to HTML
//! }
//! ```

mod error;
mod locale;
mod provider;
mod resolve;
mod set;

pub use error::I18nError;
pub use locale::{is_rtl, locale_info, Direction, Locale, LocaleInfo, DEFAULT_LOCALE, LOCALES};
pub use provider::{LocaleProvider, RequestLocale};
pub use resolve::{negotiate, resolve_locale};
pub use set::LocaleSet;
