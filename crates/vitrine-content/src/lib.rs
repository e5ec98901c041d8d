// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content localization for Vitrine.
//!
//! Posts, profiles and exhibition entries store their text in parallel
//! per-language fields (`title_ko`, `title_en`, a bare `title`, ...). This crate
//! turns such a [`ContentRecord`] into a flat [`ResolvedContent`] for one
//! locale, choosing each field independently through a fixed fallback chain:
//!
//! 1. the requested locale's value
//! 2. the base (unsuffixed) value
//! 3. the default locale's value
//! 4. the empty string
//!
//! Which stored values count as "present" is governed by
//! [`EmptyValuePolicy`].
//!
//! # Example
//!
//! ```
//! use vitrine_common_i18n::{Locale, LocaleSet, RequestLocale};
//! use vitrine_content::{ContentRecord, LocalizedContent, Resolver};
//!
//! let set = LocaleSet::new("en", ["en", "ko"]).unwrap();
//! let record = ContentRecord::from_flat([("title_ko", "제목"), ("title", "Untitled")]);
//!
//! let resolver = Resolver::new(set.default_locale().clone());
//! let ko = Locale::parse("ko").unwrap();
//! assert_eq!(resolver.resolve(&record, &ko).title, "제목");
//!
//! // Bind once per render, resolve many records
//! let mut content = LocalizedContent::new(RequestLocale::new(set), resolver);
//! assert_eq!(content.accessor().resolve(&record).title, "Untitled");
//! ```

mod binding;
mod field;
mod policy;
mod record;
mod resolved;
mod resolver;

pub use binding::{BoundResolver, LocalizedContent};
pub use field::Field;
pub use policy::{EmptyValuePolicy, ParsePolicyError};
pub use record::{ContentRecord, Variant};
pub use resolved::{FieldSource, Resolution, ResolvedContent};
pub use resolver::{resolve, Resolver};
