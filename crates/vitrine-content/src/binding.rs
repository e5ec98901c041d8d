// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Binding a resolver to the active locale for presentation code.

use tracing::debug;
use vitrine_common_i18n::{Locale, LocaleProvider};

use crate::record::ContentRecord;
use crate::resolved::ResolvedContent;
use crate::resolver::Resolver;

/// A [`Resolver`] closed over one locale.
///
/// Rendering a page resolves many records against the same locale; binding
/// once saves threading the locale through every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundResolver {
	resolver: Resolver,
	locale: Locale,
}

impl BoundResolver {
	pub(crate) fn new(resolver: Resolver, locale: Locale) -> Self {
		Self { resolver, locale }
	}

	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	pub fn resolve(&self, record: &ContentRecord) -> ResolvedContent {
		self.resolver.resolve(record, &self.locale)
	}

	pub fn resolve_all<'a, I>(&self, records: I) -> Vec<ResolvedContent>
	where
		I: IntoIterator<Item = &'a ContentRecord>,
	{
		records
			.into_iter()
			.map(|record| self.resolve(record))
			.collect()
	}

	/// Turn the binding into a plain single-argument accessor.
	pub fn into_fn(self) -> impl Fn(&ContentRecord) -> ResolvedContent {
		move |record: &ContentRecord| self.resolve(record)
	}
}

/// Locale-aware content accessor for one render context.
///
/// Reads the active locale from its provider and keeps the matching
/// [`BoundResolver`]. The binding is rebuilt whenever the provider reports a
/// different locale and reused otherwise.
#[derive(Debug)]
pub struct LocalizedContent<P> {
	provider: P,
	resolver: Resolver,
	binding: Option<BoundResolver>,
	binds: usize,
}

impl<P: LocaleProvider> LocalizedContent<P> {
	pub fn new(provider: P, resolver: Resolver) -> Self {
		Self {
			provider,
			resolver,
			binding: None,
			binds: 0,
		}
	}

	/// Use the provider's default locale as the resolver fallback.
	pub fn from_provider(provider: P) -> Self {
		let resolver = Resolver::new(provider.default_locale().clone());
		Self::new(provider, resolver)
	}

	/// The accessor for the provider's current locale.
	pub fn accessor(&mut self) -> &BoundResolver {
		let current = self.provider.current_locale();
		let fresh = matches!(&self.binding, Some(binding) if binding.locale() == &current);

		if !fresh {
			self.binding = None;
		}

		let resolver = &self.resolver;
		let binds = &mut self.binds;
		self.binding.get_or_insert_with(|| {
			debug!(locale = %current, "binding content resolver");
			*binds += 1;
			resolver.bind(current)
		})
	}

	pub fn resolve(&mut self, record: &ContentRecord) -> ResolvedContent {
		self.accessor().resolve(record)
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	pub fn provider_mut(&mut self) -> &mut P {
		&mut self.provider
	}

	/// How many times a binding has been built.
	pub fn bind_count(&self) -> usize {
		self.binds
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_common_i18n::{LocaleSet, RequestLocale};

	fn provider(candidate: &str) -> RequestLocale {
		let set = LocaleSet::new("en", ["en", "ko"]).unwrap();
		RequestLocale::from_candidate(set, candidate)
	}

	fn record() -> ContentRecord {
		ContentRecord::from_flat([("title_ko", "제목"), ("title", "Untitled")])
	}

	#[test]
	fn test_bound_resolver_matches_resolver() {
		let resolver = Resolver::new(Locale::parse("en").unwrap());
		let ko = Locale::parse("ko").unwrap();
		let bound = resolver.bind(ko.clone());
		assert_eq!(bound.locale(), &ko);
		assert_eq!(bound.resolve(&record()), resolver.resolve(&record(), &ko));
	}

	#[test]
	fn test_into_fn() {
		let resolver = Resolver::new(Locale::parse("en").unwrap());
		let accessor = resolver.bind(Locale::parse("ko").unwrap()).into_fn();
		assert_eq!(accessor(&record()).title, "제목");
	}

	#[test]
	fn test_resolve_all() {
		let resolver = Resolver::new(Locale::parse("en").unwrap());
		let records = vec![record(), ContentRecord::new()];
		let resolved = resolver.bind(Locale::parse("ko").unwrap()).resolve_all(&records);
		assert_eq!(resolved.len(), 2);
		assert_eq!(resolved[0].title, "제목");
		assert_eq!(resolved[1], ResolvedContent::default());
	}

	#[test]
	fn test_accessor_reused_while_locale_unchanged() {
		let mut content = LocalizedContent::from_provider(provider("ko"));
		assert_eq!(content.accessor().resolve(&record()).title, "제목");
		assert_eq!(content.resolve(&record()).title, "제목");
		assert_eq!(content.bind_count(), 1);
	}

	#[test]
	fn test_accessor_rebinds_on_locale_change() {
		let mut content = LocalizedContent::from_provider(provider("ko"));
		assert_eq!(content.accessor().locale(), &"ko");

		content.provider_mut().set_locale("en");
		assert_eq!(content.accessor().locale(), &"en");
		assert_eq!(content.resolve(&record()).title, "Untitled");
		assert_eq!(content.bind_count(), 2);
	}

	#[test]
	fn test_unsupported_request_locale_uses_default() {
		let mut content = LocalizedContent::from_provider(provider("fr"));
		assert_eq!(content.accessor().locale(), &"en");
		assert_eq!(content.provider().current_locale(), "en");
	}
}
