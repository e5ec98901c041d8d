// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod i18n;
mod logging;

pub use i18n::{I18nConfig, I18nConfigLayer, DEFAULT_SUPPORTED_LOCALES};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
