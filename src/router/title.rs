// SPDX-License-Identifier: MPL-2.0
//! Document title resolution for completed navigations.

use crate::i18n::registry::I18n;
use crate::router::{MetaValue, RouteMeta};

/// Title shown when a route declares no usable title key.
pub const DEFAULT_TITLE: &str = "Admin";

/// Computes the document title for a completed navigation.
///
/// Only a string metadata value is treated as a translation key; anything
/// else (absent, numeric, boolean) yields the literal default. An
/// untranslated key comes back verbatim from the registry, so this never
/// fails.
#[must_use]
pub fn page_title(meta: &RouteMeta, i18n: &I18n) -> String {
    match &meta.title {
        Some(MetaValue::Str(key)) => i18n.resolve(key),
        _ => DEFAULT_TITLE.to_string(),
    }
}
