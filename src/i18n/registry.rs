// SPDX-License-Identifier: MPL-2.0
//! The translation registry: one merged message tree per language, an
//! active language, and a fallback chain ending in the raw key.

use crate::config::Preferences;
use crate::i18n::bundle;
use crate::i18n::tree::MessageTree;
use std::collections::HashMap;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Language selected when neither an override nor a stored preference
/// names an available language.
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Language consulted when a key is missing from the active tree.
pub const FALLBACK_LOCALE: &str = "en";

pub struct I18n {
    trees: HashMap<LanguageIdentifier, MessageTree>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Preferences::default())
    }
}

impl I18n {
    /// Builds the registry from the embedded bundle.
    ///
    /// Aggregation for every language completes here, before the registry
    /// is visible to any caller, so no partial message tree can be
    /// observed by [`resolve`](Self::resolve).
    ///
    /// The initial active language is the first available of: the explicit
    /// startup override, the stored preference, the default locale.
    #[must_use]
    pub fn new(lang_override: Option<String>, prefs: &Preferences) -> Self {
        let available_locales = bundle::available_langs();
        let trees = available_locales
            .iter()
            .map(|lang| (lang.clone(), bundle::load(lang)))
            .collect();

        let current_locale = resolve_initial_locale(lang_override, prefs, &available_locales)
            .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap());
        let fallback_locale: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();

        Self {
            trees,
            available_locales,
            current_locale,
            fallback_locale,
        }
    }

    /// Resolves `key` against the active language, then the fallback
    /// language. A key no language knows comes back verbatim, so display
    /// code always has something to show.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.resolve_for(&self.current_locale, key)
    }

    /// Same walk as [`resolve`](Self::resolve), starting from an explicit
    /// language.
    #[must_use]
    pub fn resolve_for(&self, locale: &LanguageIdentifier, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(&self.fallback_locale, key))
            .map_or_else(|| key.to_string(), str::to_string)
    }

    /// Whether the active-or-fallback chain can translate `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.lookup(&self.current_locale, key).is_some()
            || self.lookup(&self.fallback_locale, key).is_some()
    }

    /// Switches the active language. Unavailable languages are ignored;
    /// returns whether the switch happened.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.trees.contains_key(&locale) {
            debug!(%locale, "switching active language");
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<&str> {
        self.trees.get(locale).and_then(|tree| tree.get(key))
    }
}

fn resolve_initial_locale(
    lang_override: Option<String>,
    prefs: &Preferences,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Explicit startup override
    if let Some(lang_str) = lang_override {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Stored preference
    if let Some(lang_str) = &prefs.selected_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs_with(lang: &str) -> Preferences {
        Preferences {
            selected_lang: Some(lang.to_string()),
        }
    }

    #[test]
    fn default_locale_applies_without_any_preference() {
        let i18n = I18n::new(None, &Preferences::default());
        assert_eq!(i18n.current_locale().to_string(), DEFAULT_LOCALE);
    }

    #[test]
    fn stored_preference_seeds_the_active_language() {
        let i18n = I18n::new(None, &prefs_with("en"));
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn startup_override_beats_the_stored_preference() {
        let i18n = I18n::new(Some("en".to_string()), &prefs_with("zh-CN"));
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn unavailable_override_falls_through() {
        let i18n = I18n::new(Some("fr".to_string()), &prefs_with("en"));
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn malformed_stored_preference_falls_back_to_default() {
        let i18n = I18n::new(None, &prefs_with("!! not a tag !!"));
        assert_eq!(i18n.current_locale().to_string(), DEFAULT_LOCALE);
    }

    #[test]
    fn resolve_walks_the_active_tree() {
        let i18n = I18n::new(Some("en".to_string()), &Preferences::default());
        assert_eq!(i18n.resolve("route.dashboard"), "Dashboard");
        assert_eq!(i18n.resolve("order.detail.status.pending"), "Pending");
    }

    #[test]
    fn missing_key_falls_back_to_the_fallback_language() {
        // "common.betaBadge" only exists in the English bundle.
        let i18n = I18n::new(None, &prefs_with("zh-CN"));
        assert_eq!(i18n.resolve("common.betaBadge"), "Beta");
    }

    #[test]
    fn unknown_key_comes_back_verbatim() {
        let i18n = I18n::new(None, &Preferences::default());
        assert_eq!(i18n.resolve("nonexistent.key"), "nonexistent.key");
        assert!(!i18n.has("nonexistent.key"));
    }

    #[test]
    fn resolve_for_targets_an_explicit_language() {
        let i18n = I18n::new(Some("en".to_string()), &Preferences::default());
        let zh: LanguageIdentifier = "zh-CN".parse().expect("static tag parses");
        assert_eq!(i18n.resolve_for(&zh, "route.dashboard"), "仪表盘");
    }

    #[test]
    fn set_locale_ignores_unavailable_languages() {
        let mut i18n = I18n::new(Some("en".to_string()), &Preferences::default());
        let fr: LanguageIdentifier = "fr".parse().expect("static tag parses");
        assert!(!i18n.set_locale(fr));
        assert_eq!(i18n.current_locale().to_string(), "en");

        let zh: LanguageIdentifier = "zh-CN".parse().expect("static tag parses");
        assert!(i18n.set_locale(zh));
        assert_eq!(i18n.current_locale().to_string(), "zh-CN");
    }

    #[test]
    fn available_locales_cover_the_bundle() {
        let i18n = I18n::default();
        let tags: Vec<String> = i18n
            .available_locales()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(tags.contains(&"en".to_string()));
        assert!(tags.contains(&"zh-CN".to_string()));
    }
}
