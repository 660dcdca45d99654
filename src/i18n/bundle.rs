// SPDX-License-Identifier: MPL-2.0
//! Locale module aggregation.
//!
//! Each supported language is a directory of JSON modules in the embedded
//! bundle (`assets/lang/<code>/**/*.json`). A module's path, minus the
//! language prefix and extension, names the segment path its content is
//! mounted at: `en/order/detail.json` contributes the subtree at
//! `order.detail`. Aggregation runs eagerly at startup; nothing is loaded
//! lazily afterwards.
//!
//! The merge is fail-soft: paths outside the language prefix, files that
//! are not valid JSON, and content with no usable value are all skipped
//! rather than failing startup.

use crate::i18n::tree::MessageTree;
use rust_embed::RustEmbed;
use serde_json::Value;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

/// Embedded locale bundle, one directory per supported language.
#[derive(RustEmbed)]
#[folder = "assets/lang/"]
struct LangAssets;

const MODULE_EXT: &str = ".json";

/// One locale source module: its bundle-relative path and parsed content.
#[derive(Debug, Clone)]
pub struct LocaleModule {
    pub path: String,
    pub content: Value,
}

/// Enumerates the embedded modules for `lang`, sorted by path.
///
/// Embedded iteration order is not contractual, so the manifest is sorted
/// lexicographically; the last-write-wins merge in [`aggregate`] is
/// therefore reproducible. Files that are not valid JSON are skipped with
/// a warning.
#[must_use]
pub fn manifest(lang: &LanguageIdentifier) -> Vec<LocaleModule> {
    let prefix = format!("{lang}/");
    let mut modules: Vec<LocaleModule> = LangAssets::iter()
        .filter(|path| path.starts_with(&prefix))
        .filter_map(|path| {
            let file = LangAssets::get(path.as_ref())?;
            match serde_json::from_slice(file.data.as_ref()) {
                Ok(content) => Some(LocaleModule {
                    path: path.to_string(),
                    content,
                }),
                Err(err) => {
                    warn!(path = %path, %err, "skipping unparsable locale module");
                    None
                }
            }
        })
        .collect();
    modules.sort_by(|a, b| a.path.cmp(&b.path));
    modules
}

/// Merges a language's modules into a single message tree.
///
/// Modules whose path does not start with `<lang>/` or does not carry the
/// module extension are ignored. Modules whose content converts to nothing
/// (arrays, nulls) are skipped. Two modules mounting at the same segment
/// path overwrite in manifest order, later wins.
#[must_use]
pub fn aggregate(modules: &[LocaleModule], lang: &LanguageIdentifier) -> MessageTree {
    let prefix = format!("{lang}/");
    let mut tree = MessageTree::empty();
    for module in modules {
        let Some(relative) = module.path.strip_prefix(&prefix) else {
            continue;
        };
        let Some(stem) = relative.strip_suffix(MODULE_EXT) else {
            continue;
        };
        let segments: Vec<&str> = stem.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            continue;
        }
        let Some(content) = MessageTree::from_json(&module.content) else {
            debug!(path = %module.path, "locale module exports nothing usable");
            continue;
        };
        tree.insert(&segments, content);
    }
    tree
}

/// Loads and merges the embedded modules for one language.
#[must_use]
pub fn load(lang: &LanguageIdentifier) -> MessageTree {
    aggregate(&manifest(lang), lang)
}

/// Languages present in the embedded bundle, sorted by tag.
#[must_use]
pub fn available_langs() -> Vec<LanguageIdentifier> {
    let mut langs: Vec<LanguageIdentifier> = LangAssets::iter()
        .filter_map(|path| {
            let code = path.as_ref().split('/').next()?;
            code.parse::<LanguageIdentifier>().ok()
        })
        .collect();
    langs.sort_by_key(|lang| lang.to_string());
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn en() -> LanguageIdentifier {
        "en".parse().expect("static tag parses")
    }

    fn module(path: &str, content: Value) -> LocaleModule {
        LocaleModule {
            path: path.to_string(),
            content,
        }
    }

    // -------------------------------------------------------------------------
    // Pure aggregation over an explicit manifest
    // -------------------------------------------------------------------------

    #[test]
    fn nested_module_path_round_trips() {
        let modules = vec![module("en/order/detail.json", json!({"x": 1}))];
        let tree = aggregate(&modules, &en());
        assert_eq!(tree.get("order.detail.x"), Some("1"));
    }

    #[test]
    fn paths_outside_the_language_prefix_are_ignored() {
        let modules = vec![
            module("en/route.json", json!({"dashboard": "Dashboard"})),
            module("zh-CN/route.json", json!({"dashboard": "仪表盘"})),
            module("README.md", json!("not even close")),
        ];
        let tree = aggregate(&modules, &en());
        assert_eq!(tree.get("dashboard"), None);
        assert_eq!(tree.get("route.dashboard"), Some("Dashboard"));
    }

    #[test]
    fn files_without_the_module_extension_are_ignored() {
        let modules = vec![module("en/notes.txt", json!({"k": "v"}))];
        assert!(aggregate(&modules, &en()).is_empty());
    }

    #[test]
    fn modules_with_no_usable_content_are_skipped() {
        let modules = vec![
            module("en/empty.json", json!(null)),
            module("en/list.json", json!(["a", "b"])),
            module("en/real.json", json!({"k": "v"})),
        ];
        let tree = aggregate(&modules, &en());
        assert_eq!(tree.get("empty"), None);
        assert_eq!(tree.get("list"), None);
        assert_eq!(tree.get("real.k"), Some("v"));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let modules = vec![
            module("en/route.json", json!({"dashboard": "Dashboard"})),
            module("en/order/detail.json", json!({"title": "Order Detail"})),
        ];
        assert_eq!(aggregate(&modules, &en()), aggregate(&modules, &en()));
    }

    #[test]
    fn colliding_modules_resolve_last_write_wins() {
        // "order.json" sorts before "order/detail.json", so the manifest
        // order puts the flat leaf first and the nested group second.
        let modules = vec![
            module("en/order.json", json!({"detail": "flat text"})),
            module("en/order/detail.json", json!({"title": "Order Detail"})),
        ];
        let tree = aggregate(&modules, &en());
        assert_eq!(tree.get("order.detail.title"), Some("Order Detail"));
        assert_eq!(tree.get("order.detail"), None);
    }

    #[test]
    fn duplicate_paths_keep_the_later_module() {
        let modules = vec![
            module("en/route.json", json!({"dashboard": "First"})),
            module("en/route.json", json!({"dashboard": "Second"})),
        ];
        let tree = aggregate(&modules, &en());
        assert_eq!(tree.get("route.dashboard"), Some("Second"));
    }

    // -------------------------------------------------------------------------
    // Embedded bundle
    // -------------------------------------------------------------------------

    #[test]
    fn embedded_bundle_lists_supported_languages() {
        let langs = available_langs();
        assert!(langs.contains(&en()));
        assert!(langs.contains(&"zh-CN".parse().expect("static tag parses")));
    }

    #[test]
    fn embedded_manifest_is_sorted_by_path() {
        let modules = manifest(&en());
        assert!(!modules.is_empty());
        let paths: Vec<&str> = modules.iter().map(|m| m.path.as_str()).collect();
        let mut sorted = paths.clone();
        sorted.sort_unstable();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn embedded_bundle_aggregates_without_undefined_leaves() {
        let tree = load(&en());
        assert_eq!(tree.get("route.dashboard"), Some("Dashboard"));
        assert_eq!(tree.get("order.detail.status.shipped"), Some("Shipped"));
    }
}
