// SPDX-License-Identifier: MPL-2.0
//! Application root.
//!
//! [`Shell`] owns the pieces the rest of the client depends on: the
//! durable preference store, the translation registry, and the router.
//! Consumers receive it by injection rather than reaching for globals,
//! and observe locale and navigation changes through [`Event`]
//! subscriptions.

use crate::config::{self, Preferences};
use crate::i18n::registry::I18n;
use crate::router::{title, Resolution, Router};
use tracing::{info, warn};
use unic_langid::LanguageIdentifier;

/// Startup options, parsed by the binary.
#[derive(Debug, Default)]
pub struct Flags {
    /// Language override for this session, bypassing the stored preference.
    pub lang: Option<String>,
    /// Initial route to navigate to.
    pub path: Option<String>,
}

/// Notifications emitted to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LocaleChanged(LanguageIdentifier),
    Navigated { path: String, title: String },
}

type Subscriber = Box<dyn Fn(&Event)>;

pub struct Shell {
    prefs: Preferences,
    i18n: I18n,
    router: Router,
    current: Option<Resolution>,
    document_title: String,
    subscribers: Vec<Subscriber>,
}

impl Shell {
    /// Builds the application context: the stored preferences are read
    /// once, the message trees aggregated, and the default route table
    /// installed.
    #[must_use]
    pub fn new(flags: &Flags) -> Self {
        let prefs = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &prefs);
        Self::with_parts(prefs, i18n, Router::with_default_routes())
    }

    /// Assembles a shell from explicit parts, without touching the
    /// filesystem. Used by tests and by embedders that manage their own
    /// preference storage.
    #[must_use]
    pub fn with_parts(prefs: Preferences, i18n: I18n, router: Router) -> Self {
        Self {
            prefs,
            i18n,
            router,
            current: None,
            document_title: title::DEFAULT_TITLE.to_string(),
            subscribers: Vec::new(),
        }
    }

    /// Registers an observer for locale and navigation events.
    pub fn subscribe(&mut self, subscriber: impl Fn(&Event) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Resolves `path` through the router and applies the
    /// navigation-completion hook: the document title is recomputed from
    /// the settled record's metadata and subscribers are notified.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let resolution = self.router.resolve(path);
        let title = title::page_title(&resolution.meta, &self.i18n);
        info!(path = %resolution.path, %title, "navigation completed");

        self.document_title = title.clone();
        self.current = Some(resolution.clone());
        self.emit(&Event::Navigated {
            path: resolution.path.clone(),
            title,
        });
        resolution
    }

    /// Switches the active language, persists the choice, and recomputes
    /// the title of the current route so bound consumers re-render.
    ///
    /// Malformed tags and unavailable languages are ignored; returns
    /// whether the switch happened.
    pub fn change_language(&mut self, lang: &str) -> bool {
        let Ok(locale) = lang.parse::<LanguageIdentifier>() else {
            warn!(lang, "ignoring malformed language tag");
            return false;
        };
        if !self.i18n.set_locale(locale.clone()) {
            warn!(%locale, "ignoring switch to unavailable language");
            return false;
        }

        self.prefs.selected_lang = Some(locale.to_string());
        // Guarded during unit tests to keep isolation; persistence itself
        // is exercised through the explicit-path config API.
        if !cfg!(test) {
            if let Err(error) = config::save(&self.prefs) {
                warn!(%error, "failed to persist language preference");
            }
        }

        if let Some(resolution) = &self.current {
            self.document_title = title::page_title(&resolution.meta, &self.i18n);
        }
        self.emit(&Event::LocaleChanged(locale));
        true
    }

    #[must_use]
    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    fn emit(&self, event: &Event) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}
