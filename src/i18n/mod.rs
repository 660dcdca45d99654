// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Message content ships as per-language JSON modules embedded in the
//! binary. At startup each language's modules are merged into a single
//! message tree, and the registry exposes a lookup that consults the
//! active language, then the fallback language, and finally returns the
//! raw key so display code always has something to show.
//!
//! # Features
//!
//! - Eager aggregation of the embedded locale bundle at startup
//! - Initial language from a startup override or the stored preference
//! - Runtime language switching
//! - Fallback to the fallback locale, then the raw key, on missing keys

pub mod bundle;
pub mod registry;
pub mod tree;
