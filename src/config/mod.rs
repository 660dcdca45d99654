// SPDX-License-Identifier: MPL-2.0
//! Durable user preferences, backed by a `settings.toml` file.
//!
//! The store holds the values that must outlive a single session, most
//! importantly the language the user last selected (`selected-lang`).
//! It is read once at startup to seed the active language and written
//! whenever the user changes language.
//!
//! # Path Resolution
//!
//! The settings file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ADMIN_SHELL_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! Loading never blocks startup: a missing file yields defaults, and an
//! unreadable file degrades to defaults as well.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AdminShell";
const CONFIG_DIR_ENV: &str = "ADMIN_SHELL_CONFIG_DIR";

/// Preferences persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Language the user selected in a previous session (e.g. "zh-CN").
    #[serde(
        rename = "selected-lang",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_lang: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Preferences> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Preferences::default())
}

pub fn save(prefs: &Preferences) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(prefs, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(prefs: &Preferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}
