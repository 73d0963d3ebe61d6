// SPDX-License-Identifier: MPL-2.0
//! Persisted key-value preference store.
//!
//! User preferences are reached through the [`PreferenceStore`] port so the
//! composition root can inject either the on-disk TOML adapter or an
//! in-memory store. Reads degrade to "absent" when the backing store is
//! unavailable; writes surface their failure so callers can fall back to
//! session-only behavior.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Well-known preference keys.
pub mod keys {
    /// Persisted display mode, `"light"` or `"dark"`.
    pub const PREFERRED_THEME: &str = "preferredTheme";

    /// Locale identifier in BCP-47 form (e.g. `pt-BR`).
    pub const LOCALE: &str = "i18nextLng";
}

/// Preference file name within the app config directory.
const PREFS_FILE: &str = "prefs.toml";

/// Port over the persisted key-value store.
pub trait PreferenceStore {
    /// Reads the value stored under `key`. Backing-store failures are
    /// reported as an absent key.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Disk adapter storing preferences as a flat TOML string table.
#[derive(Debug)]
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    /// Adapter over an explicit file path (used by tests and portable
    /// deployments).
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Adapter over the platform config directory, or `None` when that
    /// directory cannot be determined.
    #[must_use]
    pub fn open_default() -> Option<Self> {
        crate::app::paths::get_app_config_dir().map(|dir| Self::new(dir.join(PREFS_FILE)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing and malformed files both read as an empty table so a corrupt
    /// preference file never blocks startup.
    fn read_table(&self) -> BTreeMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        toml::from_str(&content).unwrap_or_default()
    }

    fn write_table(&self, table: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(table)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for TomlStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table();
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)
    }
}

/// In-memory adapter for tests and for sessions where no config directory
/// exists. Values do not survive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Store pre-seeded with the given key-value pairs.
    #[must_use]
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Store("preference table lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
