//! Persistent key-value settings, kept outside the database.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk document shape for a settings store.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Persistent string-to-string settings store backed by one JSON file.
///
/// Reads and writes are synchronous. Failed writes are swallowed by
/// contract: the caller cannot observe them, the entry is simply not
/// stored.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// A store backed by the file at `path`. The file is created on the
    /// first successful [`SettingsStore::set`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Write failures are not surfaced: the call returns normally whether
    /// or not the entry was persisted.
    pub fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.try_set(key, value) {
            tracing::warn!(error = %err, key, "settings write dropped");
        }
    }

    /// Fetch the value stored under `key`, or `None` if absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.load().entries.get(key).cloned()
    }

    fn try_set(&self, key: &str, value: &str) -> std::io::Result<()> {
        let mut file = self.load();
        file.entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&file).map_err(std::io::Error::other)?;
        // Write a sibling temp file, then rename over the store, so a torn
        // write never corrupts existing entries.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> StoreFile {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return StoreFile::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}
