#![forbid(unsafe_code)]

//! Persisted preference store.
//!
//! A single small key-value map surviving across sessions, the terminal
//! analogue of a browser's local storage. The file lives under the platform
//! data-local directory (override with `EXAMDECK_STATE_DIR`). A missing or
//! unreadable file reads as the empty store; a failed write is logged and
//! otherwise ignored, since losing a theme preference must never take the
//! dashboard down.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, RuntimeError};

/// Environment override for where the preference file lives.
pub const STATE_DIR_ENV: &str = "EXAMDECK_STATE_DIR";

const PREFS_FILE: &str = "prefs.json";

/// Get/set of persisted string preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Non-persisted store for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// JSON-file-backed store.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at its standard location.
    ///
    /// `EXAMDECK_STATE_DIR` wins over the platform data-local directory.
    /// When neither resolves the store still works, it just forgets
    /// everything at exit.
    #[must_use]
    pub fn open_default() -> Self {
        let dir = std::env::var_os(STATE_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::data_local_dir().map(|p| p.join("examdeck")));
        match dir {
            Some(dir) => Self::open(dir.join(PREFS_FILE)),
            None => {
                tracing::warn!("no data directory available, preferences will not persist");
                Self {
                    path: None,
                    values: HashMap::new(),
                }
            }
        }
    }

    /// Open the store backed by an explicit file.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|body| serde_json::from_str(&body).ok())
            .unwrap_or_default();
        Self {
            path: Some(path),
            values,
        }
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| RuntimeError::Store {
                path: path.clone(),
                source,
            })?;
        }
        let body = serde_json::to_string_pretty(&self.values).map_err(|source| {
            RuntimeError::Store {
                path: path.clone(),
                source: source.into(),
            }
        })?;
        fs::write(path, body).map_err(|source| RuntimeError::Store {
            path: path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
        if let Err(error) = self.persist() {
            tracing::warn!(%error, "preference write failed");
        }
    }
}
