//! Key-value preference store holding a second copy of the configuration.
//!
//! On macOS the original app kept this blob in the user-defaults domain.  The
//! [`PreferenceStore`] trait abstracts that store; two implementations exist:
//!
//! - [`MemoryPreferences`] – process-local map, used in tests and headless runs.
//! - [`FilePreferences`] – one JSON document (`preferences.json`) mapping keys
//!   to string values.
//!
//! [`PreferenceConfigStore`] adapts any store to the config ports, keeping the
//! configuration as a JSON string under [`CONFIG_KEY`].

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use postsync_core::ServerConfig;
use tracing::warn;

use crate::application::resolve_config::{ConfigError, ConfigSink, ConfigSource};

/// Key the configuration blob is stored under.
pub const CONFIG_KEY: &str = "PostSyncConfig";

/// String key-value storage.
pub trait PreferenceStore {
    /// Returns the value for `key`, or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns a read or parse error when the backing storage is unusable.
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a write error when the backing storage cannot be updated.
    fn set(&self, key: &str, value: String) -> Result<(), ConfigError>;
}

// ── In-memory store ───────────────────────────────────────────────────────────

/// Process-local preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), ConfigError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value);
        Ok(())
    }
}

// ── File-backed store ─────────────────────────────────────────────────────────

/// Preference store persisted as a single JSON object on disk.
///
/// A missing file is an empty store.  Every `set` rewrites the whole document.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<BTreeMap<String, String>, ConfigError> {
        let content = match std::fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&content).map_err(|source| ConfigError::Parse {
            location: self.path.display().to_string(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: String) -> Result<(), ConfigError> {
        let mut document = match self.read_document() {
            Ok(doc) => doc,
            Err(ConfigError::Parse { location, source }) => {
                warn!("discarding unreadable preferences at {location}: {source}");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        document.insert(key.to_string(), value);

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_vec_pretty(&document)?;
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

// ── Config adapter ────────────────────────────────────────────────────────────

/// Stores the configuration as JSON under [`CONFIG_KEY`] in a [`PreferenceStore`].
#[derive(Debug)]
pub struct PreferenceConfigStore<P> {
    prefs: P,
}

impl<P: PreferenceStore> PreferenceConfigStore<P> {
    pub fn new(prefs: P) -> Self {
        Self { prefs }
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }
}

impl<P: PreferenceStore> ConfigSource for PreferenceConfigStore<P> {
    fn name(&self) -> &'static str {
        "preferences"
    }

    fn load(&self) -> Result<ServerConfig, ConfigError> {
        let blob = self.prefs.get(CONFIG_KEY)?.ok_or_else(|| ConfigError::NotFound {
            location: format!("preference key {CONFIG_KEY}"),
        })?;
        serde_json::from_str(&blob).map_err(|source| ConfigError::Parse {
            location: format!("preference key {CONFIG_KEY}"),
            source,
        })
    }
}

impl<P: PreferenceStore> ConfigSink for PreferenceConfigStore<P> {
    fn name(&self) -> &'static str {
        "preferences"
    }

    fn save(&self, config: &ServerConfig) -> Result<(), ConfigError> {
        let blob = serde_json::to_string(config)?;
        self.prefs.set(CONFIG_KEY, blob)
    }
}
