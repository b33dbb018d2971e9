//! Storage infrastructure: configuration persistence adapters.
//!
//! One adapter per backend, each implementing the application-layer
//! [`ConfigSource`](crate::application::resolve_config::ConfigSource) port:
//!
//! - **`json_file`** – `<app-support>/PostSync/config.json`, read and written.
//! - **`preferences`** – a key-value preference store holding the same JSON
//!   blob under `PostSyncConfig`, read and written.
//! - **`legacy_file`** – `~/fcp-git/.config`, read only.
//! - **`paths`** – where those files live on each platform.
//!
//! [`ConfigStores`] bundles the three adapters so the binary and the UI
//! bridge build the startup chain the same way.

pub mod json_file;
pub mod legacy_file;
pub mod paths;
pub mod preferences;

use std::path::{Path, PathBuf};

use postsync_core::ServerConfig;
use tracing::warn;

use crate::application::resolve_config::{ConfigError, ConfigSink, ConfigSource};
use json_file::JsonFileStore;
use legacy_file::LegacyConfigFile;
use preferences::{FilePreferences, PreferenceConfigStore};

/// The three configuration backends, in resolution order.
///
/// A backend is `None` when its location could not be determined.  It is then
/// left out of the chain instead of failing startup.
pub struct ConfigStores {
    pub json_file: Option<JsonFileStore>,
    pub preferences: Option<PreferenceConfigStore<FilePreferences>>,
    pub legacy: Option<LegacyConfigFile>,
}

impl ConfigStores {
    /// Stores at the given locations, falling back to the platform
    /// application-support and home directories for any that are `None`.
    ///
    /// Never fails: a location the platform cannot provide is logged and its
    /// stores are skipped.
    pub fn locate(app_dir: Option<PathBuf>, legacy_path: Option<PathBuf>) -> Self {
        let app_dir = app_dir
            .or_else(|| located(paths::app_support_dir(), "config file and preferences"));
        let legacy_path =
            legacy_path.or_else(|| located(paths::legacy_config_path(), "legacy config"));
        Self::from_locations(app_dir.as_deref(), legacy_path)
    }

    /// Stores rooted at `app_dir` (holding `config.json` and
    /// `preferences.json`) with the legacy file at `legacy_path`.
    pub fn with_paths(app_dir: &Path, legacy_path: PathBuf) -> Self {
        Self::from_locations(Some(app_dir), Some(legacy_path))
    }

    /// Stores for whichever locations are known.
    pub fn from_locations(app_dir: Option<&Path>, legacy_path: Option<PathBuf>) -> Self {
        Self {
            json_file: app_dir.map(|d| JsonFileStore::new(d.join(paths::CONFIG_FILE_NAME))),
            preferences: app_dir.map(|d| {
                PreferenceConfigStore::new(FilePreferences::new(
                    d.join(paths::PREFERENCES_FILE_NAME),
                ))
            }),
            legacy: legacy_path.map(LegacyConfigFile::new),
        }
    }

    /// The resolution chain: config file, preferences, legacy file.  Stores
    /// without a location are skipped.
    pub fn chain(&self) -> Vec<&dyn ConfigSource> {
        let mut chain: Vec<&dyn ConfigSource> = Vec::with_capacity(3);
        if let Some(store) = &self.json_file {
            chain.push(store);
        }
        if let Some(store) = &self.preferences {
            chain.push(store);
        }
        if let Some(store) = &self.legacy {
            chain.push(store);
        }
        chain
    }
}

fn located(path: Result<PathBuf, ConfigError>, store: &str) -> Option<PathBuf> {
    match path {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("{store} skipped: {e}");
            None
        }
    }
}

/// Save target standing in for a store whose location is unknown.
///
/// Every save fails with [`ConfigError::NoPlatformDir`].
#[derive(Debug, Clone, Copy)]
pub struct UnavailableStore {
    name: &'static str,
}

impl UnavailableStore {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl ConfigSink for UnavailableStore {
    fn name(&self) -> &'static str {
        self.name
    }

    fn save(&self, _config: &ServerConfig) -> Result<(), ConfigError> {
        Err(ConfigError::NoPlatformDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_paths_chains_all_three_stores_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let stores = ConfigStores::with_paths(dir.path(), dir.path().join("legacy"));

        let names: Vec<&str> = stores.chain().iter().map(|s| s.name()).collect();

        assert_eq!(names, ["config file", "preferences", "legacy config"]);
    }

    #[test]
    fn test_unknown_app_dir_leaves_only_legacy_in_chain() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();

        // Act
        let stores = ConfigStores::from_locations(None, Some(dir.path().join("legacy")));

        // Assert
        assert!(stores.json_file.is_none());
        assert!(stores.preferences.is_none());
        let names: Vec<&str> = stores.chain().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["legacy config"]);
    }

    #[test]
    fn test_no_locations_gives_empty_chain() {
        let stores = ConfigStores::from_locations(None, None);
        assert!(stores.chain().is_empty());
    }

    #[test]
    fn test_explicit_locations_are_used_as_given() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = dir.path().join("fcp-git").join(".config");

        let stores = ConfigStores::locate(Some(dir.path().to_path_buf()), Some(legacy.clone()));

        let json = stores.json_file.expect("config file store");
        assert_eq!(json.path(), dir.path().join("config.json"));
        assert!(stores.preferences.is_some());
        assert!(stores.legacy.is_some());
    }

    #[test]
    fn test_unavailable_store_refuses_to_save() {
        let sink = UnavailableStore::new("config file");

        let err = sink.save(&ServerConfig::default()).unwrap_err();

        assert!(matches!(err, ConfigError::NoPlatformDir));
        assert_eq!(sink.name(), "config file");
    }
}
