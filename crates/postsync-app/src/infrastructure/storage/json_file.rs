//! JSON configuration file (`<app-support>/PostSync/config.json`).
//!
//! This is the primary store: it is tried first at startup and is where the
//! setup form saves by default.

use std::path::{Path, PathBuf};

use postsync_core::ServerConfig;

use crate::application::resolve_config::{ConfigError, ConfigSink, ConfigSource};

/// File-backed [`ConfigSource`] and [`ConfigSink`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for JsonFileStore {
    fn name(&self) -> &'static str {
        "config file"
    }

    fn load(&self) -> Result<ServerConfig, ConfigError> {
        let content = match std::fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    location: self.path.display().to_string(),
                })
            }
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

impl ConfigSink for JsonFileStore {
    fn name(&self) -> &'static str {
        "config file"
    }

    /// Writes the config, creating the containing directory first.
    fn save(&self, config: &ServerConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_vec_pretty(config)?;
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
