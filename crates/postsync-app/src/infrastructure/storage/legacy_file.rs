//! Read-only adapter for the legacy `~/fcp-git/.config` file.
//!
//! Parsing is done by [`postsync_core::parse_legacy_config`]; this adapter
//! only deals with reading the file.  PostSync never writes this file.

use std::path::{Path, PathBuf};

use postsync_core::{parse_legacy_config, ServerConfig};

use crate::application::resolve_config::{ConfigError, ConfigSource};

#[derive(Debug, Clone)]
pub struct LegacyConfigFile {
    path: PathBuf,
}

impl LegacyConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for LegacyConfigFile {
    fn name(&self) -> &'static str {
        "legacy config"
    }

    fn load(&self) -> Result<ServerConfig, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(parse_legacy_config(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound {
                location: self.path.display().to_string(),
            }),
            Err(source) => Err(ConfigError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
