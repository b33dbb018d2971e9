//! Configuration persistence ports and the startup resolution chain.
//!
//! Each storage backend implements [`ConfigSource`] (and [`ConfigSink`] when it
//! can be written).  [`resolve_config`] walks an ordered list of sources and
//! returns the first configuration that loads:
//!
//! ```text
//! config.json ──fail──► preferences ──fail──► ~/fcp-git/.config ──fail──► defaults
//!      │ ok                  │ ok                     │ ok
//!      ▼                     ▼                        ▼
//!   ServerConfig          ServerConfig            ServerConfig
//! ```
//!
//! # Failure policy
//!
//! A missing or corrupt source is never fatal.  The error is logged and the
//! next source is tried; when every source fails the built-in defaults are
//! used.  Startup therefore always produces a configuration.

use std::path::PathBuf;

use postsync_core::ServerConfig;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for configuration reads and writes.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform application-support or home directory could not be determined.
    #[error("could not determine platform directory")]
    NoPlatformDir,

    /// The source holds no configuration (file absent, key unset).
    #[error("no configuration found at {location}")]
    NotFound { location: String },

    /// The source exists but could not be read.
    #[error("I/O error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored content is not a valid configuration.
    #[error("failed to parse configuration from {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialised.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The configuration could not be written.
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// `true` for the "nothing stored here" case, which is logged at a lower level.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}

/// A place a [`ServerConfig`] can be loaded from.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource {
    /// Short label used in log messages (e.g. `"config file"`).
    fn name(&self) -> &'static str;

    /// Loads the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when nothing is stored, or a
    /// read/parse error when the stored content is unusable.
    fn load(&self) -> Result<ServerConfig, ConfigError>;
}

/// A place a [`ServerConfig`] can be written to.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSink {
    /// Short label used in log messages.
    fn name(&self) -> &'static str;

    /// Persists `config`, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] or [`ConfigError::Write`].
    fn save(&self, config: &ServerConfig) -> Result<(), ConfigError>;
}

/// The outcome of running the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub config: ServerConfig,
    /// Name of the source that supplied `config`, or `None` for the defaults.
    pub origin: Option<&'static str>,
}

/// Returns the first configuration that loads from `sources`, in order.
///
/// Falls back to [`ServerConfig::default`] when every source fails.
pub fn resolve_config(sources: &[&dyn ConfigSource]) -> ResolvedConfig {
    for source in sources {
        match source.load() {
            Ok(config) => {
                info!("configuration loaded from {}", source.name());
                return ResolvedConfig {
                    config,
                    origin: Some(source.name()),
                };
            }
            Err(e) if e.is_not_found() => {
                debug!("{}: {e}", source.name());
            }
            Err(e) => {
                warn!("failed to load configuration from {}: {e}", source.name());
            }
        }
    }

    info!("no configuration source available; using defaults");
    ResolvedConfig {
        config: ServerConfig::default(),
        origin: None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
