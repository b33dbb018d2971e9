//! Server connection settings.
//!
//! [`ServerConfig`] is serialised to JSON with camelCase keys so that files
//! written by earlier PostSync builds load unchanged:
//!
//! ```json
//! {
//!   "serverAddress": "git.example.com",
//!   "serverPort": "22",
//!   "serverPath": "~/repositories"
//! }
//! ```
//!
//! All three fields are kept as strings.  The port in particular is not parsed
//! into a number: the setup form only checks that each field is non-empty, and
//! the value is interpolated verbatim into the git URL.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default SSH port used when no configuration source provides one.
pub const DEFAULT_SERVER_PORT: &str = "22";

/// Default repository directory on the server.
pub const DEFAULT_SERVER_PATH: &str = "~/repositories";

/// Identifies one of the three configuration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ServerAddress,
    ServerPort,
    ServerPath,
}

impl ConfigField {
    /// All fields, in the order the setup form checks them.
    pub const ALL: [ConfigField; 3] = [
        ConfigField::ServerAddress,
        ConfigField::ServerPort,
        ConfigField::ServerPath,
    ];

    /// Human-readable label used in setup form messages.
    pub fn label(self) -> &'static str {
        match self {
            ConfigField::ServerAddress => "Server address",
            ConfigField::ServerPort => "Server port",
            ConfigField::ServerPath => "Server path",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by [`ServerConfig::validate`] for the first empty field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is required")]
pub struct MissingFieldError(pub ConfigField);

/// Effective connection settings for the remote git server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Host name or IP of the git server.  Empty until the user runs setup.
    pub server_address: String,
    /// SSH port, kept as entered.
    pub server_port: String,
    /// Directory on the server containing the project repositories.
    pub server_path: String,
}

impl Default for ServerConfig {
    /// Returns the hard-coded fallback used when no source is available.
    ///
    /// | Field          | Default            |
    /// |----------------|--------------------|
    /// | server_address | `""`               |
    /// | server_port    | `"22"`             |
    /// | server_path    | `"~/repositories"` |
    fn default() -> Self {
        Self {
            server_address: String::new(),
            server_port: DEFAULT_SERVER_PORT.to_string(),
            server_path: DEFAULT_SERVER_PATH.to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a config from the three field values.
    pub fn new(
        server_address: impl Into<String>,
        server_port: impl Into<String>,
        server_path: impl Into<String>,
    ) -> Self {
        Self {
            server_address: server_address.into(),
            server_port: server_port.into(),
            server_path: server_path.into(),
        }
    }

    /// Returns the value of `field`.
    pub fn field(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::ServerAddress => &self.server_address,
            ConfigField::ServerPort => &self.server_port,
            ConfigField::ServerPath => &self.server_path,
        }
    }

    /// Overwrites the value of `field`.
    pub fn set_field(&mut self, field: ConfigField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ConfigField::ServerAddress => self.server_address = value,
            ConfigField::ServerPort => self.server_port = value,
            ConfigField::ServerPath => self.server_path = value,
        }
    }

    /// Checks that every field is non-empty, reporting the first empty one.
    ///
    /// Fields are checked in [`ConfigField::ALL`] order.  No format or range
    /// checks are applied: `"abc"` is an acceptable port.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] naming the first empty field.
    pub fn validate(&self) -> Result<(), MissingFieldError> {
        match ConfigField::ALL.into_iter().find(|f| self.field(*f).is_empty()) {
            Some(field) => Err(MissingFieldError(field)),
            None => Ok(()),
        }
    }

    /// `true` when all three fields are non-empty.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Formats the SSH clone URL for `repository`.
    ///
    /// Plain interpolation: neither the path nor the repository name is
    /// escaped or checked for path separators.
    ///
    /// ```
    /// use postsync_core::ServerConfig;
    ///
    /// let cfg = ServerConfig::new("git.example.com", "22", "repos");
    /// assert_eq!(cfg.git_url("proj"), "ssh://git@git.example.com:22/repos/proj.git");
    /// ```
    pub fn git_url(&self, repository: &str) -> String {
        format!(
            "ssh://git@{}:{}/{}/{}.git",
            self.server_address, self.server_port, self.server_path, repository
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
