//! Setup form: collects server settings from the user and saves them.
//!
//! The form starts pre-filled with the current configuration.  On submit the
//! three fields are checked in order (address, port, path); the first empty
//! one produces a user-facing message and nothing is written.  Otherwise the
//! values replace the manager's configuration and are saved to the chosen
//! sink.

use postsync_core::{MissingFieldError, ServerConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::config_manager::ConfigManager;
use crate::application::resolve_config::{ConfigError, ConfigSink};

/// Message shown after a successful save.
pub const SAVE_SUCCESS_MESSAGE: &str = "Configuration saved successfully!";

/// Error type for setup form submission.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A required field was left empty.  Nothing was changed.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    /// The new values were applied in memory but could not be persisted.
    #[error("configuration was not saved: {0}")]
    Save(#[from] ConfigError),
}

/// Field values as entered in the setup form.  Values are used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupForm {
    pub server_address: String,
    pub server_port: String,
    pub server_path: String,
}

impl SetupForm {
    /// Pre-fills the form from the current configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            server_address: config.server_address.clone(),
            server_port: config.server_port.clone(),
            server_path: config.server_path.clone(),
        }
    }

    /// Replaces only the fields given as `Some`, keeping the rest as
    /// pre-filled.
    pub fn with_overrides(
        mut self,
        server_address: Option<String>,
        server_port: Option<String>,
        server_path: Option<String>,
    ) -> Self {
        if let Some(address) = server_address {
            self.server_address = address;
        }
        if let Some(port) = server_port {
            self.server_port = port;
        }
        if let Some(path) = server_path {
            self.server_path = path;
        }
        self
    }

    fn to_config(&self) -> ServerConfig {
        ServerConfig::new(
            self.server_address.clone(),
            self.server_port.clone(),
            self.server_path.clone(),
        )
    }

    /// Checks that every field has a value.
    ///
    /// # Errors
    ///
    /// Returns the first empty field, e.g. "Server address is required".
    pub fn validate(&self) -> Result<(), MissingFieldError> {
        self.to_config().validate()
    }

    /// Validates, applies the values to `manager`, and saves to `sink`.
    ///
    /// # Errors
    ///
    /// [`SetupError::MissingField`] leaves `manager` untouched.
    /// [`SetupError::Save`] means the manager holds the new values but the
    /// sink did not persist them.
    pub fn submit(
        &self,
        manager: &mut ConfigManager,
        sink: &dyn ConfigSink,
    ) -> Result<(), SetupError> {
        self.validate()?;
        manager.set(self.to_config());
        manager.save_to(sink)?;
        Ok(())
    }
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::from_config(&ServerConfig::default())
    }
}
