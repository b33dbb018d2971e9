//! Platform locations of the PostSync configuration files.
//!
//! - macOS:   `~/Library/Application Support/PostSync/`
//! - Linux:   `$XDG_DATA_HOME/PostSync/` or `~/.local/share/PostSync/`
//! - Windows: `%APPDATA%\PostSync\`
//!
//! The legacy settings file is always `~/fcp-git/.config`.

use std::path::PathBuf;

use crate::application::resolve_config::ConfigError;

/// Directory name under the platform application-support directory.
pub const APP_DIR_NAME: &str = "PostSync";

/// File name of the current JSON config.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File name of the preference store document.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Resolves `<app-support>/PostSync`.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformDir`] when the platform data directory
/// cannot be determined.
pub fn app_support_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoPlatformDir)
}

/// Resolves `~/fcp-git/.config`.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformDir`] when the home directory is unknown.
pub fn legacy_config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|h| h.join("fcp-git").join(".config"))
        .ok_or(ConfigError::NoPlatformDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_support_dir_ends_with_postsync() {
        // If no data dir is available (stripped CI env) that is also acceptable.
        if let Ok(path) = app_support_dir() {
            assert!(path.ends_with("PostSync"), "got {path:?}");
        }
    }

    #[test]
    fn test_legacy_config_path_is_under_fcp_git() {
        if let Ok(path) = legacy_config_path() {
            assert!(path.ends_with("fcp-git/.config"), "got {path:?}");
        }
    }
}
