//! Integration tests for the startup configuration chain.
//!
//! These tests exercise the real storage adapters end-to-end against temporary
//! directories: `ConfigStores` + `ConfigManager` + the UI bridge.

use postsync_app::application::config_manager::ConfigManager;
use postsync_app::application::resolve_config::{resolve_config, ConfigSink};
use postsync_app::application::setup::SetupForm;
use postsync_app::infrastructure::storage::ConfigStores;
use postsync_app::infrastructure::ui_bridge::{self, AppState};
use postsync_core::ServerConfig;

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn stores(&self) -> ConfigStores {
        ConfigStores::with_paths(
            &self.dir.path().join("PostSync"),
            self.dir.path().join("fcp-git").join(".config"),
        )
    }

    fn write_config_json(&self, content: &str) {
        let dir = self.dir.path().join("PostSync");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.json"), content).unwrap();
    }

    fn write_legacy(&self, content: &str) {
        let dir = self.dir.path().join("fcp-git");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(".config"), content).unwrap();
    }
}

#[test]
fn test_nothing_available_resolves_to_invalid_default() {
    let fx = Fixture::new();
    let stores = fx.stores();

    let resolved = resolve_config(&stores.chain());

    assert_eq!(resolved.config, ServerConfig::new("", "22", "~/repositories"));
    assert_eq!(resolved.origin, None);
    assert!(!resolved.config.is_valid());
}

#[test]
fn test_saved_config_file_is_reloaded_identically() {
    // Arrange
    let fx = Fixture::new();
    let cfg = ServerConfig::new("git.example.com", "2222", "/data/repos");
    fx.stores().json_file.unwrap().save(&cfg).expect("save");

    // Act
    let stores = fx.stores();
    let resolved = resolve_config(&stores.chain());

    // Assert
    assert_eq!(resolved.config, cfg);
    assert_eq!(resolved.origin, Some("config file"));
}

#[test]
fn test_corrupt_config_file_falls_back_to_preferences() {
    // Arrange
    let fx = Fixture::new();
    fx.write_config_json("{ this is not json");
    let prefs_cfg = ServerConfig::new("prefs.example.com", "22", "repos");
    fx.stores()
        .preferences
        .unwrap()
        .save(&prefs_cfg)
        .expect("save prefs");
    fx.write_legacy("SERVER_ADDRESS=legacy.example.com");

    // Act
    let stores = fx.stores();
    let resolved = resolve_config(&stores.chain());

    // Assert
    assert_eq!(resolved.config, prefs_cfg);
    assert_eq!(resolved.origin, Some("preferences"));
}

#[test]
fn test_legacy_file_used_when_newer_stores_are_absent() {
    // Arrange
    let fx = Fixture::new();
    fx.write_legacy(
        "SERVER_ADDRESS=git.example.com\nSERVER_PORT=2222\n# comment\n\nSERVER_PATH=/data/repos",
    );

    // Act
    let stores = fx.stores();
    let resolved = resolve_config(&stores.chain());

    // Assert
    assert_eq!(
        resolved.config,
        ServerConfig::new("git.example.com", "2222", "/data/repos")
    );
    assert_eq!(resolved.origin, Some("legacy config"));
}

#[test]
fn test_legacy_value_with_equals_keeps_default_path() {
    let fx = Fixture::new();
    fx.write_legacy("SERVER_ADDRESS=h\nSERVER_PATH=/data=repos");

    let stores = fx.stores();
    let resolved = resolve_config(&stores.chain());

    assert_eq!(resolved.config.server_path, "~/repositories");
}

#[test]
fn test_config_file_takes_precedence_over_legacy() {
    let fx = Fixture::new();
    fx.write_legacy("SERVER_ADDRESS=legacy.example.com");
    fx.stores()
        .json_file
        .unwrap()
        .save(&ServerConfig::new("file.example.com", "22", "p"))
        .unwrap();

    let stores = fx.stores();
    let manager = ConfigManager::load(&stores.chain());

    assert_eq!(manager.get().server_address, "file.example.com");
}

#[tokio::test]
async fn test_setup_saved_through_bridge_survives_restart() {
    // Arrange
    let fx = Fixture::new();
    let state = AppState::new(fx.stores());
    let form = SetupForm {
        server_address: "git.example.com".to_string(),
        server_port: "22".to_string(),
        server_path: "repos".to_string(),
    };

    // Act
    let saved = ui_bridge::save_setup(state, form).await;
    let restarted = AppState::new(fx.stores());
    let url = ui_bridge::get_git_url(restarted, "proj".to_string()).await;

    // Assert
    assert!(saved.success);
    assert_eq!(
        url.data.as_deref(),
        Some("ssh://git@git.example.com:22/repos/proj.git")
    );
}

#[tokio::test]
async fn test_preference_save_is_not_mirrored_to_config_file() {
    let fx = Fixture::new();
    let state = AppState::new(fx.stores());
    let form = SetupForm {
        server_address: "prefs.example.com".to_string(),
        server_port: "22".to_string(),
        server_path: "repos".to_string(),
    };

    let saved = ui_bridge::save_setup_to_preferences(state, form).await;

    assert!(saved.success);
    assert!(!fx.dir.path().join("PostSync").join("config.json").exists());
    let stores = fx.stores();
    assert_eq!(resolve_config(&stores.chain()).origin, Some("preferences"));
}

#[tokio::test]
async fn test_address_only_setup_keeps_saved_port_and_path() {
    // Arrange: a complete config saved by an earlier run
    let fx = Fixture::new();
    let first = AppState::new(fx.stores());
    let saved = ui_bridge::save_setup(
        first,
        SetupForm {
            server_address: "a.example.com".to_string(),
            server_port: "2222".to_string(),
            server_path: "/srv/repos".to_string(),
        },
    )
    .await;
    assert!(saved.success);

    // Act: restart and change only the address
    let state = AppState::new(fx.stores());
    let current = ui_bridge::get_setup_status(std::sync::Arc::clone(&state))
        .await
        .data
        .expect("status")
        .form;
    let form = current.with_overrides(Some("b.example.com".to_string()), None, None);
    let result = ui_bridge::save_setup(state, form).await;

    // Assert
    assert!(result.success);
    let stores = fx.stores();
    assert_eq!(
        resolve_config(&stores.chain()).config,
        ServerConfig::new("b.example.com", "2222", "/srv/repos")
    );
}

#[test]
fn test_missing_app_dir_still_reads_legacy_file() {
    // Arrange
    let fx = Fixture::new();
    fx.write_legacy("SERVER_ADDRESS=legacy.example.com");

    // Act
    let legacy = fx.dir.path().join("fcp-git").join(".config");
    let stores = ConfigStores::from_locations(None, Some(legacy));
    let resolved = resolve_config(&stores.chain());

    // Assert
    assert_eq!(resolved.config.server_address, "legacy.example.com");
    assert_eq!(resolved.origin, Some("legacy config"));
}
