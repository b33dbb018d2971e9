//! UI command bridge: exposes application-layer operations to the menu-bar UI.
//!
//! All UI-facing command functions live here and delegate to the shared
//! [`AppState`].  The presentation layer (menu popover, setup window, or the
//! `postsync` CLI) is the only consumer of this module; it must NOT be
//! imported by the application or domain layers.
//!
//! # Data Transfer Objects (DTOs)
//!
//! Internal types such as [`ConfigManager`] or [`Project`] carry handles and
//! ids that the UI does not need.  DTOs (`ConfigDto`, `SetupStatusDto`,
//! `ProjectDto`) are plain serialisable snapshots that cross the UI boundary.
//!
//! # `CommandResult<T>` wrapper
//!
//! Every command returns `CommandResult<T>` so each response has the same
//! shape: `{ success: bool, data: T | null, error: string | null }`.  The UI
//! shows `error` in an alert and never has to handle a panic or a raw error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

use crate::application::{
    config_manager::ConfigManager,
    menu_commands::{CommandHooks, HookOutcome, MenuCommand},
    resolve_config::ConfigSink,
    setup::{SetupError, SetupForm, SAVE_SUCCESS_MESSAGE},
};
use crate::infrastructure::storage::{ConfigStores, UnavailableStore};
use postsync_core::{sample_projects, Project, ServerConfig};

/// A sink that can be held across `.await` points in shared state.
pub type SharedSink = Box<dyn ConfigSink + Send + Sync>;

// ── Shared application state ──────────────────────────────────────────────────

/// Application state shared between UI commands.
///
/// Wrapped in `Arc<>` and handed to every command.  The mutable parts sit
/// behind `tokio::sync::Mutex` so commands can run from async UI callbacks.
pub struct AppState {
    /// The process-wide server configuration.
    pub config: Mutex<ConfigManager>,
    /// Handlers for the menu actions.  Empty until an engine registers some.
    pub hooks: Mutex<CommandHooks>,
    /// Rows shown in the menu list.
    pub projects: Vec<Project>,
    /// Where the setup form saves by default (`config.json`).
    pub file_sink: SharedSink,
    /// The alternative save target (preference store).
    pub preferences_sink: SharedSink,
}

impl AppState {
    /// Resolves the startup configuration from `stores` and takes ownership of
    /// the writable stores as save targets.  A store without a location is
    /// replaced by one that rejects every save.
    pub fn new(stores: ConfigStores) -> Arc<Self> {
        let manager = ConfigManager::load(&stores.chain());
        let ConfigStores {
            json_file,
            preferences,
            ..
        } = stores;
        let file_sink: SharedSink = match json_file {
            Some(store) => Box::new(store),
            None => Box::new(UnavailableStore::new("config file")),
        };
        let preferences_sink: SharedSink = match preferences {
            Some(store) => Box::new(store),
            None => Box::new(UnavailableStore::new("preferences")),
        };
        Self::with_parts(manager, file_sink, preferences_sink)
    }

    /// Assembles state from already-built parts.
    pub fn with_parts(
        manager: ConfigManager,
        file_sink: SharedSink,
        preferences_sink: SharedSink,
    ) -> Arc<Self> {
        Arc::new(Self {
            config: Mutex::new(manager),
            hooks: Mutex::new(CommandHooks::new()),
            projects: sample_projects(),
            file_sink,
            preferences_sink,
        })
    }
}

// ── Data Transfer Objects ─────────────────────────────────────────────────────

/// DTO for the current server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDto {
    pub server_address: String,
    pub server_port: String,
    pub server_path: String,
    pub is_valid: bool,
}

impl From<&ServerConfig> for ConfigDto {
    fn from(c: &ServerConfig) -> Self {
        Self {
            server_address: c.server_address.clone(),
            server_port: c.server_port.clone(),
            server_path: c.server_path.clone(),
            is_valid: c.is_valid(),
        }
    }
}

/// DTO driving the status panel at the top of the setup window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupStatusDto {
    /// "Configuration Complete" when `true`, "Configuration Required" otherwise.
    pub configured: bool,
    /// Values to pre-fill the form with.
    pub form: SetupForm,
    /// The "Test Connection" button is only shown once configured.
    pub can_test_connection: bool,
    /// Where the configuration was loaded from at startup; `None` for defaults.
    pub loaded_from: Option<String>,
}

/// DTO for one row of the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub last_checkpoint: String,
    pub checked_out_by: String,
}

impl From<&Project> for ProjectDto {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            last_checkpoint: p.last_checkpoint.clone(),
            checked_out_by: p.checked_out_by.clone(),
        }
    }
}

/// Unified response wrapper used by UI commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns the current configuration.
pub async fn get_config(state: Arc<AppState>) -> CommandResult<ConfigDto> {
    let manager = state.config.lock().await;
    CommandResult::ok(ConfigDto::from(manager.get()))
}

/// Returns what the setup window needs to render.
pub async fn get_setup_status(state: Arc<AppState>) -> CommandResult<SetupStatusDto> {
    let manager = state.config.lock().await;
    let configured = manager.is_valid();
    CommandResult::ok(SetupStatusDto {
        configured,
        form: SetupForm::from_config(manager.get()),
        can_test_connection: configured,
        loaded_from: manager.origin().map(str::to_string),
    })
}

/// Validates the form and saves it to the JSON config file.
///
/// On success `data` holds the confirmation message.
pub async fn save_setup(state: Arc<AppState>, form: SetupForm) -> CommandResult<String> {
    submit_setup(&state, form, state.file_sink.as_ref()).await
}

/// Validates the form and saves it to the preference store instead.
pub async fn save_setup_to_preferences(
    state: Arc<AppState>,
    form: SetupForm,
) -> CommandResult<String> {
    submit_setup(&state, form, state.preferences_sink.as_ref()).await
}

async fn submit_setup(
    state: &AppState,
    form: SetupForm,
    sink: &(dyn ConfigSink + Send + Sync),
) -> CommandResult<String> {
    let mut manager = state.config.lock().await;
    match form.submit(&mut manager, sink) {
        Ok(()) => CommandResult::ok(SAVE_SUCCESS_MESSAGE.to_string()),
        Err(SetupError::MissingField(e)) => CommandResult::err(e.to_string()),
        Err(e @ SetupError::Save(_)) => CommandResult::err(e.to_string()),
    }
}

/// Returns the SSH clone URL for `repository`.
pub async fn get_git_url(state: Arc<AppState>, repository: String) -> CommandResult<String> {
    let manager = state.config.lock().await;
    CommandResult::ok(manager.git_url(&repository))
}

/// Returns the project rows for the menu list.
pub async fn get_projects(state: Arc<AppState>) -> CommandResult<Vec<ProjectDto>> {
    CommandResult::ok(state.projects.iter().map(ProjectDto::from).collect())
}

/// Dispatches a menu action to its registered hook.
///
/// "Test Connection" is refused while the configuration is incomplete, as the
/// setup window does not offer it in that state.
pub async fn trigger_action(
    state: Arc<AppState>,
    command: MenuCommand,
) -> CommandResult<HookOutcome> {
    if command == MenuCommand::TestConnection && !state.config.lock().await.is_valid() {
        return CommandResult::err("Configuration required before testing the connection");
    }
    let hooks = state.hooks.lock().await;
    let outcome = hooks.dispatch(&command);
    if outcome == HookOutcome::Handled {
        info!("{command} handled");
    }
    CommandResult::ok(outcome)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
