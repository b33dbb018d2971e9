//! PostSync entry point.
//!
//! Resolves the server configuration, builds the shared [`AppState`] and runs
//! one UI command selected on the command line.  The menu-bar front end calls
//! the same `ui_bridge` functions.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ ConfigStores            -- config.json, preferences.json, ~/fcp-git/.config
//!  └─ AppState::new()         -- runs the resolution chain
//!  └─ ui_bridge::<command>()  -- status / setup / url / projects / action
//! ```
//!
//! # Examples
//!
//! ```text
//! postsync status
//! postsync setup --address git.example.com --port 22 --path ~/repositories
//! postsync url Wedding_2024_Johnson
//! postsync action check-in --project Wedding_2024_Johnson
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use postsync_app::application::menu_commands::{CommandKind, MenuCommand};
use postsync_app::application::setup::SetupForm;
use postsync_app::infrastructure::storage::ConfigStores;
use postsync_app::infrastructure::ui_bridge::{self, AppState, CommandResult};

#[derive(Parser, Debug)]
#[command(name = "postsync")]
#[command(about = "Final Cut Pro project sync for a remote git server")]
#[command(version)]
struct Args {
    /// Directory holding config.json and preferences.json
    /// (default: <app-support>/PostSync)
    #[arg(long, env = "POSTSYNC_CONFIG_DIR", value_name = "PATH", global = true)]
    config_dir: Option<PathBuf>,

    /// Legacy KEY=VALUE settings file (default: ~/fcp-git/.config)
    #[arg(long, env = "POSTSYNC_LEGACY_CONFIG", value_name = "PATH", global = true)]
    legacy_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the resolved configuration and whether it is complete
    Status,
    /// Save server settings; fields not given keep their current value
    Setup {
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        port: Option<String>,
        #[arg(long)]
        path: Option<String>,
        /// Save to the preference store instead of config.json
        #[arg(long)]
        preferences: bool,
    },
    /// Print the SSH clone URL for a repository
    Url { repository: String },
    /// List checked-out projects
    Projects,
    /// Trigger a menu action
    Action {
        action: ActionArg,
        /// Project name for go-to, check-in and open-in-finder
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ActionArg {
    CheckOut,
    QuickSave,
    Setup,
    TestConnection,
    GoTo,
    CheckIn,
    OpenInFinder,
}

impl From<ActionArg> for CommandKind {
    fn from(a: ActionArg) -> Self {
        match a {
            ActionArg::CheckOut => CommandKind::CheckOutProject,
            ActionArg::QuickSave => CommandKind::QuickSave,
            ActionArg::Setup => CommandKind::OpenSetup,
            ActionArg::TestConnection => CommandKind::TestConnection,
            ActionArg::GoTo => CommandKind::GoTo,
            ActionArg::CheckIn => CommandKind::CheckIn,
            ActionArg::OpenInFinder => CommandKind::OpenInFinder,
        }
    }
}

/// Prints `data` as JSON, or fails with the command's error message.
fn print_result<T: Serialize>(result: CommandResult<T>) -> anyhow::Result<()> {
    match (result.success, result.data) {
        (true, Some(data)) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        _ => bail!(result.error.unwrap_or_else(|| "unknown error".to_string())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("PostSync starting");

    let stores = ConfigStores::locate(args.config_dir, args.legacy_config);
    let state = AppState::new(stores);

    match args.command {
        Command::Status => print_result(ui_bridge::get_setup_status(Arc::clone(&state)).await)?,
        Command::Setup {
            address,
            port,
            path,
            preferences,
        } => {
            let current = SetupForm::from_config(state.config.lock().await.get());
            let form = current.with_overrides(address, port, path);
            let result = if preferences {
                ui_bridge::save_setup_to_preferences(Arc::clone(&state), form).await
            } else {
                ui_bridge::save_setup(Arc::clone(&state), form).await
            };
            print_result(result)?;
        }
        Command::Url { repository } => {
            print_result(ui_bridge::get_git_url(Arc::clone(&state), repository).await)?
        }
        Command::Projects => print_result(ui_bridge::get_projects(Arc::clone(&state)).await)?,
        Command::Action { action, project } => {
            let kind = CommandKind::from(action);
            let Some(command) = MenuCommand::from_kind(kind, project) else {
                bail!("--project is required for {action:?}");
            };
            print_result(ui_bridge::trigger_action(Arc::clone(&state), command).await)?;
        }
    }

    Ok(())
}
