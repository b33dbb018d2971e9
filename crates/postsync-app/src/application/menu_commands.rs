//! Menu actions and the hook registry behind them.
//!
//! Every button in the menu-bar popover and the setup window maps to a
//! [`MenuCommand`].  The check-out engine does not exist yet, so no command has
//! built-in behaviour: a command runs whatever hook is registered for its
//! [`CommandKind`] in [`CommandHooks`], and is only logged when none is.
//!
//! ```text
//! button ──► MenuCommand ──► CommandHooks::dispatch ──► hook?  ──► Handled
//!                                                      └─ none ──► log "… tapped", Unhandled
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Command discriminant, used as the hook registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    CheckOutProject,
    QuickSave,
    OpenSetup,
    TestConnection,
    GoTo,
    CheckIn,
    OpenInFinder,
}

impl CommandKind {
    /// `true` for commands that act on a single project row.
    pub fn needs_project(self) -> bool {
        matches!(
            self,
            CommandKind::GoTo | CommandKind::CheckIn | CommandKind::OpenInFinder
        )
    }
}

/// A user action triggered from the menu or setup window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MenuCommand {
    /// "Check Out Another Project" in the menu footer.
    CheckOutProject,
    /// "Quick Save" in the menu footer.
    QuickSave,
    /// "Setup" in the menu footer.
    OpenSetup,
    /// "Test Connection" in the setup window; only shown once configured.
    TestConnection,
    /// "Go To" on a project row.
    GoTo { project: String },
    /// "Check In" on a project row.
    CheckIn { project: String },
    /// "Open in Finder" in the project detail list.
    OpenInFinder { project: String },
}

impl MenuCommand {
    /// Builds a command from its kind, attaching `project` to row commands.
    ///
    /// Returns `None` when a row command is requested without a project name.
    pub fn from_kind(kind: CommandKind, project: Option<String>) -> Option<Self> {
        let cmd = match kind {
            CommandKind::CheckOutProject => MenuCommand::CheckOutProject,
            CommandKind::QuickSave => MenuCommand::QuickSave,
            CommandKind::OpenSetup => MenuCommand::OpenSetup,
            CommandKind::TestConnection => MenuCommand::TestConnection,
            CommandKind::GoTo => MenuCommand::GoTo { project: project? },
            CommandKind::CheckIn => MenuCommand::CheckIn { project: project? },
            CommandKind::OpenInFinder => MenuCommand::OpenInFinder { project: project? },
        };
        Some(cmd)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            MenuCommand::CheckOutProject => CommandKind::CheckOutProject,
            MenuCommand::QuickSave => CommandKind::QuickSave,
            MenuCommand::OpenSetup => CommandKind::OpenSetup,
            MenuCommand::TestConnection => CommandKind::TestConnection,
            MenuCommand::GoTo { .. } => CommandKind::GoTo,
            MenuCommand::CheckIn { .. } => CommandKind::CheckIn,
            MenuCommand::OpenInFinder { .. } => CommandKind::OpenInFinder,
        }
    }

    /// Project the command targets, if any.
    pub fn project(&self) -> Option<&str> {
        match self {
            MenuCommand::GoTo { project }
            | MenuCommand::CheckIn { project }
            | MenuCommand::OpenInFinder { project } => Some(project),
            _ => None,
        }
    }
}

impl fmt::Display for MenuCommand {
    /// The button caption, including the project name for row actions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuCommand::CheckOutProject => f.write_str("Check Out Another Project"),
            MenuCommand::QuickSave => f.write_str("Quick Save"),
            MenuCommand::OpenSetup => f.write_str("Setup"),
            MenuCommand::TestConnection => f.write_str("Test Connection"),
            MenuCommand::GoTo { project } => write!(f, "Go To {project}"),
            MenuCommand::CheckIn { project } => write!(f, "Check In {project}"),
            MenuCommand::OpenInFinder { project } => write!(f, "Open {project} in Finder"),
        }
    }
}

/// Handler registered for a [`CommandKind`].
pub type CommandHook = Box<dyn Fn(&MenuCommand) + Send + Sync>;

/// Result of [`CommandHooks::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookOutcome {
    /// A registered hook ran.
    Handled,
    /// No hook is registered; the command was only logged.
    Unhandled,
}

/// Registry of command handlers.  Empty by default.
#[derive(Default)]
pub struct CommandHooks {
    hooks: HashMap<CommandKind, CommandHook>,
}

impl CommandHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `hook` for `kind`, returning the hook it replaced.
    pub fn register(&mut self, kind: CommandKind, hook: CommandHook) -> Option<CommandHook> {
        self.hooks.insert(kind, hook)
    }

    /// Removes the hook for `kind`.  Returns `true` if one was installed.
    pub fn unregister(&mut self, kind: CommandKind) -> bool {
        self.hooks.remove(&kind).is_some()
    }

    pub fn is_registered(&self, kind: CommandKind) -> bool {
        self.hooks.contains_key(&kind)
    }

    /// Runs the hook for `command`, or logs it when none is registered.
    pub fn dispatch(&self, command: &MenuCommand) -> HookOutcome {
        match self.hooks.get(&command.kind()) {
            Some(hook) => {
                hook(command);
                HookOutcome::Handled
            }
            None => {
                info!("{command} tapped");
                HookOutcome::Unhandled
            }
        }
    }
}
