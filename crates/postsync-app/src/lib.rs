//! postsync-app library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does postsync-app do? (for beginners)
//!
//! PostSync lives in the macOS menu bar.  Before any project can be checked
//! out, the app needs to know which git server to talk to.  At startup it
//! resolves that configuration from the first source that works:
//!
//! 1. `<app-support>/PostSync/config.json` (the current format).
//! 2. The `PostSyncConfig` entry in the preference store.
//! 3. The legacy `~/fcp-git/.config` `KEY=VALUE` file.
//! 4. Built-in defaults.
//!
//! The menu and setup surfaces then read and edit that configuration through
//! the UI bridge.  The project actions (check out, check in, quick save, ...)
//! are named hooks without a default implementation.

/// Application layer: persistence ports, resolution chain, config manager,
/// setup form and menu command hooks.
pub mod application;

/// Infrastructure layer: file stores, preference store, platform paths, UI bridge.
pub mod infrastructure;
