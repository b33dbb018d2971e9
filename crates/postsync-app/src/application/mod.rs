//! Application layer for PostSync.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules in `postsync-core`) and the infrastructure (file
//! system, platform directories, UI).
//!
//! Code in this layer depends on **traits** such as [`resolve_config::ConfigSource`]
//! rather than on concrete stores, so tests can swap in mocks and the storage
//! backends can change without touching the logic here.
//!
//! # Sub-modules
//!
//! - **`resolve_config`** – Persistence ports and the ordered fallback chain
//!   that produces the effective configuration at startup.
//! - **`config_manager`** – Owns the process-wide configuration and notifies
//!   subscribers when it changes.
//! - **`setup`** – The setup form: field checks and save.
//! - **`menu_commands`** – The menu actions and the hook registry that a
//!   future check-in/check-out engine plugs into.

pub mod config_manager;
pub mod menu_commands;
pub mod resolve_config;
pub mod setup;
