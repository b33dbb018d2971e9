//! # postsync-core
//!
//! Shared library for PostSync containing the server configuration model,
//! the legacy `KEY=VALUE` config parser, and the project records shown in the
//! menu-bar UI.
//!
//! This crate has zero dependencies on the file system, platform directories,
//! UI frameworks, or async runtimes.
//!
//! # Architecture overview (for beginners)
//!
//! PostSync is a menu-bar shell around a Final Cut Pro project check-out /
//! check-in workflow backed by a remote git server.  Everything the app needs
//! to know about that server lives in one small record: an address, an SSH
//! port and the directory on the server that holds the repositories.
//!
//! This crate (`postsync-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – Pure business types.  [`ServerConfig`] with its
//!   completeness check and git URL derivation, plus the placeholder
//!   [`Project`] records displayed in the menu.
//!
//! - **`legacy`** – The parser for the pre-existing plain-text settings file
//!   (`~/fcp-git/.config`) that PostSync is migrating users away from.

pub mod domain;
pub mod legacy;

// Re-export the most-used types at the crate root so callers can write
// `postsync_core::ServerConfig` instead of `postsync_core::domain::config::ServerConfig`.
pub use domain::config::{ConfigField, MissingFieldError, ServerConfig};
pub use domain::project::{sample_projects, Project, ProjectId};
pub use legacy::parse_legacy_config;
