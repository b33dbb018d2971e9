//! Domain entities for PostSync.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of a Clean Architecture codebase is the **domain**.
//! Domain code has no imports from file-system APIs, platform directory
//! lookups, or UI frameworks, so it can be compiled and tested anywhere.
//!
//! Outer layers (storage adapters, the UI bridge, the binary) depend on the
//! domain, but the domain never depends on them.

/// Server connection settings — the only persisted entity.
///
/// See [`config::ServerConfig`] for the main type.
pub mod config;

/// Project records shown in the menu-bar list.
pub mod project;
