//! Infrastructure layer for PostSync.
//!
//! Contains OS-facing adapters: the configuration file stores, the preference
//! store, platform directory lookup, and the UI command bridge.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `postsync_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod storage;
pub mod ui_bridge;
