//! ConfigManager: owner of the process-wide server configuration.
//!
//! The UI reads the configuration through [`ConfigManager::get`] and changes
//! it through [`ConfigManager::set`].  Views that need to refresh when the
//! configuration changes register a callback with
//! [`ConfigManager::subscribe`]; every `set` invokes all callbacks
//! synchronously, in the order they were registered.
//!
//! Persistence is explicit: nothing is written until the caller picks a sink
//! and calls [`ConfigManager::save_to`].

use postsync_core::ServerConfig;
use tracing::{info, warn};

use crate::application::resolve_config::{resolve_config, ConfigError, ConfigSink, ConfigSource};

/// Callback invoked with the new configuration after every [`ConfigManager::set`].
pub type ConfigListener = Box<dyn Fn(&ServerConfig) + Send + Sync>;

/// Handle returned by [`ConfigManager::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ConfigManager {
    config: ServerConfig,
    origin: Option<&'static str>,
    listeners: Vec<(SubscriptionId, ConfigListener)>,
    next_id: u64,
}

impl ConfigManager {
    /// Creates a manager holding `config` with no subscribers.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            origin: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Creates a manager from the first source in `sources` that loads.
    pub fn load(sources: &[&dyn ConfigSource]) -> Self {
        let resolved = resolve_config(sources);
        let mut manager = Self::new(resolved.config);
        manager.origin = resolved.origin;
        manager
    }

    /// Returns the current configuration.
    pub fn get(&self) -> &ServerConfig {
        &self.config
    }

    /// Name of the source the startup configuration came from, `None` for defaults.
    pub fn origin(&self) -> Option<&'static str> {
        self.origin
    }

    /// Replaces the configuration and notifies every subscriber.
    pub fn set(&mut self, config: ServerConfig) {
        self.config = config;
        for (_, listener) in &self.listeners {
            listener(&self.config);
        }
    }

    /// Registers `listener` to be called after each [`set`](Self::set).
    pub fn subscribe(&mut self, listener: ConfigListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a subscription.  Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// `true` when address, port and path are all non-empty.
    pub fn is_valid(&self) -> bool {
        self.config.is_valid()
    }

    /// SSH clone URL for `repository` on the configured server.
    pub fn git_url(&self, repository: &str) -> String {
        self.config.git_url(repository)
    }

    /// Writes the current configuration to `sink`.
    ///
    /// The outcome is logged here; callers decide whether to surface it.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`ConfigError`].
    pub fn save_to(&self, sink: &dyn ConfigSink) -> Result<(), ConfigError> {
        match sink.save(&self.config) {
            Ok(()) => {
                info!("configuration saved to {}", sink.name());
                Ok(())
            }
            Err(e) => {
                warn!("failed to save configuration to {}: {e}", sink.name());
                Err(e)
            }
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
