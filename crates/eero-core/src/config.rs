// ── Session configuration ──
//
// Runtime settings for building an EeroClient, plus the contract for the
// persistent store that keeps the session token and the active network.
// This crate never touches the filesystem; eero-config implements the store.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::CoreError;

/// Runtime configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// API root, e.g. `https://api-user.e2ro.com/2.2`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let transport = eero_api::TransportConfig::default();
        Self {
            base_url: transport.base_url,
            timeout: transport.timeout,
            user_agent: transport.user_agent,
        }
    }
}

impl SessionConfig {
    pub(crate) fn transport(&self) -> eero_api::TransportConfig {
        eero_api::TransportConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// What survives between invocations.
#[derive(Debug, Clone, Default)]
pub struct StoredConfig {
    pub token: Option<SecretString>,
    pub network_id: Option<String>,
}

impl StoredConfig {
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Persistent store for the session token and the active network ID.
pub trait ConfigStore: Send + Sync {
    fn load(&self) -> Result<StoredConfig, CoreError>;

    /// Overwrite the stored token and network ID.
    fn save(&self, config: &StoredConfig) -> Result<(), CoreError>;

    /// Remember the active network, leaving the stored token untouched.
    fn save_network_id(&self, network_id: &str) -> Result<(), CoreError>;

    /// Forget the token and network ID.
    fn clear(&self) -> Result<(), CoreError>;

    fn has_token(&self) -> bool {
        self.load().is_ok_and(|c| c.has_token())
    }
}

/// Store that lives only as long as the process. Used by tests and by
/// callers that manage credentials themselves.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    inner: std::sync::Mutex<StoredConfig>,
}

impl MemoryConfigStore {
    pub fn new(config: StoredConfig) -> Self {
        Self {
            inner: std::sync::Mutex::new(config),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoredConfig> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<StoredConfig, CoreError> {
        Ok(self.lock().clone())
    }

    fn save(&self, config: &StoredConfig) -> Result<(), CoreError> {
        *self.lock() = config.clone();
        Ok(())
    }

    fn save_network_id(&self, network_id: &str) -> Result<(), CoreError> {
        self.lock().network_id = Some(network_id.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        *self.lock() = StoredConfig::default();
        Ok(())
    }
}
