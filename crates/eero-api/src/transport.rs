// Shared transport configuration for building the reqwest::Client.
//
// Timeout, identity header and base URL live here so the client module
// only deals with request mechanics.

use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Production API root. Every resource path is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://api-user.e2ro.com/2.2";

/// Client identity sent on every request. The vendor gates the API on it.
pub const DEFAULT_USER_AGENT: &str = "eero-ios/2.16.0 (iPhone8,1; iOS 11.3)";

/// Transport settings for the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Config pointing at a different API root (mock servers, staging).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| Error::Client(format!("failed to build HTTP client: {e}")))
    }
}
