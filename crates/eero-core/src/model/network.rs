// ── Account, network and guest network types ──

use std::fmt;

use serde::Serialize;

use super::resource_id::ResourceId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub id: ResourceId,
    pub url: String,
    pub name: String,
    pub premium: bool,
}

/// The logged-in account and the networks it owns, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub networks: Vec<Network>,
}

/// The network's single guest network.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct GuestNetwork {
    pub enabled: bool,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for GuestNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestNetwork")
            .field("enabled", &self.enabled)
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
