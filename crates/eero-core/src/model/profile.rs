// ── Profile domain types ──

use serde::Serialize;

use super::resource_id::ResourceId;

/// A parental-control profile. `device_urls` is the ordered membership; it
/// is only populated by the single-profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: ResourceId,
    pub url: String,
    pub name: String,
    pub paused: bool,
    pub device_urls: Vec<String>,
}

impl Profile {
    /// `"paused"` or `"active"`.
    pub fn status(&self) -> &'static str {
        if self.paused { "paused" } else { "active" }
    }
}
