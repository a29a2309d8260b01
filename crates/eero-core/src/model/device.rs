// ── Device domain types ──

use serde::Serialize;

use super::resource_id::{MacAddress, ResourceId};

/// A client device on the network, as of the last fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub id: ResourceId,
    /// Canonical URL from the vendor. Profile membership writes use it.
    pub url: String,
    pub mac: Option<MacAddress>,
    pub hostname: Option<String>,
    pub nickname: Option<String>,
    pub ip: Option<String>,
    pub connected: bool,
    pub wireless: bool,
    pub paused: bool,
    pub blocked: bool,
    pub is_private: bool,
    pub is_guest: bool,
    pub profile: Option<ProfileRef>,
    pub connection_type: Option<String>,
    pub device_type: Option<String>,
}

/// The profile a device belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRef {
    pub id: ResourceId,
    pub name: Option<String>,
}

/// Coarse device state for display. Blocked outranks paused, which
/// outranks connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
    Paused,
    Blocked,
}

impl Device {
    /// First non-empty of nickname, hostname, MAC.
    pub fn display_name(&self) -> &str {
        non_empty(self.nickname.as_deref())
            .or_else(|| non_empty(self.hostname.as_deref()))
            .or_else(|| self.mac.as_ref().map(MacAddress::as_str))
            .unwrap_or_default()
    }

    pub fn status(&self) -> DeviceStatus {
        if self.blocked {
            DeviceStatus::Blocked
        } else if self.paused {
            DeviceStatus::Paused
        } else if self.connected {
            DeviceStatus::Online
        } else {
            DeviceStatus::Offline
        }
    }

    /// `"wireless"` or `"wired"`.
    pub fn medium(&self) -> &'static str {
        if self.wireless { "wireless" } else { "wired" }
    }

    /// Profile column text: `Guest` for guest devices, otherwise
    /// `Name (id)` when a profile is assigned.
    pub fn profile_label(&self) -> String {
        if self.is_guest {
            return "Guest".into();
        }
        match &self.profile {
            Some(p) => format!("{} ({})", p.name.as_deref().unwrap_or_default(), p.id),
            None => String::new(),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
