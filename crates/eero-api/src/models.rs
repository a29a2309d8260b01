// eero API response types
//
// Wire models for the vendor's JSON API. Every response is wrapped in the
// `Envelope<T>`. Fields use `#[serde(default)]` liberally because the API is
// inconsistent about field presence across firmware and app versions.
// Resources are identified by their `url`; canonical IDs are derived in core.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard response envelope:
/// ```json
/// { "meta": { "code": 200, "server_id": "...", "timestamp": 0 }, "data": ... }
/// ```
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub meta: Meta,
    pub data: T,
}

/// Metadata from the envelope. Error responses carry `error` instead of data.
#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub server_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ── Auth ─────────────────────────────────────────────────────────────

/// `data` of `POST /login`. The token is unconfirmed until verified.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user_token: String,
}

// ── Account ──────────────────────────────────────────────────────────

/// `data` of `GET /account`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiAccount {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<ContactValue>,
    #[serde(default)]
    pub phone: Option<ContactValue>,
    #[serde(default)]
    pub networks: NetworkList,
}

/// Email / phone entries are objects: `{ "value": "...", "verified": true }`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactValue {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NetworkList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub data: Vec<ApiNetwork>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiNetwork {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub premium_status: Option<PremiumStatus>,
}

/// Older app versions report a boolean, newer ones a label like `"active"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PremiumStatus {
    Flag(bool),
    Label(String),
}

impl PremiumStatus {
    pub fn is_active(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Label(label) => {
                label.eq_ignore_ascii_case("active") || label.eq_ignore_ascii_case("trial")
            }
        }
    }
}

// ── Device ───────────────────────────────────────────────────────────

/// Device object from `GET /networks/{id}/devices`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiDevice {
    pub url: String,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub wireless: bool,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_guest: bool,
    #[serde(default)]
    pub profile: Option<ProfileLink>,
    #[serde(default)]
    pub connection_type: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
}

/// Profile reference embedded in a device.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileLink {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}

// ── Profile ──────────────────────────────────────────────────────────

/// Profile object. The list endpoint may omit `devices`; the single-profile
/// endpoint carries the full ordered membership.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiProfile {
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub devices: Vec<DeviceLink>,
}

/// Device reference inside a profile's membership list. Also the shape
/// written back by `PUT /networks/{id}/profiles/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceLink {
    pub url: String,
}

// ── Eero (mesh node) ─────────────────────────────────────────────────

/// Mesh node from `GET /networks/{id}/eeros`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEero {
    pub url: String,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub gateway: bool,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub os_version: Option<String>,
    #[serde(default)]
    pub wired: bool,
    /// Mesh signal quality, 0-5.
    #[serde(default)]
    pub mesh_quality_bars: Option<u8>,
    #[serde(default)]
    pub connected_clients_count: Option<u32>,
    #[serde(default)]
    pub heartbeat_ok: bool,
    /// e.g. `"ONLINE"`
    #[serde(default)]
    pub state: Option<String>,
}

// ── Guest network ────────────────────────────────────────────────────

/// `data` of `GET /networks/{id}/guestnetwork`.
#[derive(Clone, Deserialize, Serialize)]
pub struct ApiGuestNetwork {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for ApiGuestNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiGuestNetwork")
            .field("enabled", &self.enabled)
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ── Reservation ──────────────────────────────────────────────────────

/// DHCP reservation from `GET /networks/{id}/reservations`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiReservation {
    pub url: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn premium_status_accepts_both_shapes() {
        let flag: PremiumStatus = serde_json::from_str("true").unwrap();
        let label: PremiumStatus = serde_json::from_str("\"Active\"").unwrap();
        let inactive: PremiumStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert!(flag.is_active());
        assert!(label.is_active());
        assert!(!inactive.is_active());
    }

    #[test]
    fn device_tolerates_missing_and_null_fields() {
        let json = r#"{"url":"/2.2/networks/1/devices/abc","nickname":null,"profile":null}"#;
        let device: ApiDevice = serde_json::from_str(json).unwrap();
        assert!(device.nickname.is_none());
        assert!(device.profile.is_none());
        assert!(!device.connected);
    }

    #[test]
    fn guest_network_debug_hides_password() {
        let guest = ApiGuestNetwork {
            enabled: true,
            name: Some("Guests".into()),
            password: Some("hunter2".into()),
        };
        let rendered = format!("{guest:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
