// ── API-to-domain type conversions ──
//
// Bridges raw `eero_api` response types into `eero_core::model` types.
// Canonical IDs are derived from vendor URLs here and nowhere else.

use eero_api::{
    ApiAccount, ApiDevice, ApiEero, ApiGuestNetwork, ApiNetwork, ApiProfile, ApiReservation,
};

use crate::model::{
    Account, Device, GuestNetwork, MacAddress, MeshNode, Network, Profile, ProfileRef,
    Reservation, ResourceId,
};

impl From<ApiDevice> for Device {
    fn from(d: ApiDevice) -> Self {
        Self {
            id: ResourceId::from_url(&d.url),
            mac: d.mac.filter(|m| !m.is_empty()).map(MacAddress::new),
            profile: d.profile.map(|p| ProfileRef {
                id: ResourceId::from_url(&p.url),
                name: p.name,
            }),
            url: d.url,
            hostname: d.hostname,
            nickname: d.nickname,
            ip: d.ip,
            connected: d.connected,
            wireless: d.wireless,
            paused: d.paused,
            blocked: d.blocked,
            is_private: d.is_private,
            is_guest: d.is_guest,
            connection_type: d.connection_type,
            device_type: d.device_type,
        }
    }
}

impl From<ApiProfile> for Profile {
    fn from(p: ApiProfile) -> Self {
        Self {
            id: ResourceId::from_url(&p.url),
            url: p.url,
            name: p.name,
            paused: p.paused,
            device_urls: p.devices.into_iter().map(|d| d.url).collect(),
        }
    }
}

impl From<ApiEero> for MeshNode {
    fn from(e: ApiEero) -> Self {
        Self {
            id: ResourceId::from_url(&e.url),
            url: e.url,
            serial: e.serial,
            location: e.location,
            gateway: e.gateway,
            ip: e.ip_address,
            model: e.model,
            os_version: e.os_version,
            wired: e.wired,
            mesh_quality_bars: e.mesh_quality_bars.unwrap_or_default(),
            connected_clients: e.connected_clients_count.unwrap_or_default(),
            heartbeat_ok: e.heartbeat_ok,
            state: e.state,
        }
    }
}

impl From<ApiNetwork> for Network {
    fn from(n: ApiNetwork) -> Self {
        Self {
            id: ResourceId::from_url(&n.url),
            url: n.url,
            name: n.name.unwrap_or_default(),
            premium: n.premium_status.is_some_and(|s| s.is_active()),
        }
    }
}

impl From<ApiAccount> for Account {
    fn from(a: ApiAccount) -> Self {
        Self {
            name: a.name.filter(|n| !n.is_empty()),
            email: a.email.and_then(|c| c.value).filter(|v| !v.is_empty()),
            phone: a.phone.and_then(|c| c.value).filter(|v| !v.is_empty()),
            networks: a.networks.data.into_iter().map(Network::from).collect(),
        }
    }
}

impl From<ApiGuestNetwork> for GuestNetwork {
    fn from(g: ApiGuestNetwork) -> Self {
        Self {
            enabled: g.enabled,
            name: g.name,
            password: g.password,
        }
    }
}

impl From<ApiReservation> for Reservation {
    fn from(r: ApiReservation) -> Self {
        Self {
            id: ResourceId::from_url(&r.url),
            url: r.url,
            ip: r.ip,
            mac: MacAddress::new(&r.mac),
            description: r.description,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn device_ids_come_from_urls() {
        let raw: ApiDevice = serde_json::from_value(serde_json::json!({
            "url": "/2.2/networks/1/devices/aabbccdd1122",
            "mac": "AA:BB:CC:DD:11:22",
            "profile": { "url": "/2.2/networks/1/profiles/123", "name": "Kids" }
        }))
        .unwrap();
        let device = Device::from(raw);
        assert_eq!(device.id.as_str(), "aabbccdd1122");
        assert_eq!(device.mac.unwrap().as_str(), "aa:bb:cc:dd:11:22");
        assert_eq!(device.profile.unwrap().id.as_str(), "123");
    }

    #[test]
    fn account_flattens_contacts_and_networks() {
        let raw: ApiAccount = serde_json::from_value(serde_json::json!({
            "name": "",
            "email": { "value": "jane@example.com" },
            "networks": { "count": 1, "data": [
                { "url": "/2.2/networks/42", "name": "Home", "premium_status": "active" }
            ]}
        }))
        .unwrap();
        let account = Account::from(raw);
        assert!(account.name.is_none());
        assert_eq!(account.email.as_deref(), Some("jane@example.com"));
        assert_eq!(account.networks[0].id.as_str(), "42");
        assert!(account.networks[0].premium);
    }
}
