// ── Identifier resolution ──
//
// Turns a free-form query (full or partial ID, MAC, serial, name, location,
// IP) into exactly one resource. Strategies are tried in a fixed order, and
// each strategy scans the whole listing before the next one is considered:
// an exact ID always beats another resource's prefix or name.

use crate::error::{CoreError, ResourceKind};
use crate::model::{Device, MeshNode, Profile, Reservation, ResourceId};

/// A resource kind the resolver can search.
pub trait Resolvable {
    const KIND: ResourceKind;

    fn resource_id(&self) -> &ResourceId;

    /// Kind-specific key checked after the ID strategies.
    fn matches_secondary(&self, query: &str) -> bool;

    /// Last-resort key, checked only when nothing else matched.
    fn matches_tertiary(&self, _query: &str) -> bool {
        false
    }
}

/// Resolve `query` against `items` (in listing order).
///
/// Strategy order: exact ID, ID prefix, secondary key, tertiary key. All
/// comparisons are case-insensitive. Fails with `NotFound` when no strategy
/// matches or the query is blank.
pub fn resolve<'a, T: Resolvable>(items: &'a [T], query: &str) -> Result<&'a T, CoreError> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CoreError::not_found(T::KIND, query));
    }

    let strategies: [&dyn Fn(&T) -> bool; 4] = [
        &|item: &T| item.resource_id().as_str().to_lowercase() == needle,
        &|item: &T| item.resource_id().as_str().to_lowercase().starts_with(&needle),
        &|item: &T| item.matches_secondary(&needle),
        &|item: &T| item.matches_tertiary(&needle),
    ];

    strategies
        .iter()
        .find_map(|matches| items.iter().find(|item| matches(item)))
        .ok_or_else(|| CoreError::not_found(T::KIND, query))
}

// Queries reach the impls below already trimmed and lowercased.

impl Resolvable for Device {
    const KIND: ResourceKind = ResourceKind::Device;

    fn resource_id(&self) -> &ResourceId {
        &self.id
    }

    fn matches_secondary(&self, query: &str) -> bool {
        self.mac.as_ref().is_some_and(|mac| mac.matches(query))
    }

    fn matches_tertiary(&self, query: &str) -> bool {
        let name = self.display_name();
        !name.is_empty() && name.to_lowercase() == query
    }
}

impl Resolvable for MeshNode {
    const KIND: ResourceKind = ResourceKind::Eero;

    fn resource_id(&self) -> &ResourceId {
        &self.id
    }

    fn matches_secondary(&self, query: &str) -> bool {
        self.serial
            .as_deref()
            .is_some_and(|serial| serial.to_lowercase() == query)
    }

    fn matches_tertiary(&self, query: &str) -> bool {
        self.location
            .as_deref()
            .is_some_and(|location| location.to_lowercase().contains(query))
    }
}

impl Resolvable for Profile {
    const KIND: ResourceKind = ResourceKind::Profile;

    fn resource_id(&self) -> &ResourceId {
        &self.id
    }

    fn matches_secondary(&self, query: &str) -> bool {
        self.name.to_lowercase() == query
    }
}

impl Resolvable for Reservation {
    const KIND: ResourceKind = ResourceKind::Reservation;

    fn resource_id(&self) -> &ResourceId {
        &self.id
    }

    fn matches_secondary(&self, query: &str) -> bool {
        self.mac.matches(query)
    }

    fn matches_tertiary(&self, query: &str) -> bool {
        self.ip.eq_ignore_ascii_case(query)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::MacAddress;

    fn device(id: &str, mac: &str, nickname: Option<&str>, hostname: Option<&str>) -> Device {
        Device {
            id: ResourceId::from(id),
            url: format!("/2.2/networks/1/devices/{id}"),
            mac: Some(MacAddress::new(mac)),
            hostname: hostname.map(Into::into),
            nickname: nickname.map(Into::into),
            ip: None,
            connected: true,
            wireless: true,
            paused: false,
            blocked: false,
            is_private: false,
            is_guest: false,
            profile: None,
            connection_type: None,
            device_type: None,
        }
    }

    fn eero(id: &str, serial: &str, location: &str) -> MeshNode {
        MeshNode {
            id: ResourceId::from(id),
            url: format!("/2.2/eeros/{id}"),
            serial: Some(serial.into()),
            location: Some(location.into()),
            gateway: false,
            ip: None,
            model: None,
            os_version: None,
            wired: false,
            mesh_quality_bars: 5,
            connected_clients: 0,
            heartbeat_ok: true,
            state: None,
        }
    }

    fn reservation(id: &str, ip: &str, mac: &str) -> Reservation {
        Reservation {
            id: ResourceId::from(id),
            url: format!("/2.2/networks/1/reservations/{id}"),
            ip: ip.into(),
            mac: MacAddress::new(mac),
            description: None,
        }
    }

    fn profile(id: &str, name: &str) -> Profile {
        Profile {
            id: ResourceId::from(id),
            url: format!("/2.2/networks/1/profiles/{id}"),
            name: name.into(),
            paused: false,
            device_urls: Vec::new(),
        }
    }

    #[test]
    fn resolves_device_by_id_prefix() {
        let devices = vec![
            device("ffeeddccbbaa", "ff:ee:dd:cc:bb:aa", None, Some("tv")),
            device("aabbccdd1122", "aa:bb:cc:dd:11:22", None, Some("laptop")),
        ];
        let found = resolve(&devices, "aabb").unwrap();
        assert_eq!(found.id.as_str(), "aabbccdd1122");
    }

    #[test]
    fn exact_id_beats_earlier_name_match() {
        // The first device is *named* like the second device's ID.
        let devices = vec![
            device("111", "00:00:00:00:00:01", Some("222"), None),
            device("222", "00:00:00:00:00:02", None, Some("printer")),
        ];
        let found = resolve(&devices, "222").unwrap();
        assert_eq!(found.id.as_str(), "222");
    }

    #[test]
    fn exact_id_beats_earlier_prefix_match() {
        let devices = vec![
            device("abc123", "00:00:00:00:00:01", None, None),
            device("abc", "00:00:00:00:00:02", None, None),
        ];
        assert_eq!(resolve(&devices, "ABC").unwrap().id.as_str(), "abc");
    }

    #[test]
    fn resolves_device_by_mac_any_separator() {
        let devices = vec![device("x1", "aa:bb:cc:dd:ee:ff", None, None)];
        for query in ["aa:bb:cc:dd:ee:ff", "AABBCCDDEEFF", "aa-bb-cc-dd-ee-ff"] {
            assert_eq!(resolve(&devices, query).unwrap().id.as_str(), "x1");
        }
    }

    #[test]
    fn resolves_device_by_display_name() {
        let devices = vec![
            device("x1", "00:00:00:00:00:01", Some("Den TV"), Some("roku")),
            device("x2", "00:00:00:00:00:02", None, Some("printer")),
        ];
        assert_eq!(resolve(&devices, "den tv").unwrap().id.as_str(), "x1");
        assert_eq!(resolve(&devices, "PRINTER").unwrap().id.as_str(), "x2");
        // Hostname is shadowed by the nickname.
        assert!(resolve(&devices, "roku").is_err());
    }

    #[test]
    fn names_are_not_fuzzy() {
        let devices = vec![device("x1", "00:00:00:00:00:01", Some("Den TV"), None)];
        let err = resolve(&devices, "Den").unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotFound {
                kind: ResourceKind::Device,
                ..
            }
        ));
    }

    #[test]
    fn resolves_eero_by_serial_then_location() {
        let eeros = vec![
            eero("555", "GGC1UC0000001", "Living Room"),
            eero("666", "GGC1UC0000002", "Kitchen"),
        ];
        assert_eq!(resolve(&eeros, "ggc1uc0000002").unwrap().id.as_str(), "666");
        assert_eq!(resolve(&eeros, "living").unwrap().id.as_str(), "555");
    }

    #[test]
    fn resolves_reservation_by_mac_and_ip() {
        let reservations = vec![
            reservation("777", "192.168.4.50", "aa:bb:cc:dd:ee:ff"),
            reservation("888", "192.168.4.51", "11:22:33:44:55:66"),
        ];
        assert_eq!(
            resolve(&reservations, "112233445566").unwrap().id.as_str(),
            "888"
        );
        assert_eq!(
            resolve(&reservations, "192.168.4.50").unwrap().id.as_str(),
            "777"
        );
    }

    #[test]
    fn resolves_ipv6_reservation_regardless_of_case() {
        let reservations = vec![reservation("999", "FD00::1A2B", "aa:bb:cc:dd:ee:ff")];
        assert_eq!(
            resolve(&reservations, "fd00::1a2b").unwrap().id.as_str(),
            "999"
        );
        assert_eq!(
            resolve(&reservations, "FD00::1A2B").unwrap().id.as_str(),
            "999"
        );
    }

    #[test]
    fn resolves_profile_by_exact_name() {
        let profiles = vec![profile("123", "Kids"), profile("456", "Adults")];
        assert_eq!(resolve(&profiles, "adults").unwrap().id.as_str(), "456");
        assert!(resolve(&profiles, "Adu").is_err());
    }

    #[test]
    fn blank_query_never_matches() {
        let profiles = vec![profile("123", "Kids")];
        assert!(resolve(&profiles, "  ").is_err());
    }

    #[test]
    fn not_found_carries_query() {
        let profiles: Vec<Profile> = Vec::new();
        let err = resolve(&profiles, "Teens").unwrap_err();
        assert_eq!(err.to_string(), "profile not found: Teens");
    }
}
