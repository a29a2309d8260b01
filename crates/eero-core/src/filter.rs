// ── Device filter predicates ──
//
// Independent boolean predicates over a device listing, combined with AND.
// The profile predicate needs the profile listing to turn a name into an
// ID, so a `DeviceFilter` is resolved once into a `ResolvedFilter` before
// it is applied (the monitor loop reuses the resolved form every tick).

use serde::Serialize;

use crate::model::{Device, Profile, ResourceId};

/// User-selected device predicates. All set predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    /// Profile name or ID.
    pub profile: Option<String>,
    pub no_profile: bool,
    pub wired: bool,
    pub wireless: bool,
    pub online: bool,
    pub offline: bool,
    pub guest: bool,
    pub no_guest: bool,
    pub paused: bool,
    pub private: bool,
}

impl DeviceFilter {
    /// Whether a profile listing is needed to resolve this filter.
    pub fn needs_profiles(&self) -> bool {
        self.profile.is_some()
    }

    /// Bind the profile predicate against `profiles`, matching an ID or an
    /// exact name (case-insensitive). When nothing matches, the raw string
    /// is kept and compared against each device's own profile name and ID,
    /// so a typo filters everything out instead of failing.
    pub fn resolve(&self, profiles: &[Profile]) -> ResolvedFilter {
        let profile = self.profile.as_ref().map(|query| {
            let resolved = profiles
                .iter()
                .find(|p| {
                    p.id.as_str().eq_ignore_ascii_case(query) || p.name.to_lowercase() == query.to_lowercase()
                })
                .map(|p| (p.id.clone(), p.name.clone()));
            ProfileMatch {
                query: query.clone(),
                resolved,
            }
        });
        ResolvedFilter {
            filter: self.clone(),
            profile,
        }
    }
}

#[derive(Debug, Clone)]
struct ProfileMatch {
    query: String,
    resolved: Option<(ResourceId, String)>,
}

impl ProfileMatch {
    fn matches(&self, device: &Device) -> bool {
        let Some(link) = device.profile.as_ref() else {
            return false;
        };
        let name = link.name.as_deref().unwrap_or_default().to_lowercase();
        match &self.resolved {
            Some((id, resolved_name)) => link.id == *id || name == resolved_name.to_lowercase(),
            None => {
                name == self.query.to_lowercase()
                    || link.id.as_str().eq_ignore_ascii_case(&self.query)
            }
        }
    }
}

/// A filter whose profile predicate has been bound to a profile listing.
#[derive(Debug, Clone)]
pub struct ResolvedFilter {
    filter: DeviceFilter,
    profile: Option<ProfileMatch>,
}

/// Result of applying a filter to a listing.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome {
    pub devices: Vec<Device>,
    /// Size of the listing before filtering.
    pub total: usize,
    /// Human summary of the active predicates, `None` when unfiltered.
    pub description: Option<String>,
}

impl FilterOutcome {
    pub fn count(&self) -> usize {
        self.devices.len()
    }
}

impl ResolvedFilter {
    pub fn matches(&self, device: &Device) -> bool {
        let f = &self.filter;
        if let Some(profile) = &self.profile {
            if !profile.matches(device) {
                return false;
            }
        }
        !(f.no_profile && device.profile.is_some()
            || f.wired && device.wireless
            || f.wireless && !device.wireless
            || f.online && !device.connected
            || f.offline && device.connected
            || f.guest && !device.is_guest
            || f.no_guest && device.is_guest
            || f.paused && !device.paused
            || f.private && !device.is_private)
    }

    /// Keep matching devices, preserving listing order.
    pub fn apply(&self, devices: Vec<Device>) -> FilterOutcome {
        let total = devices.len();
        let devices = devices.into_iter().filter(|d| self.matches(d)).collect();
        FilterOutcome {
            devices,
            total,
            description: self.description(),
        }
    }

    /// e.g. `profile: Kids [123], wireless, online`.
    pub fn description(&self) -> Option<String> {
        let f = &self.filter;
        let mut parts = Vec::new();
        if let Some(profile) = &self.profile {
            parts.push(match &profile.resolved {
                Some((id, name)) => format!("profile: {name} [{id}]"),
                None => format!("profile: {}", profile.query),
            });
        }
        let flags = [
            (f.wired, "wired"),
            (f.wireless, "wireless"),
            (f.online, "online"),
            (f.offline, "offline"),
            (f.guest, "guest"),
            (f.no_guest, "no guest"),
            (f.no_profile, "no profile"),
            (f.paused, "paused"),
            (f.private, "private"),
        ];
        parts.extend(flags.iter().filter(|(on, _)| *on).map(|(_, label)| (*label).to_owned()));

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{MacAddress, ProfileRef};

    fn device(id: &str, connected: bool, wireless: bool) -> Device {
        Device {
            id: ResourceId::from(id),
            url: format!("/2.2/networks/1/devices/{id}"),
            mac: Some(MacAddress::new("00:00:00:00:00:01")),
            hostname: Some(id.to_owned()),
            nickname: None,
            ip: None,
            connected,
            wireless,
            paused: false,
            blocked: false,
            is_private: false,
            is_guest: false,
            profile: None,
            connection_type: None,
            device_type: None,
        }
    }

    fn with_profile(mut d: Device, id: &str, name: &str) -> Device {
        d.profile = Some(ProfileRef {
            id: ResourceId::from(id),
            name: Some(name.into()),
        });
        d
    }

    fn kids() -> Vec<Profile> {
        vec![Profile {
            id: ResourceId::from("123"),
            url: "/2.2/networks/1/profiles/123".into(),
            name: "Kids".into(),
            paused: false,
            device_urls: Vec::new(),
        }]
    }

    fn ids(outcome: &FilterOutcome) -> Vec<&str> {
        outcome.devices.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn predicates_are_conjunctive() {
        let devices = vec![
            device("a", true, true),
            device("b", true, false),
            device("c", false, true),
        ];
        let online_wireless = DeviceFilter {
            online: true,
            wireless: true,
            ..DeviceFilter::default()
        }
        .resolve(&[]);
        let online_wired = DeviceFilter {
            online: true,
            wired: true,
            ..DeviceFilter::default()
        }
        .resolve(&[]);

        assert_eq!(ids(&online_wireless.apply(devices.clone())), vec!["a"]);
        assert_eq!(ids(&online_wired.apply(devices)), vec!["b"]);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let outcome = DeviceFilter::default()
            .resolve(&[])
            .apply(vec![device("a", true, true), device("b", false, false)]);
        assert_eq!(outcome.count(), 2);
        assert_eq!(outcome.total, 2);
        assert!(outcome.description.is_none());
    }

    #[test]
    fn profile_filter_by_name_describes_resolution() {
        let devices = vec![
            with_profile(device("a", true, true), "123", "Kids"),
            device("b", true, true),
        ];
        let filter = DeviceFilter {
            profile: Some("kids".into()),
            wireless: true,
            online: true,
            ..DeviceFilter::default()
        }
        .resolve(&kids());

        let outcome = filter.apply(devices);
        assert_eq!(ids(&outcome), vec!["a"]);
        assert_eq!(outcome.total, 2);
        assert_eq!(
            outcome.description.as_deref(),
            Some("profile: Kids [123], wireless, online")
        );
    }

    #[test]
    fn profile_filter_by_id() {
        let devices = vec![with_profile(device("a", true, true), "123", "Kids")];
        let filter = DeviceFilter {
            profile: Some("123".into()),
            ..DeviceFilter::default()
        }
        .resolve(&kids());
        assert_eq!(filter.apply(devices).count(), 1);
    }

    #[test]
    fn unresolved_profile_falls_back_to_raw_comparison() {
        // Not in the profile listing, but the device carries the name.
        let devices = vec![
            with_profile(device("a", true, true), "999", "Teens"),
            with_profile(device("b", true, true), "123", "Kids"),
        ];
        let filter = DeviceFilter {
            profile: Some("teens".into()),
            ..DeviceFilter::default()
        }
        .resolve(&kids());
        let outcome = filter.apply(devices);
        assert_eq!(ids(&outcome), vec!["a"]);
        assert_eq!(outcome.description.as_deref(), Some("profile: teens"));
    }

    #[test]
    fn typo_in_profile_yields_empty_result() {
        let devices = vec![with_profile(device("a", true, true), "123", "Kids")];
        let filter = DeviceFilter {
            profile: Some("Kdis".into()),
            ..DeviceFilter::default()
        }
        .resolve(&kids());
        assert_eq!(filter.apply(devices).count(), 0);
    }

    #[test]
    fn guest_paused_and_private_flags() {
        let mut guest = device("g", true, true);
        guest.is_guest = true;
        let mut paused = device("p", true, true);
        paused.paused = true;
        paused.is_private = true;
        let devices = vec![guest, paused, device("n", true, true)];

        let only_guest = DeviceFilter {
            guest: true,
            ..DeviceFilter::default()
        }
        .resolve(&[]);
        let no_guest_private = DeviceFilter {
            no_guest: true,
            private: true,
            ..DeviceFilter::default()
        }
        .resolve(&[]);

        assert_eq!(ids(&only_guest.apply(devices.clone())), vec!["g"]);
        let outcome = no_guest_private.apply(devices);
        assert_eq!(ids(&outcome), vec!["p"]);
        assert_eq!(outcome.description.as_deref(), Some("no guest, private"));
    }

    #[test]
    fn no_profile_excludes_members() {
        let devices = vec![
            with_profile(device("a", true, true), "123", "Kids"),
            device("b", false, false),
        ];
        let filter = DeviceFilter {
            no_profile: true,
            ..DeviceFilter::default()
        }
        .resolve(&[]);
        assert_eq!(ids(&filter.apply(devices)), vec!["b"]);
    }
}
