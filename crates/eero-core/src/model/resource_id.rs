// ── Core identity types ──
//
// ResourceId and MacAddress are the keys every lookup goes through. A
// resource's canonical ID is the trailing segment of the URL the vendor
// returns for it; nothing here invents URLs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── ResourceId ──────────────────────────────────────────────────────

/// Canonical identifier of any eero resource, e.g. `aabbccdd1122` for
/// `/2.2/networks/1/devices/aabbccdd1122`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Take the last non-empty path segment of a resource URL.
    pub fn from_url(url: &str) -> Self {
        let trimmed = url.trim_end_matches('/');
        let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
        Self(last.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ── MacAddress ──────────────────────────────────────────────────────

/// MAC address, normalized to lowercase colon-separated format
/// (aa:bb:cc:dd:ee:ff) when the input is a well-formed 48-bit address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Normalize a MAC from any common format. Input that is not twelve
    /// hex digits is kept lowercased as-is.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        match Self::parse(raw) {
            Some(mac) => mac,
            None => Self(raw.to_lowercase()),
        }
    }

    /// Strictly parse twelve hex digits, optionally separated by `:` or `-`.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = compact(raw);
        if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        if raw.chars().any(|c| !(c.is_ascii_hexdigit() || c == ':' || c == '-')) {
            return None;
        }
        let pairs: Vec<&str> = (0..6).filter_map(|i| digits.get(i * 2..i * 2 + 2)).collect();
        Some(Self(pairs.join(":")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digits only, lowercase. Two MACs are the same device when their
    /// compact forms are equal.
    pub fn compact(&self) -> String {
        compact(&self.0)
    }

    /// Whether `query` names this MAC, ignoring case and separators.
    pub fn matches(&self, query: &str) -> bool {
        let query = compact(query);
        !query.is_empty() && self.compact() == query
    }
}

fn compact(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ':' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_is_trailing_segment() {
        let id = ResourceId::from_url("/2.2/networks/123/devices/aabbccdd1122");
        assert_eq!(id.as_str(), "aabbccdd1122");
    }

    #[test]
    fn resource_id_ignores_trailing_slash() {
        let id = ResourceId::from_url("/2.2/eeros/555/");
        assert_eq!(id.as_str(), "555");
    }

    #[test]
    fn resource_id_of_bare_value() {
        assert_eq!(ResourceId::from_url("777").as_str(), "777");
    }

    #[test]
    fn mac_address_normalizes_dashes_and_case() {
        let mac = MacAddress::new("AA-BB-CC-DD-EE-FF");
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn mac_address_from_bare_hex() {
        let mac: MacAddress = "AABBCCDDEEFF".parse().unwrap();
        assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn mac_address_matches_any_separator() {
        let mac = MacAddress::new("aa:bb:cc:dd:ee:ff");
        assert!(mac.matches("AABBCCDDEEFF"));
        assert!(mac.matches("aa-bb-cc-dd-ee-ff"));
        assert!(!mac.matches("aa:bb:cc"));
        assert!(!mac.matches(""));
    }

    #[test]
    fn mac_address_parse_rejects_malformed() {
        assert!(MacAddress::parse("aa:bb:cc:dd:ee").is_none());
        assert!(MacAddress::parse("zz:bb:cc:dd:ee:ff").is_none());
        assert!(MacAddress::parse("aa.bb.cc.dd.ee.ff").is_none());
        assert!(MacAddress::parse("aa:bb:cc:dd:ee:ff").is_some());
    }
}
