// ── DHCP reservation types ──

use serde::Serialize;

use super::resource_id::{MacAddress, ResourceId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub id: ResourceId,
    pub url: String,
    pub ip: String,
    pub mac: MacAddress,
    pub description: Option<String>,
}
