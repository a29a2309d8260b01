// ── Mesh node domain types ──

use serde::Serialize;

use super::resource_id::ResourceId;

/// One eero node in the mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshNode {
    pub id: ResourceId,
    pub url: String,
    pub serial: Option<String>,
    pub location: Option<String>,
    pub gateway: bool,
    pub ip: Option<String>,
    pub model: Option<String>,
    pub os_version: Option<String>,
    pub wired: bool,
    /// Signal quality, 0-5.
    pub mesh_quality_bars: u8,
    pub connected_clients: u32,
    pub heartbeat_ok: bool,
    pub state: Option<String>,
}

impl MeshNode {
    pub fn medium(&self) -> &'static str {
        if self.wired { "wired" } else { "wireless" }
    }

    /// Signal as a fraction of five bars, e.g. `4/5`.
    pub fn signal(&self) -> String {
        format!("{}/5", self.mesh_quality_bars)
    }
}
