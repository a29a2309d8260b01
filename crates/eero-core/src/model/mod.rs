// ── Domain model ──
//
// Immutable snapshots of vendor resources, built from the raw API types in
// `convert`. Every resource carries its canonical `ResourceId`.

pub mod device;
pub mod eero;
pub mod network;
pub mod profile;
pub mod reservation;
pub mod resource_id;

pub use device::{Device, DeviceStatus, ProfileRef};
pub use eero::MeshNode;
pub use network::{Account, GuestNetwork, Network};
pub use profile::Profile;
pub use reservation::Reservation;
pub use resource_id::{MacAddress, ResourceId};
