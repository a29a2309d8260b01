//! Domain layer between `eero-api` and the CLI.
//!
//! - **[`Session`]**: facade over the API client and a [`ConfigStore`].
//!   Checks authentication, picks the active network once, and runs the
//!   resolve-then-mutate flows behind every CLI verb.
//!
//! - **Resolver** ([`resolve()`]): maps a human query (partial ID, MAC,
//!   serial, name, location, IP) to exactly one resource using a fixed
//!   order of match strategies.
//!
//! - **Filter engine** ([`DeviceFilter`]): conjunctive device predicates
//!   with a summary of what was applied.
//!
//! - **Monitor** ([`Monitor`]): snapshot diffing over repeated device polls,
//!   stopped by a `CancellationToken`.
//!
//! - **Domain model** ([`model`]): immutable resource snapshots keyed by
//!   [`ResourceId`], the trailing segment of the vendor's resource URL.

pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod membership;
pub mod model;
pub mod monitor;
pub mod resolve;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ConfigStore, MemoryConfigStore, SessionConfig, StoredConfig};
pub use error::{CoreError, ResourceKind};
pub use filter::{DeviceFilter, FilterOutcome, ResolvedFilter};
pub use monitor::{ChangeKind, DeviceChange, DeviceSnapshot, Monitor, MonitorEvent};
pub use resolve::{Resolvable, resolve};
pub use session::{AuthStatus, Session};

pub use model::{
    Account, Device, DeviceStatus, GuestNetwork, MacAddress, MeshNode, Network, Profile,
    ProfileRef, Reservation, ResourceId,
};
