// eero-api: Async Rust client for the eero mesh WiFi cloud API
//
// The vendor API is unofficial: every response is wrapped in a
// `{ meta, data }` envelope and sessions ride on an `s` cookie obtained
// through a two-step login/verify handshake.

pub mod auth;
pub mod client;
pub mod devices;
pub mod eeros;
pub mod error;
pub mod guest;
pub mod models;
pub mod network;
pub mod profiles;
pub mod reservations;
pub mod transport;

pub use client::EeroClient;
pub use error::Error;
pub use models::{
    ApiAccount, ApiDevice, ApiEero, ApiGuestNetwork, ApiNetwork, ApiProfile, ApiReservation,
    ContactValue, DeviceLink, Envelope, LoginResponse, Meta, NetworkList, PremiumStatus,
    ProfileLink,
};
pub use transport::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, TransportConfig};
