// ── Core error types ──
//
// User-facing errors from eero-core. Consumers never match on reqwest or
// serde failures directly; the `From<eero_api::Error>` impl translates
// transport-layer errors into domain variants.

use serde::Serialize;
use strum::Display;
use thiserror::Error;

/// The resource kinds an identifier can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Device,
    Profile,
    Eero,
    Reservation,
    Network,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Session errors ───────────────────────────────────────────────
    #[error("not logged in")]
    NotLoggedIn,

    #[error("token is invalid or expired")]
    TokenInvalid,

    #[error("no networks found on this account")]
    NoNetworks,

    // ── Connection errors ────────────────────────────────────────────
    #[error("cannot reach {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("request timed out")]
    Timeout,

    // ── Remote errors ────────────────────────────────────────────────
    /// Non-2xx response. Display is the vendor message unchanged.
    #[error("{message}")]
    Remote { message: String, status: Option<u16> },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{kind} not found: {query}")]
    NotFound { kind: ResourceKind, query: String },

    #[error("{message}")]
    ValidationFailed { message: String },

    #[error("{message}")]
    Conflict { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    pub(crate) fn not_found(kind: ResourceKind, query: &str) -> Self {
        Self::NotFound {
            kind,
            query: query.to_owned(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<eero_api::Error> for CoreError {
    fn from(err: eero_api::Error) -> Self {
        match err {
            eero_api::Error::Transport(ref e) if e.is_timeout() => CoreError::Timeout,
            eero_api::Error::Transport(e) => CoreError::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string),
                reason: e.to_string(),
            },
            eero_api::Error::Remote { status, message } => CoreError::Remote {
                message,
                status: Some(status),
            },
            eero_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid API URL: {e}"),
            },
            eero_api::Error::Client(message) => CoreError::Internal(message),
            eero_api::Error::Deserialization { message, .. } => {
                CoreError::Internal(format!("unexpected response shape: {message}"))
            }
        }
    }
}
