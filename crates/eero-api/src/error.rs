use thiserror::Error;

/// Top-level error type for the `eero-api` crate.
///
/// Covers every failure mode of a single request: the HTTP transport,
/// non-2xx responses from the vendor, and payloads that do not match the
/// expected shape. `eero-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be built (TLS backend, bad header value).
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    // ── Remote ──────────────────────────────────────────────────────
    /// Non-2xx response. `message` is the vendor's `meta.error` verbatim
    /// when the body carries one, otherwise a status/body description.
    #[error("{message}")]
    Remote { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the vendor rejected the session credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Remote { status: 401, .. })
    }

    /// Returns `true` if the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status of a remote error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
