//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use eero_config::ConfigError;
use eero_core::{CoreError, ResourceKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────

    #[error("Not logged in")]
    #[diagnostic(code(eero::not_logged_in), help("Run: eero-cli login"))]
    NotLoggedIn,

    #[error("Saved session token is invalid or expired")]
    #[diagnostic(code(eero::token_invalid), help("Log in again with: eero-cli login"))]
    TokenInvalid,

    #[error("No networks found on this account")]
    #[diagnostic(
        code(eero::no_networks),
        help("Set up a network in the eero app, then run: eero-cli login")
    )]
    NoNetworks,

    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to {url}")]
    #[diagnostic(
        code(eero::connection_failed),
        help("Check your internet connection.\nReason: {reason}")
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(eero::timeout),
        help("Increase the timeout with --timeout or try again later.")
    )]
    Timeout,

    // ── Resources ────────────────────────────────────────────────────

    #[error("{kind} not found: {query}")]
    #[diagnostic(
        code(eero::not_found),
        help("Run: eero-cli {list_command} to see what is available")
    )]
    NotFound {
        kind: ResourceKind,
        query: String,
        list_command: &'static str,
    },

    #[error("{message}")]
    #[diagnostic(code(eero::conflict))]
    Conflict { message: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(code(eero::api_error))]
    Api { message: String, status: Option<u16> },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid input: {reason}")]
    #[diagnostic(code(eero::validation))]
    Validation { reason: String },

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(eero::invalid_config))]
    InvalidSetting { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(eero::config),
        help("Check the config file, or pass --config to use another one.")
    )]
    Config { message: String },

    // ── Interactive ──────────────────────────────────────────────────

    #[error("'{action}' requires confirmation")]
    #[diagnostic(
        code(eero::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON output failed: {0}")]
    #[diagnostic(code(eero::json))]
    Json(#[from] serde_json::Error),

    #[error("YAML output failed: {0}")]
    #[diagnostic(code(eero::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(eero::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotLoggedIn | Self::TokenInvalid => exit_code::AUTH,
            Self::Api {
                status: Some(401), ..
            } => exit_code::AUTH,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. }
            | Self::InvalidSetting { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

fn list_command(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Device => "devices list",
        ResourceKind::Profile => "profiles list",
        ResourceKind::Eero => "eeros list",
        ResourceKind::Reservation => "reservations list",
        ResourceKind::Network => "status",
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotLoggedIn => CliError::NotLoggedIn,
            CoreError::TokenInvalid => CliError::TokenInvalid,
            CoreError::NoNetworks => CliError::NoNetworks,
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }
            CoreError::Timeout => CliError::Timeout,
            CoreError::Remote { message, status } => CliError::Api { message, status },
            CoreError::NotFound { kind, query } => CliError::NotFound {
                kind,
                query,
                list_command: list_command(kind),
            },
            CoreError::ValidationFailed { message } => CliError::Validation { reason: message },
            CoreError::Conflict { message } => CliError::Conflict { message },
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => {
                CliError::InvalidSetting { field, reason }
            }
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Io(std::io::Error::other(err))
    }
}
