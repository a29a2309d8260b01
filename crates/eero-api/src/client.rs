// eero API HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, the session cookie, error
// mapping for non-2xx responses, and a single generic envelope decode step.
// Endpoint groups (devices, profiles, eeros, ...) are implemented as inherent
// methods in separate files to keep this module focused on transport
// mechanics.

use std::sync::{PoisonError, RwLock};

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::COOKIE;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::Envelope;
use crate::transport::TransportConfig;

/// Name of the session cookie the vendor authenticates with.
const SESSION_COOKIE: &str = "s";

/// Longest body excerpt carried in a status/body error message.
const BODY_PREVIEW_CHARS: usize = 200;

/// Error bodies look like `{"meta":{"code":401,"error":"unauthorized"}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    meta: ErrorMeta,
}

#[derive(Deserialize)]
struct ErrorMeta {
    #[serde(default)]
    error: Option<String>,
}

/// Raw HTTP client for the eero cloud API.
///
/// All calls are issued one at a time by the caller; the client itself keeps
/// no state besides the session token, which sits behind a lock so that
/// [`login_verify`](Self::login_verify) can swap it through `&self`.
pub struct EeroClient {
    http: reqwest::Client,
    base_url: Url,
    token: RwLock<Option<SecretString>>,
}

impl EeroClient {
    /// Create a client from a `TransportConfig`, optionally already holding
    /// a session token.
    pub fn new(transport: &TransportConfig, token: Option<SecretString>) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: transport.base_url.clone(),
            token: RwLock::new(token),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            token: RwLock::new(None),
        }
    }

    /// The API root every path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Session token ────────────────────────────────────────────────

    /// Replace the session token used for the `s` cookie.
    pub fn set_token(&self, token: SecretString) {
        debug!("session token updated");
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Drop the session token; later requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether a session token is currently set.
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn apply_session_cookie(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(token) => builder.header(
                COOKIE,
                format!("{SESSION_COOKIE}={}", token.expose_secret()),
            ),
            None => builder,
        }
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path such as `/networks/123/devices`.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Transport ────────────────────────────────────────────────────

    /// Issue one request and return the raw response body.
    ///
    /// Any 2xx status returns the bytes untouched; the envelope is unwrapped
    /// by the caller because some operations carry no data. Non-2xx statuses
    /// become [`Error::Remote`]. No retries.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Bytes, Error> {
        let url = self.endpoint(path)?;
        debug!(%method, path, "sending request");

        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let resp = self
            .apply_session_cookie(builder)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(Error::Transport)?;
        trace!(status = status.as_u16(), len = bytes.len(), "response received");

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(remote_error(status, &bytes))
        }
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a path and decode the envelope's `data` as `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let bytes = self.send(Method::GET, path, None).await?;
        decode(&bytes)
    }

    /// POST a JSON body and decode the envelope's `data` as `T`.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, Error> {
        let bytes = self.send(Method::POST, path, Some(body)).await?;
        decode(&bytes)
    }

    /// Issue a request whose response payload is irrelevant.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(), Error> {
        self.send(method, path, body).await?;
        Ok(())
    }
}

/// Unwrap the `{ meta, data }` envelope and deserialize `data` as `T`.
///
/// Every typed endpoint goes through here; nothing else in the crate parses
/// the envelope.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    let envelope: Envelope<T> =
        serde_json::from_slice(bytes).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: String::from_utf8_lossy(bytes).into_owned(),
        })?;
    trace!(code = ?envelope.meta.code, "envelope decoded");
    Ok(envelope.data)
}

/// Map a non-2xx response to [`Error::Remote`], preferring the vendor's own
/// message. A body that is not JSON still yields an error, never a panic.
fn remote_error(status: reqwest::StatusCode, body: &[u8]) -> Error {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        if let Some(message) = envelope.meta.error.filter(|m| !m.is_empty()) {
            return Error::Remote {
                status: status.as_u16(),
                message,
            };
        }
    }

    let text = String::from_utf8_lossy(body);
    let preview: String = text.chars().take(BODY_PREVIEW_CHARS).collect();
    Error::Remote {
        status: status.as_u16(),
        message: format!("HTTP {status}: {preview}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_prefers_vendor_message() {
        let body = br#"{"meta":{"code":401,"error":"unauthorized"}}"#;
        let err = remote_error(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.to_string(), "unauthorized");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn remote_error_falls_back_to_status_and_body() {
        let err = remote_error(reqwest::StatusCode::BAD_GATEWAY, b"not json");
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: not json");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn remote_error_ignores_empty_vendor_message() {
        let body = br#"{"meta":{"code":500,"error":""}}"#;
        let err = remote_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(err.to_string().starts_with("HTTP 500"));
    }

    #[test]
    fn remote_error_truncates_on_char_boundaries() {
        let body = "é".repeat(500);
        let err = remote_error(reqwest::StatusCode::BAD_GATEWAY, body.as_bytes());
        let msg = err.to_string();
        assert!(msg.ends_with(&"é".repeat(BODY_PREVIEW_CHARS)));
    }

    #[test]
    fn decode_unwraps_data() {
        let body = br#"{"meta":{"code":200},"data":{"user_token":"tok"}}"#;
        let value: serde_json::Value = decode(body).unwrap();
        assert_eq!(value["user_token"], "tok");
    }

    #[test]
    fn decode_reports_shape_mismatch() {
        let result: Result<Vec<String>, Error> = decode(br#"{"meta":{},"data":{"a":1}}"#);
        assert!(matches!(result, Err(Error::Deserialization { .. })));
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = EeroClient::with_client(
            reqwest::Client::new(),
            Url::parse("http://localhost:1234/2.2/").unwrap(),
        );
        let url = client.endpoint("/networks/1/devices").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/2.2/networks/1/devices");
    }
}
