use std::time::Duration;

use thiserror::Error;

/// Top-level error type for the `srm-client` crate.
///
/// Covers every failure mode in order of occurrence: local validation
/// (raised before any request is sent), transport, HTTP status, protocol
/// (envelope shape), and vendor application errors. Nothing is retried
/// internally; every variant propagates straight to the caller.
#[derive(Debug, Error)]
pub enum Error {
    // ── Local validation ────────────────────────────────────────────
    /// `authenticate` called with an empty account or password.
    #[error("credentials must be provided")]
    MissingCredentials,

    /// A field failed local validation; no request was sent.
    #[error("invalid value for `{field}`")]
    Validation { field: &'static str },

    /// No Wi-Fi profile contains a radio with the requested SSID.
    #[error("SSID {ssid:?} not found in any Wi-Fi profile")]
    UnknownSsid { ssid: String },

    /// Login succeeded but the payload carried no session identifier.
    #[error("no session identifier returned by the router")]
    MissingSessionId,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, reset, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured timeout elapsed and the in-flight request was aborted.
    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    // ── HTTP status ─────────────────────────────────────────────────
    /// Non-2xx status, raised before the body is parsed.
    #[error("HTTP {status} {reason}")]
    Http { status: u16, reason: String },

    // ── Protocol ────────────────────────────────────────────────────
    /// The response body lacks the `success` field of the vendor envelope.
    #[error("invalid response: missing `success` field")]
    InvalidResponse,

    /// The response body could not be parsed or mapped onto a model.
    #[error("malformed response: {message}")]
    Deserialization { message: String },

    /// A request parameter could not be serialized to its JSON-string form.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Vendor ──────────────────────────────────────────────────────
    /// `success: false` envelope, with `error.code` mapped through the
    /// fixed label table when known.
    #[error("SRM API error: {message}")]
    Api { code: Option<i64>, message: String },
}

impl Error {
    /// Returns `true` if this error indicates a credential or session
    /// problem that re-authentication might resolve.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::MissingSessionId | Self::Api { code: Some(105..=107 | 119 | 400..=404), .. }
        )
    }

    /// Returns `true` if this is a transient failure the caller may retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }
}
