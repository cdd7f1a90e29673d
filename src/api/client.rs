// SRM HTTP client
//
// Wraps `reqwest::Client` with the vendor request/response mechanics: form
// encoded POST bodies, session cookie injection, HTTP status gating, and
// `{ success, data?, error? }` envelope interpretation. Endpoint modules
// (devices, wifi, ...) are implemented as inherent methods in separate
// files to keep this module focused on transport mechanics.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::labels;
use crate::api::models::Envelope;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Path of the session endpoint (login/logout).
pub const AUTH_PATH: &str = "/webapi/auth.cgi";
/// Path of the general entry endpoint (everything else).
pub const ENTRY_PATH: &str = "/webapi/entry.cgi";

/// Async client for the SRM management API.
///
/// Immutable after construction except for the session identifier, which is
/// set by [`authenticate`](Self::authenticate) and cleared by
/// [`logout`](Self::logout). All methods take `&self` and may be called
/// concurrently; the session cell is the only shared mutable state and
/// concurrent authenticate/logout calls race last-write-wins.
pub struct SrmClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    /// Session identifier, sent as `Cookie: id=<sid>` when set.
    session: RwLock<Option<String>>,
}

impl SrmClient {
    /// Create a client for the router at `base_url`
    /// (e.g. `https://10.0.0.1:8001`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url,
            timeout: transport.timeout,
            session: RwLock::new(None),
        })
    }

    /// Create a client resuming a previously issued session identifier.
    pub fn with_session(
        base_url: Url,
        session: String,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let client = Self::new(base_url, transport)?;
        client.set_session(session);
        Ok(client)
    }

    /// The router base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The current session identifier, if any.
    pub fn session(&self) -> Option<String> {
        self.session.read().expect("session lock poisoned").clone()
    }

    /// Replace the stored session identifier.
    pub fn set_session(&self, sid: String) {
        *self.session.write().expect("session lock poisoned") = Some(sid);
    }

    /// Drop the stored session identifier.
    pub fn clear_session(&self) {
        *self.session.write().expect("session lock poisoned") = None;
    }

    // ── Request core ─────────────────────────────────────────────────

    /// Low-level call: POST `params` form-encoded to `path` and unwrap the
    /// vendor envelope.
    ///
    /// Returns the envelope's `data` payload (object, array, or scalar per
    /// endpoint), or `None` for operations that succeed without one.
    /// Non-scalar parameter values must be pre-serialized to JSON strings
    /// by the caller, per vendor convention.
    pub async fn request(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Option<Value>, Error> {
        let url = self.base_url.join(path)?;
        debug!("POST {}", url);

        let mut builder = self.http.post(url).form(params);
        if let Some(sid) = self.session() {
            builder = builder.header(header::COOKIE, format!("id={sid}"));
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout { timeout: self.timeout }
            } else {
                Error::Transport(e)
            }
        })?;

        // Status is checked before any JSON parsing is attempted.
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!(
                    "{e} (body preview: {:?})",
                    body.chars().take(200).collect::<String>()
                ),
            })?;

        match envelope.success {
            None => Err(Error::InvalidResponse),
            Some(false) => Err(api_error(envelope.error)),
            Some(true) => Ok(envelope.data),
        }
    }

    /// Call a payload-bearing endpoint and deserialize `data` into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let data = self.request(path, params).await?.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| Error::Deserialization {
            message: e.to_string(),
        })
    }

    /// Call an endpoint for effect, discarding any payload.
    pub(crate) async fn submit(&self, path: &str, params: &[(&str, String)]) -> Result<(), Error> {
        self.request(path, params).await.map(|_| ())
    }
}

/// Map a `success: false` envelope onto [`Error::Api`].
///
/// Known codes resolve through the fixed label table. Unknown codes embed
/// the raw code and the serialized error object; a missing `error` or
/// `error.code` yields the no-code message.
fn api_error(error: Option<Value>) -> Error {
    let code = error
        .as_ref()
        .and_then(|e| e.get("code"))
        .and_then(Value::as_i64);

    let Some(code) = code else {
        return Error::Api {
            code: None,
            message: "Unknown error (no code)".to_owned(),
        };
    };

    let message = match labels::error_label(code) {
        Some(label) => label.to_owned(),
        None => {
            let payload = error.unwrap_or(Value::Null);
            format!("Unknown error ({code}) {payload}")
        }
    };
    Error::Api { code: Some(code), message }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::api_error;
    use crate::error::Error;

    #[test]
    fn known_code_uses_table_label() {
        let err = api_error(Some(json!({ "code": 400 })));
        match err {
            Error::Api { code, message } => {
                assert_eq!(code, Some(400));
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn unknown_code_embeds_payload() {
        let err = api_error(Some(json!({ "code": 12345 })));
        match err {
            Error::Api { code, message } => {
                assert_eq!(code, Some(12345));
                assert_eq!(message, r#"Unknown error (12345) {"code":12345}"#);
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn missing_code_yields_no_code_message() {
        for error in [None, Some(json!({})), Some(json!({ "code": "nan" }))] {
            match api_error(error) {
                Error::Api { code: None, message } => {
                    assert_eq!(message, "Unknown error (no code)");
                }
                other => panic!("expected no-code Api error, got: {other:?}"),
            }
        }
    }
}
