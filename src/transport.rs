// Transport configuration for building the underlying reqwest::Client.
//
// SRM routers usually serve self-signed certificates, so TLS verification
// is off by default; callers opt in with `verify_tls`.

use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::error::Error;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Transport configuration for the SRM HTTP client.
///
/// Scheme selection (http vs https) happens inside the one client built
/// here, from the parsed base URL.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. When it elapses the in-flight request is aborted.
    pub timeout: Duration,
    /// Verify the router's TLS certificate chain.
    pub verify_tls: bool,
    /// Extra headers attached to every request.
    pub headers: HeaderMap,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            verify_tls: false,
            headers: HeaderMap::new(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("srm-client/", env!("CARGO_PKG_VERSION")))
            .default_headers(self.headers.clone())
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()
            .map_err(Error::Transport)
    }
}
