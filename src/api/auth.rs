// Session lifecycle
//
// Cookie-based session against `/webapi/auth.cgi`. A successful login
// yields an opaque `sid` presented on all subsequent calls as
// `Cookie: id=<sid>`.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::api::client::{AUTH_PATH, SrmClient};
use crate::error::Error;

#[derive(Deserialize)]
struct LoginData {
    #[serde(default)]
    sid: Option<String>,
}

impl SrmClient {
    /// Authenticate with user credentials and store the session identifier.
    ///
    /// Fails with [`Error::MissingCredentials`] before any request when
    /// either argument is empty, and with [`Error::MissingSessionId`] when
    /// the router answers success without a `sid`. On success the sid is
    /// stored on the client and returned, so it can be persisted and passed
    /// to [`with_session`](Self::with_session) later.
    pub async fn authenticate(
        &self,
        account: &str,
        password: &SecretString,
    ) -> Result<String, Error> {
        if account.is_empty() || password.expose_secret().is_empty() {
            return Err(Error::MissingCredentials);
        }

        let params = [
            ("account", account.to_owned()),
            ("passwd", password.expose_secret().to_owned()),
            ("method", "Login".to_owned()),
            ("version", "2".to_owned()),
            ("api", "SYNO.API.Auth".to_owned()),
        ];
        let data: LoginData = self.fetch(AUTH_PATH, &params).await?;

        let sid = data.sid.ok_or(Error::MissingSessionId)?;
        self.set_session(sid.clone());
        debug!("session established");
        Ok(sid)
    }

    /// End the current session.
    ///
    /// The stored session identifier is cleared whatever the router
    /// answers (best-effort); a request failure is still propagated.
    pub async fn logout(&self) -> Result<(), Error> {
        let params = [
            ("method", "Logout".to_owned()),
            ("version", "2".to_owned()),
            ("api", "SYNO.API.Auth".to_owned()),
        ];
        let result = self.request(AUTH_PATH, &params).await;
        self.clear_session();
        debug!("session cleared");
        result.map(|_| ())
    }
}
