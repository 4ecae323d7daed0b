// Login handshake
//
// SmartZone hands out a `JSESSIONID` cookie on a successful credential
// POST to `/session`. We pull the id out of the response and carry it
// as an explicit `Cookie` header on every later request.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::{SmartZoneClient, body_preview};
use crate::error::Error;
use crate::session::{Credentials, SESSION_COOKIE, Session};

impl SmartZoneClient {
    /// Authenticate and return a reusable [`Session`].
    ///
    /// Performs an unauthenticated `GET /session` first to establish
    /// connection state, then `POST /session` with the credentials. A
    /// non-2xx login or a response without the session cookie is an
    /// [`Error::Authentication`]. Nothing is retried.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session, Error> {
        let url = self.api_url("session")?;

        debug!("session handshake at {}", url);

        // The handshake status is irrelevant; only reachability matters.
        self.http()
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Authentication {
                message: format!("session endpoint unreachable: {e}"),
            })?;

        let body = json!({
            "username": credentials.username,
            "password": credentials.password.expose_secret(),
        });

        debug!(username = %credentials.username, "logging in");

        let resp = self
            .http()
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Authentication {
                message: format!("login request failed: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {}", body_preview(&body)),
            });
        }

        let session_id = resp
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.value().to_owned())
            .ok_or_else(|| Error::Authentication {
                message: format!("login response carried no {SESSION_COOKIE} cookie"),
            })?;

        debug!("login successful");
        Ok(Session::new(
            self.api_root().clone(),
            SecretString::from(session_id),
        ))
    }
}
