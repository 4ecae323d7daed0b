// Session state carried through one scrape: credentials in, the
// `JSESSIONID` cookie out, and the header set built from it.

use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::Error;

/// Name of the cookie the controller uses to carry the session id.
pub const SESSION_COOKIE: &str = "JSESSIONID";

const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Username/password pair for the controller's session endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// An authenticated context for one collection cycle.
///
/// Holds the API base URL and the opaque session id extracted from the
/// login response. Never persisted; dropped at the end of the scrape.
/// There is no logout -- the controller expires idle sessions on its own.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: Url,
    session_id: SecretString,
}

impl Session {
    pub fn new(base_url: Url, session_id: SecretString) -> Self {
        Self {
            base_url,
            session_id,
        }
    }

    /// The versioned API root, e.g. `https://sz:8443/wsg/api/public/v12_0/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Header set applied to every resource request.
    pub fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let cookie = format!("{SESSION_COOKIE}={}", self.session_id.expose_secret());
        let mut value = HeaderValue::from_str(&cookie).map_err(|_| Error::Authentication {
            message: "session id contains invalid header characters".into(),
        })?;
        value.set_sensitive(true);
        headers.insert(COOKIE, value);

        Ok(headers)
    }
}
