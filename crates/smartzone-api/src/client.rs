// SmartZone public API HTTP client
//
// Wraps `reqwest::Client` with SmartZone URL construction. The session
// handshake lives in `auth.rs` and the resource reads in
// `resource.rs`, both as inherent methods, so this module stays focused
// on transport mechanics.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// API version segment used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v12_0";

/// Raw HTTP client for the SmartZone public API.
///
/// One instance is built per scrape. The underlying `reqwest::Client`
/// owns a fresh cookie jar used only during the login handshake; all
/// resource reads carry the session cookie explicitly via
/// [`Session::headers`](crate::Session::headers).
#[derive(Debug, Clone)]
pub struct SmartZoneClient {
    http: reqwest::Client,
    api_root: Url,
}

impl SmartZoneClient {
    /// Create a client for `target` (e.g. `https://sz.example.com:8443`).
    ///
    /// Trailing `/` characters on the target are ignored. A cookie jar is
    /// attached if the transport config doesn't already carry one.
    pub fn new(target: &str, api_version: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Self::with_client(http, target, api_version)
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        target: &str,
        api_version: &str,
    ) -> Result<Self, Error> {
        let api_root = api_root(target, api_version)?;
        debug!(api_root = %api_root, "smartzone client ready");
        Ok(Self { http, api_root })
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The versioned API root every resource path is joined onto.
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Build a full URL for an API-relative path such as `query/ap`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.api_root.join(path.trim_start_matches('/'))?)
    }
}

/// First 200 characters of a response body, for error messages.
pub(crate) fn body_preview(body: &str) -> String {
    body.chars().take(200).collect()
}

/// `{target}/wsg/api/public/{version}/` with a guaranteed trailing slash
/// so `Url::join` appends rather than replaces the last segment.
fn api_root(target: &str, api_version: &str) -> Result<Url, Error> {
    let base = target.trim_end_matches('/');
    let version = api_version.trim_matches('/');
    Ok(Url::parse(&format!("{base}/wsg/api/public/{version}/"))?)
}
