// ── Runtime connection configuration ──
//
// These types describe *how* to reach a SmartZone controller. They
// carry credential data and connection tuning, but never touch disk.
// The exporter binary constructs a `ControllerConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use smartzone_api::transport::{TlsMode, TransportConfig};
use smartzone_api::{Credentials, DEFAULT_API_VERSION};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Bundled root store (strict). Matches the controller CLI default.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for scraping a single controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller URL (e.g., `https://smartzone.example.com:8443`).
    pub url: Url,
    /// Session credentials.
    pub credentials: Credentials,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request transport timeout.
    pub timeout: Duration,
    /// Public API version segment, e.g. `v12_0`.
    pub api_version: String,
}

impl ControllerConfig {
    /// Config with default TLS, timeout and API version.
    pub fn new(url: Url, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            url,
            credentials: Credentials::new(username, password),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            api_version: DEFAULT_API_VERSION.into(),
        }
    }

    /// Transport settings for a per-scrape HTTP client.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
            cookie_jar: None,
        }
    }

    /// The target URL without a trailing slash, for display and client setup.
    pub fn target(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }
}
