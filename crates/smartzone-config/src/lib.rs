//! Configuration for the SmartZone exporter.
//!
//! Layered loading (built-in defaults, TOML file, `SMARTZONE_*`
//! environment), password resolution, and translation to
//! `smartzone_core::ControllerConfig`. CLI flag overrides are applied by
//! the binary on top of the loaded [`Config`].

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use smartzone_core::{ControllerConfig, TlsVerification};

/// Prefix for every environment variable the exporter reads.
pub const ENV_PREFIX: &str = "SMARTZONE_";

/// Fallback environment variable holding the controller password.
pub const PASSWORD_ENV: &str = "SMARTZONE_PASSWORD";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no {what} configured (set it in the config file, SMARTZONE_* env or flags)")]
    NoCredentials { what: &'static str },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl ConfigError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Exporter configuration, as loaded from file and environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Controller base URL (e.g., "https://smartzone.example.com:8443").
    pub target: Option<String>,

    /// Controller API username.
    pub username: Option<String>,

    /// Plaintext password. Prefer `password_env` or `SMARTZONE_PASSWORD`.
    pub password: Option<String>,

    /// Name of an environment variable holding the password.
    pub password_env: Option<String>,

    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM).
    pub ca_cert: Option<PathBuf>,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Public API version segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Address the metrics server binds to.
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Port the metrics server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP path serving the exposition.
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: None,
            username: None,
            password: None,
            password_env: None,
            insecure: false,
            ca_cert: None,
            timeout: default_timeout(),
            api_version: default_api_version(),
            listen_address: default_listen_address(),
            port: default_port(),
            metrics_path: default_metrics_path(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_api_version() -> String {
    smartzone_core::DEFAULT_API_VERSION.into()
}
fn default_listen_address() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    9345
}
fn default_metrics_path() -> String {
    "/metrics".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "smartzone", "smartzone-exporter").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("smartzone-exporter");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// The provider chain: defaults, then the TOML file, then environment.
///
/// A missing file contributes nothing.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX))
}

/// Load the config from `path`, or the platform default location.
///
/// Extraction is lossy so `SMARTZONE_INSECURE=1` or `yes` reads as `true`,
/// matching what the CLI accepts for the same variable.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    let config: Config = figment(&path).extract_lossy()?;
    Ok(config)
}

// ── Credential resolution ───────────────────────────────────────────

impl Config {
    /// Resolve the password: CLI flag, then the variable named by
    /// `password_env`, then `SMARTZONE_PASSWORD`, then the file.
    pub fn resolve_password(&self, flag: Option<&str>) -> Result<SecretString, ConfigError> {
        self.resolve_password_with(flag, |name| std::env::var(name).ok())
    }

    /// [`resolve_password`](Self::resolve_password) with an explicit
    /// environment lookup.
    pub fn resolve_password_with(
        &self,
        flag: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<SecretString, ConfigError> {
        if let Some(pw) = flag {
            return Ok(SecretString::from(pw.to_owned()));
        }

        if let Some(pw) = self.password_env.as_deref().and_then(&env) {
            return Ok(SecretString::from(pw));
        }

        if let Some(pw) = env(PASSWORD_ENV) {
            return Ok(SecretString::from(pw));
        }

        self.password
            .clone()
            .map(SecretString::from)
            .ok_or(ConfigError::NoCredentials { what: "password" })
    }

    /// Socket address for the metrics server.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .listen_address
            .parse()
            .map_err(|_| ConfigError::invalid("listen_address", &self.listen_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Check everything that doesn't need credentials.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.metrics_path.starts_with('/') {
            return Err(ConfigError::invalid(
                "metrics_path",
                format!("must start with '/', got '{}'", self.metrics_path),
            ));
        }
        if self.metrics_path == "/health" {
            return Err(ConfigError::invalid(
                "metrics_path",
                "'/health' is reserved for the liveness probe",
            ));
        }
        if self.timeout == 0 {
            return Err(ConfigError::invalid("timeout", "must be at least 1 second"));
        }
        self.listen_addr()?;
        Ok(())
    }

    /// Build a `ControllerConfig` with an already-resolved password.
    pub fn to_controller_config(
        &self,
        password: SecretString,
    ) -> Result<ControllerConfig, ConfigError> {
        let target = self
            .target
            .as_deref()
            .ok_or(ConfigError::NoCredentials { what: "target" })?;
        let url: url::Url = target
            .parse()
            .map_err(|_| ConfigError::invalid("target", format!("invalid URL: {target}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "target",
                format!("expected an http(s) URL, got '{target}'"),
            ));
        }

        let username = self
            .username
            .as_deref()
            .ok_or(ConfigError::NoCredentials { what: "username" })?;

        let mut config = ControllerConfig::new(url, username, password);
        config.tls = if self.insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        };
        config.timeout = Duration::from_secs(self.timeout);
        config.api_version.clone_from(&self.api_version);
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn config() -> Config {
        Config {
            target: Some("https://sz.example.com:8443".into()),
            username: Some("admin".into()),
            password: Some("from-file".into()),
            ..Config::default()
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn password_flag_wins() {
        let pw = config()
            .resolve_password_with(Some("from-flag"), |_| Some("from-env".into()))
            .unwrap();
        assert_eq!(pw.expose_secret(), "from-flag");
    }

    #[test]
    fn password_env_named_in_config_beats_default_env() {
        let mut cfg = config();
        cfg.password_env = Some("SZ_PW".into());
        let pw = cfg
            .resolve_password_with(None, |name| match name {
                "SZ_PW" => Some("named".into()),
                PASSWORD_ENV => Some("default".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(pw.expose_secret(), "named");
    }

    #[test]
    fn default_env_beats_file() {
        let mut cfg = config();
        cfg.password_env = Some("UNSET".into());
        let pw = cfg
            .resolve_password_with(None, |name| {
                (name == PASSWORD_ENV).then(|| "default".to_string())
            })
            .unwrap();
        assert_eq!(pw.expose_secret(), "default");
    }

    #[test]
    fn file_password_is_last_resort() {
        let pw = config().resolve_password_with(None, no_env).unwrap();
        assert_eq!(pw.expose_secret(), "from-file");

        let mut cfg = config();
        cfg.password = None;
        let err = cfg.resolve_password_with(None, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { what: "password" }));
    }

    #[test]
    fn tls_mode_follows_flags() {
        let pw = || SecretString::from("pw".to_string());

        let cc = config().to_controller_config(pw()).unwrap();
        assert_eq!(cc.tls, TlsVerification::SystemDefaults);

        let mut cfg = config();
        cfg.ca_cert = Some("/etc/ssl/sz.pem".into());
        let cc = cfg.to_controller_config(pw()).unwrap();
        assert_eq!(cc.tls, TlsVerification::CustomCa("/etc/ssl/sz.pem".into()));

        cfg.insecure = true;
        let cc = cfg.to_controller_config(pw()).unwrap();
        assert_eq!(cc.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn controller_config_carries_tuning() {
        let mut cfg = config();
        cfg.timeout = 5;
        cfg.api_version = "v11_1".into();
        let cc = cfg
            .to_controller_config(SecretString::from("pw".to_string()))
            .unwrap();
        assert_eq!(cc.timeout, Duration::from_secs(5));
        assert_eq!(cc.api_version, "v11_1");
        assert_eq!(cc.credentials.username, "admin");
    }

    #[test]
    fn missing_target_or_bad_url() {
        let mut cfg = config();
        cfg.target = None;
        let err = cfg
            .to_controller_config(SecretString::from("pw".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { what: "target" }));

        cfg.target = Some("ftp://sz.example.com".into());
        let err = cfg
            .to_controller_config(SecretString::from("pw".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn validate_rejects_bad_server_settings() {
        let mut cfg = config();
        assert!(cfg.validate().is_ok());

        cfg.metrics_path = "metrics".into();
        assert!(cfg.validate().is_err());

        cfg.metrics_path = "/health".into();
        assert!(cfg.validate().is_err());

        cfg.metrics_path = "/metrics".into();
        cfg.listen_address = "not-an-ip".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn listen_addr_combines_address_and_port() {
        let mut cfg = config();
        cfg.listen_address = "127.0.0.1".into();
        cfg.port = 9999;
        assert_eq!(cfg.listen_addr().unwrap().to_string(), "127.0.0.1:9999");
    }
}
