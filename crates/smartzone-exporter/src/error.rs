//! CLI error types with miette diagnostics.
//!
//! Maps config and scrape errors into user-facing errors with actionable
//! help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use smartzone_config::ConfigError;
use smartzone_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────

    #[error("No {what} configured")]
    #[diagnostic(
        code(smartzone::missing_setting),
        help(
            "Pass it as a flag, set it via SMARTZONE_* environment variables,\n\
             or add it to the config file."
        )
    )]
    MissingSetting { what: &'static str },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(smartzone::validation))]
    Validation { field: String, reason: String },

    #[error("Failed to load configuration: {message}")]
    #[diagnostic(
        code(smartzone::config),
        help("Check the config file syntax and SMARTZONE_* environment variables.")
    )]
    Config { message: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("No password configured")]
    #[diagnostic(
        code(smartzone::no_credentials),
        help(
            "Set SMARTZONE_PASSWORD, point password_env at a variable holding it,\n\
             or pass --password."
        )
    )]
    NoCredentials,

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(smartzone::auth_failed),
        help("Check the controller URL, username and password, and that the session endpoint is reachable.")
    )]
    AuthFailed { message: String },

    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the controller while fetching {resource}")]
    #[diagnostic(
        code(smartzone::connection_failed),
        help("Check that the controller is running and accessible. Try --insecure for self-signed certificates.")
    )]
    ConnectionFailed {
        resource: String,
        #[source]
        source: CoreError,
    },

    #[error("Request for {resource} timed out")]
    #[diagnostic(
        code(smartzone::timeout),
        help("Increase the timeout with --timeout or check controller responsiveness.")
    )]
    Timeout { resource: String },

    // ── Scrape ───────────────────────────────────────────────────────

    #[error("Scrape failed: {0}")]
    #[diagnostic(code(smartzone::scrape_failed))]
    Scrape(CoreError),

    // ── Server ───────────────────────────────────────────────────────

    #[error("Could not bind metrics server to {addr}")]
    #[diagnostic(
        code(smartzone::bind_failed),
        help("Another process may be using the port. Pick one with --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSetting { .. } | Self::Validation { .. } | Self::Config { .. } => {
                exit_code::USAGE
            }
            Self::NoCredentials | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Scrape(_) | Self::Bind { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { what: "password" } => Self::NoCredentials,
            ConfigError::NoCredentials { what } => Self::MissingSetting { what },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Figment(e) => Self::Config {
                message: e.to_string(),
            },
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        if let Some(resource) = err.resource() {
            let resource = resource.to_owned();
            if err.is_timeout() {
                return Self::Timeout { resource };
            }
            if err.is_connect() {
                return Self::ConnectionFailed {
                    resource,
                    source: err,
                };
            }
        }

        match err {
            CoreError::Authentication { message } => Self::AuthFailed { message },
            CoreError::Config { message } => Self::Config { message },
            other @ (CoreError::Fetch { .. } | CoreError::SchemaMismatch { .. }) => {
                Self::Scrape(other)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_usage_or_auth() {
        let err = CliError::from(ConfigError::NoCredentials { what: "target" });
        assert_eq!(err.exit_code(), exit_code::USAGE);

        let err = CliError::from(ConfigError::NoCredentials { what: "password" });
        assert_eq!(err.exit_code(), exit_code::AUTH);

        let err = CliError::from(ConfigError::Validation {
            field: "metrics_path".into(),
            reason: "must start with '/'".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn scrape_errors_map_by_class() {
        let err = CliError::from(CoreError::Authentication {
            message: "login failed (HTTP 401 Unauthorized): ".into(),
        });
        assert_eq!(err.exit_code(), exit_code::AUTH);

        let err = CliError::from(CoreError::SchemaMismatch {
            family: "zone",
            detail: "record has no `zoneId`".into(),
        });
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }
}
