// ── Core error types ──
//
// Scrape-level failures. Every variant aborts the current collection
// pass; the next scrape starts again from authentication.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Scrape errors ────────────────────────────────────────────────
    /// Bad credentials or unreachable session endpoint.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Transport failure, non-2xx status or malformed JSON on a resource.
    #[error("Failed to fetch {resource}: {source}")]
    Fetch {
        resource: String,
        #[source]
        source: smartzone_api::Error,
    },

    /// A record or response lacks something the catalog requires.
    #[error("Unexpected {family} payload: {detail}")]
    SchemaMismatch {
        family: &'static str,
        detail: String,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Translate an error raised while building the client or logging in.
    pub(crate) fn from_session(err: smartzone_api::Error) -> Self {
        match err {
            smartzone_api::Error::InvalidUrl(e) => Self::Config {
                message: format!("invalid controller URL: {e}"),
            },
            smartzone_api::Error::Tls(message) => Self::Config { message },
            smartzone_api::Error::Authentication { message } => Self::Authentication { message },
            other => Self::Authentication {
                message: other.to_string(),
            },
        }
    }

    /// Wrap an error raised while fetching `resource`.
    pub(crate) fn fetch(resource: impl Into<String>, source: smartzone_api::Error) -> Self {
        Self::Fetch {
            resource: resource.into(),
            source,
        }
    }

    /// Short machine-friendly class name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Authentication { .. } => "auth",
            Self::Fetch { .. } => "fetch",
            Self::SchemaMismatch { .. } => "schema",
            Self::Config { .. } => "config",
        }
    }

    /// The resource path, for fetch failures.
    pub fn resource(&self) -> Option<&str> {
        match self {
            Self::Fetch { resource, .. } => Some(resource),
            _ => None,
        }
    }

    /// Returns `true` if a fetch hit the transport timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Fetch { source: smartzone_api::Error::Transport(e), .. } if e.is_timeout())
    }

    /// Returns `true` if a fetch could not connect to the controller.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Fetch { source: smartzone_api::Error::Transport(e), .. } if e.is_connect())
    }

    /// Returns `true` if the controller rejected our credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
