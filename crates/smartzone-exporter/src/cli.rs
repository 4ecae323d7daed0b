//! Clap derive structures for the `smartzone-exporter` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// smartzone-exporter -- Prometheus metrics for Ruckus SmartZone controllers
#[derive(Debug, Parser)]
#[command(
    name = "smartzone-exporter",
    version,
    about = "Expose Ruckus SmartZone controller metrics to Prometheus",
    long_about = "Serves a Prometheus scrape endpoint. Every scrape logs in to the\n\
        SmartZone public API, reads controller, zone, WLAN, AP, domain and\n\
        license data, and renders it in the Prometheus text format."
)]
pub struct Cli {
    /// Controller URL, e.g. https://smartzone.example.com:8443
    #[arg(long, short = 't', env = "SMARTZONE_TARGET")]
    pub target: Option<String>,

    /// Controller API username
    #[arg(long = "user", short = 'u', env = "SMARTZONE_USERNAME")]
    pub username: Option<String>,

    /// Controller API password (prefer SMARTZONE_PASSWORD or password_env)
    #[arg(long, short = 'p')]
    pub password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(
        long,
        env = "SMARTZONE_INSECURE",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub insecure: bool,

    /// Port the metrics server listens on [default: 9345]
    #[arg(long, env = "SMARTZONE_PORT")]
    pub port: Option<u16>,

    /// Address the metrics server binds to [default: 0.0.0.0]
    #[arg(long, env = "SMARTZONE_LISTEN_ADDRESS")]
    pub listen_address: Option<String>,

    /// HTTP path serving the metrics [default: /metrics]
    #[arg(long, env = "SMARTZONE_METRICS_PATH")]
    pub metrics_path: Option<String>,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long, env = "SMARTZONE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Public API version segment [default: v12_0]
    #[arg(long, env = "SMARTZONE_API_VERSION")]
    pub api_version: Option<String>,

    /// Config file path (defaults to the platform config directory)
    #[arg(long, short = 'c', env = "SMARTZONE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, env = "SMARTZONE_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Run a single scrape, print the exposition to stdout and exit
    #[arg(long)]
    pub once: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from([
            "smartzone-exporter",
            "-t",
            "https://sz.example.com:8443",
            "-u",
            "admin",
            "-p",
            "secret",
            "--insecure",
            "--port",
            "9100",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(cli.target.as_deref(), Some("https://sz.example.com:8443"));
        assert_eq!(cli.username.as_deref(), Some("admin"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert!(cli.insecure);
        assert_eq!(cli.port, Some(9100));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(!cli.once);
    }
}
