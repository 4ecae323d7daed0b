//! CLI-aware configuration: the loaded [`Config`] with flag overrides
//! applied on top, resolved into everything the exporter needs to run.

use std::net::SocketAddr;

use smartzone_config::{Config, load_config};
use smartzone_core::ControllerConfig;

use crate::cli::Cli;
use crate::error::CliError;

/// Fully resolved runtime settings.
#[derive(Debug)]
pub struct Settings {
    pub controller: ControllerConfig,
    pub listen: SocketAddr,
    pub metrics_path: String,
}

/// Load file + env config, apply CLI flags, validate, and resolve credentials.
pub fn resolve(cli: &Cli) -> Result<Settings, CliError> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, cli);
    config.validate()?;

    let password = config.resolve_password(cli.password.as_deref())?;
    let controller = config.to_controller_config(password)?;

    Ok(Settings {
        controller,
        listen: config.listen_addr()?,
        metrics_path: config.metrics_path,
    })
}

/// Overlay explicitly-given CLI flags onto the loaded config.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref target) = cli.target {
        config.target = Some(target.clone());
    }
    if let Some(ref username) = cli.username {
        config.username = Some(username.clone());
    }
    if cli.insecure {
        config.insecure = true;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(ref addr) = cli.listen_address {
        config.listen_address.clone_from(addr);
    }
    if let Some(ref path) = cli.metrics_path {
        config.metrics_path.clone_from(path);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    if let Some(ref version) = cli.api_version {
        config.api_version.clone_from(version);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flags_override_file_values() {
        let mut config = Config {
            target: Some("https://old.example.com".into()),
            port: 9000,
            ..Config::default()
        };
        let cli = Cli::try_parse_from([
            "smartzone-exporter",
            "--target",
            "https://sz.example.com:8443",
            "--port",
            "9100",
            "--metrics-path",
            "/probe",
            "--api-version",
            "v11_1",
        ])
        .unwrap();

        apply_overrides(&mut config, &cli);

        assert_eq!(config.target.as_deref(), Some("https://sz.example.com:8443"));
        assert_eq!(config.port, 9100);
        assert_eq!(config.metrics_path, "/probe");
        assert_eq!(config.api_version, "v11_1");
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let mut config = Config {
            username: Some("monitor".into()),
            insecure: true,
            timeout: 12,
            ..Config::default()
        };
        let before = config.clone();
        let cli = Cli::try_parse_from(["smartzone-exporter"]).unwrap();

        apply_overrides(&mut config, &cli);
        assert_eq!(config, before);
    }
}
