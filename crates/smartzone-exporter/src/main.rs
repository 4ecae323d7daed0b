mod cli;
mod config;
mod error;
mod exposition;
mod http;

use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use smartzone_core::{Collector, TlsVerification};

use crate::cli::{Cli, LogFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_format);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, format: LogFormat) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = config::resolve(&cli)?;

    if settings.controller.tls == TlsVerification::DangerAcceptInvalid {
        warn!(
            controller = settings.controller.target(),
            "TLS certificate verification is disabled"
        );
    }

    let collector = Arc::new(Collector::new(settings.controller));

    if cli.once {
        let collection = collector.collect().await?;
        print!("{}", exposition::render(&collection));
        return Ok(());
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        controller = collector.config().target(),
        "starting smartzone-exporter"
    );

    http::serve(
        collector,
        settings.listen,
        &settings.metrics_path,
        http::shutdown_signal(),
    )
    .await
}
