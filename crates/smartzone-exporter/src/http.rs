//! HTTP server for the Prometheus scrape endpoint.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tracing::{info, warn};

use smartzone_core::Collector;

use crate::error::CliError;
use crate::exposition::{CONTENT_TYPE, render};

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    collector: Arc<Collector>,
}

/// Create the HTTP router.
fn create_router(collector: Arc<Collector>, metrics_path: &str) -> Router {
    let state = AppState { collector };

    Router::new()
        .route(metrics_path, get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Runs one full scrape per request.
async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.collector.collect().await {
        Ok(collection) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, CONTENT_TYPE)],
            render(&collection),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("scrape failed: {e}\n"),
        )
            .into_response(),
    }
}

async fn health_handler() -> &'static str {
    "ok\n"
}

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve(
    collector: Arc<Collector>,
    addr: SocketAddr,
    metrics_path: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), CliError> {
    let router = create_router(collector, metrics_path);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!(addr = %addr, path = metrics_path, "metrics server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("metrics server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "could not listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl-C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
