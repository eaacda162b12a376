//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, state wiring and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::open_pool;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Axum HTTP server
///
/// On SIGTERM or SIGINT the shutdown token is cancelled, which aborts
/// in-flight store calls, and the server stops accepting connections.
///
/// # Errors
///
/// Returns an error if:
/// - Database open or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = open_pool(&config).await?;
    tracing::info!(storage = %config.storage_path, "Storage ready");

    let shutdown = CancellationToken::new();
    let state = AppState::new(Arc::new(pool.clone()), &config, shutdown.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves once a termination signal arrives, cancelling `token` first.
async fn shutdown_signal(token: CancellationToken) {
    match wait_for_signal().await {
        Ok(signal) => tracing::info!("Received {signal}, shutting down"),
        Err(e) => tracing::error!("Signal handling failed: {e}, shutting down"),
    }
    token.cancel();
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGTERM handler: {}", e))?;
    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGINT handler: {}", e))?;

    Ok(tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    })
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to wait for CTRL-C: {}", e))?;
    Ok("SIGINT")
}
