//! HTTP server initialization and runtime setup.
//!
//! Opens the SQLite store, creates the tables, provisions the authorization
//! token and runs the Axum server until Ctrl-C or SIGTERM.

use crate::config::Config;
use crate::infrastructure::persistence::{self, ensure_schema};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - `authorization` and `links` tables
/// - Default authorization token (logged once when first generated)
/// - Axum HTTP server
///
/// A failure to create the tables is logged and startup continues; requests
/// against a missing table then fail individually.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened
/// - The authorization token cannot be provisioned
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database");

    if ensure_schema(&pool).await.is_err() {
        tracing::warn!("Schema setup incomplete, continuing anyway");
    }

    let state = AppState::new(Arc::new(pool), &config.base_url);

    let provisioned = state
        .auth_service
        .provision_default_token()
        .await
        .context("Couldn't generate default auth key")?;

    if let Some(token) = provisioned {
        tracing::info!(token = %token, "Default authorization key");
    }

    let app = app_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Running at {} (listening on http://{addr})", config.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
