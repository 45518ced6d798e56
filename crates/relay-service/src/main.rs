//! Relay service binary.
//!
//! Holds the latest game instance identifier in memory and serves it over
//! HTTP to any number of readers.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment (`PORT`)
//! 3. Create the shared application state (empty relay)
//! 4. Serve until Ctrl-C or SIGTERM
//!
//! A failure to bind the configured port is logged and returned from
//! `main`, so the process exits non-zero.

mod config;
mod error;

use std::sync::Arc;

use relay_server::{start_server, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::RelayConfig;
use crate::error::ServiceError;

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // 2. Load configuration.
    let config = RelayConfig::from_env();
    info!(port = config.port, "Relay server starting");
    info!("Accepts: UUID (36 chars) and Hex IDs (64+ chars)");

    // 3. Create application state.
    let state = Arc::new(AppState::new());

    // 4. Serve.
    if let Err(e) = start_server(&config.server_config(), state, shutdown_signal()).await {
        error!(error = %e, "Relay server exited with error");
        return Err(e.into());
    }

    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received");
}
