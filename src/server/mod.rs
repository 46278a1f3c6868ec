//! HTTP invocation server.
//!
//! Provides two endpoints:
//! - `/` - any method; runs the insert handler with the request body as event
//! - `/status` - JSON invocation counters and pool occupancy
//!
//! Shuts down gracefully on Ctrl-C or SIGTERM, which Cloud Run sends before
//! stopping an instance.

mod handlers;
mod types;

use axum::routing::{any, get};
use axum::Router;
use log::{info, warn};
use tokio::signal;

use crate::error_handling::InitializationError;
use crate::handler::InsertHandler;
use handlers::{invoke_handler, status_handler};

/// Builds the router around a shared handler.
pub fn create_router(handler: InsertHandler) -> Router {
    Router::new()
        .route("/", any(invoke_handler))
        .route("/status", get(status_handler))
        .with_state(handler)
}

/// Creates and starts the invocation server on `0.0.0.0:{port}`.
pub async fn start_server(port: u16, handler: InsertHandler) -> Result<(), InitializationError> {
    let app = create_router(handler);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| {
            InitializationError::ServerBindError(format!("port {}: {}", port, e))
        })?;

    info!("Listening on http://0.0.0.0:{}/", port);
    info!("  - Status: http://0.0.0.0:{}/status", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| InitializationError::ServerBindError(format!("server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
