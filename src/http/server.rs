//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {addr}: {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down. Shutdown is triggered by
/// SIGTERM or Ctrl+C and drains in-flight connections before returning.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr_str = format!("{}:{}", config.http.host, config.http.port);
    let addr: SocketAddr = addr_str.parse().map_err(|source| ServerError::Addr {
        addr: addr_str.clone(),
        source,
    })?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
