//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;

use crate::config::ProbeConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Invalid listen address: {0}")]
    Addr(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server for the given probe profile.
///
/// Binds before serving so an occupied port surfaces immediately as
/// `ServerError::Bind` instead of being reported on the first request.
/// On success this function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &ProbeConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Addr(format!("{}:{}: {}", config.host, config.port, e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, instance = %config.instance, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
