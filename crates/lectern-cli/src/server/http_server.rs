//! Plain HTTP server.

use std::net::SocketAddr;

use axum::ServiceExt;
use axum::extract::Request;
use tokio::net::TcpListener;

use crate::TRACING_TARGET_SERVER_STARTUP;
use crate::config::ServerConfig;
use crate::server::lifecycle::serve_with_shutdown;
use crate::server::{App, Result, ServerError, shutdown_signal};

/// Binds the configured address and serves `app` until a shutdown signal.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the server fails while running.
pub(crate) async fn serve_http(app: App, server_config: ServerConfig) -> Result<()> {
    server_config
        .validate()
        .map_err(|err| ServerError::InvalidConfig(err.to_string()))?;

    let server_addr = server_config.server_addr();
    let listener = TcpListener::bind(server_addr).await.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            addr = %server_addr,
            error = %err,
            "Failed to bind to address"
        );

        ServerError::BindError {
            address: server_addr.to_string(),
            source: err,
        }
    })?;

    let shutdown_signal = shutdown_signal(server_config.shutdown_timeout());
    serve_with_shutdown(&server_config, || async move {
        let make_service =
            ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app);

        axum::serve(listener, make_service)
            .with_graceful_shutdown(shutdown_signal)
            .await
    })
    .await
}
