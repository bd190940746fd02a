//! HTTP/HTTPS server startup and lifecycle management.
//!
//! Protocol selection follows the `tls` feature and the configured
//! certificate paths.

#[cfg(feature = "tls")]
mod https_server;
mod error;
mod http_server;
mod lifecycle;
mod shutdown;

use axum::Router;
pub use error::{Result, ServerError};
use lectern_server::middleware::ShareRewrite;
use shutdown::shutdown_signal;

use crate::config::ServerConfig;

/// Service served on every connection: the router behind the share link rewrite.
pub type App = ShareRewrite<Router>;

/// Starts a server, choosing HTTPS when TLS is enabled and configured.
///
/// # Errors
///
/// Returns an error if:
/// - TLS certificates cannot be loaded (HTTPS mode)
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: App, config: ServerConfig) -> Result<()> {
    #[cfg(feature = "tls")]
    if let (Some(cert_path), Some(key_path)) =
        (config.tls_cert_path.clone(), config.tls_key_path.clone())
    {
        return https_server::serve_https(app, config, cert_path, key_path).await;
    }

    http_server::serve_http(app, config).await
}
