//! Middleware configuration for the HTTP server.
//!
//! All middleware configs come from `lectern-server` and support both CLI
//! arguments and environment variables.
//!
//! ```bash
//! lectern --cors-origins "https://lectern.dev" --request-timeout 60 --static-dir ./dist
//! ```

use clap::Args;
use lectern_server::middleware::{CorsConfig, OpenApiConfig, RecoveryConfig, SpaConfig};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Middleware configuration combining CORS, OpenAPI, recovery and viewer hosting.
#[derive(Debug, Clone, Default, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// OpenAPI documentation paths.
    #[clap(flatten)]
    pub openapi: OpenApiConfig,

    /// Request timeout and panic recovery.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,

    /// Static directory of the viewer.
    #[clap(flatten)]
    pub spa: SpaConfig,
}

impl MiddlewareConfig {
    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            openapi_path = %self.openapi.open_api_json,
            scalar_path = %self.openapi.scalar_ui,
            "OpenAPI configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            request_timeout_secs = self.recovery.request_timeout,
            static_dir = ?self.spa.static_dir(),
            "Recovery and viewer configuration"
        );
    }
}
