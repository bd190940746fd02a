#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use lectern_server::handler::routes;
use lectern_server::middleware::{
    RouterObservabilityExt, RouterOpenApiExt, RouterRecoveryExt, RouterSecurityExt,
    RouterSpaExt, SecurityHeadersConfig, ShareRewriteLayer,
};
use lectern_server::service::{ServiceConfig, ServiceState};
use tower::Layer;

use crate::config::{Cli, MiddlewareConfig};
use crate::server::App;

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "lectern_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "lectern_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "lectern_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing()?;
    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting lectern server"
    );

    cli.log();
    cli.validate()?;

    let state = create_service_state(&cli.service)?;
    let app = create_app(state, &cli.middleware);

    server::serve(app, cli.server)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}

/// Creates the service state from configuration.
fn create_service_state(config: &ServiceConfig) -> anyhow::Result<ServiceState> {
    ServiceState::from_config(config).context("failed to create service state")
}

/// Creates the application with all middleware layers applied.
///
/// Router layers apply in reverse order (last added = outermost):
/// 1. Recovery - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS, security headers, compression
/// 4. Routes - API handlers, OpenAPI documents and the viewer
///
/// The share link rewrite wraps the finished router so it runs before routing.
fn create_app(state: ServiceState, middleware: &MiddlewareConfig) -> App {
    let router = routes()
        .with_open_api(middleware.openapi.clone())
        .with_state(state)
        .with_spa(&middleware.spa)
        .with_security(&middleware.cors, &SecurityHeadersConfig::default())
        .with_observability()
        .with_recovery(&middleware.recovery);

    ShareRewriteLayer::new().layer(router)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use lectern_server::middleware::{INDEX_FILE, SpaConfig};
    use tower::ServiceExt;

    use super::*;

    fn app(static_dir: &std::path::Path) -> anyhow::Result<App> {
        let state = create_service_state(&ServiceConfig::builder().build()?)?;
        let middleware = MiddlewareConfig {
            spa: SpaConfig::new(static_dir),
            ..MiddlewareConfig::default()
        };
        Ok(create_app(state, &middleware))
    }

    async fn get(app: App, uri: &str) -> anyhow::Result<(StatusCode, String)> {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        let response = app.oneshot(request).await?;
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(body.to_vec())?))
    }

    #[tokio::test]
    async fn share_link_serves_viewer() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(INDEX_FILE), "<html>viewer</html>")?;

        let (status, body) = get(
            app(dir.path())?,
            "/study-tool/123E4567-E89B-12D3-A456-426614174000",
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>viewer</html>");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_api_route_is_json_not_found() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(INDEX_FILE), "<html>viewer</html>")?;

        let (status, body) = get(app(dir.path())?, "/api/lecture-halls/").await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body)?;
        assert_eq!(body["name"], "not_found");

        Ok(())
    }

    #[tokio::test]
    async fn serves_openapi_document() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let (status, body) = get(app(dir.path())?, "/api/openapi.json").await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Lectern API"));

        Ok(())
    }
}
