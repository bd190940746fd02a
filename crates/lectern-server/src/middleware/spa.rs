//! Single page application hosting.
//!
//! Serves the built viewer from a directory. Paths that match no file fall
//! back to `index.html`, so rewritten share links and client-side routes
//! both land on the viewer entry page.

use std::path::{Path, PathBuf};

use axum::Router;
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower_http::services::{ServeDir, ServeFile};

/// Tracing target for static file hosting.
const TRACING_TARGET: &str = "lectern_server::middleware::spa";

/// Name of the entry page inside the static directory.
pub const INDEX_FILE: &str = "index.html";

/// Configuration for serving the single page application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct SpaConfig {
    /// Directory with the built viewer, containing `index.html`.
    ///
    /// When unset, only the API is served.
    #[cfg_attr(feature = "config", arg(long, env = "STATIC_DIR"))]
    pub static_dir: Option<PathBuf>,
}

impl SpaConfig {
    /// Creates a configuration serving files from `static_dir`.
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: Some(static_dir.into()),
        }
    }

    /// Returns the static directory, if configured.
    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }

    /// Returns the path of the entry page, if a directory is configured.
    pub fn index_file(&self) -> Option<PathBuf> {
        self.static_dir().map(|dir| dir.join(INDEX_FILE))
    }
}

/// Extension trait for `axum::`[`Router`] to serve the single page application.
pub trait RouterSpaExt<S> {
    /// Serves the configured directory for every path no route matches.
    ///
    /// Does nothing if no directory is configured.
    fn with_spa(self, config: &SpaConfig) -> Self;
}

impl<S> RouterSpaExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_spa(self, config: &SpaConfig) -> Self {
        let (Some(static_dir), Some(index_file)) = (config.static_dir(), config.index_file())
        else {
            return self;
        };

        if !index_file.is_file() {
            tracing::warn!(
                target: TRACING_TARGET,
                index_file = %index_file.display(),
                "static directory has no entry page"
            );
        }

        tracing::info!(
            target: TRACING_TARGET,
            static_dir = %static_dir.display(),
            "serving single page application"
        );

        let serve_dir = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));
        self.fallback_service(serve_dir)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum_test::TestServer;
    use tower::{Layer, ServiceExt};

    use super::*;
    use crate::middleware::ShareRewriteLayer;

    fn static_dir() -> anyhow::Result<tempfile::TempDir> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(INDEX_FILE), "<html>viewer</html>")?;
        fs::create_dir(dir.path().join("assets"))?;
        fs::write(dir.path().join("assets").join("app.js"), "console.log(1)")?;
        Ok(dir)
    }

    #[tokio::test]
    async fn serves_files_and_falls_back_to_index() -> anyhow::Result<()> {
        let dir = static_dir()?;
        let router: Router = Router::new()
            .route("/api/ping", get(|| async { "pong" }))
            .with_spa(&SpaConfig::new(dir.path()));
        let server = TestServer::new(router)?;

        server.get("/assets/app.js").await.assert_text("console.log(1)");
        server.get("/courses/cs-101").await.assert_text("<html>viewer</html>");
        server.get("/api/ping").await.assert_text("pong");

        Ok(())
    }

    #[tokio::test]
    async fn rewritten_share_link_serves_index() -> anyhow::Result<()> {
        let dir = static_dir()?;
        let router: Router = Router::new().with_spa(&SpaConfig::new(dir.path()));
        let app = ShareRewriteLayer::new().layer(router);

        let request = Request::builder()
            .uri("/video/123e4567-e89b-12d3-a456-426614174000")
            .body(Body::empty())?;
        let response = app.oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&body[..], b"<html>viewer</html>");

        Ok(())
    }

    #[test]
    fn unset_directory_serves_nothing() {
        let config = SpaConfig::default();
        assert!(config.static_dir().is_none());
        assert!(config.index_file().is_none());
    }
}
