//! Edge rewrite of share links.
//!
//! A request for `/video/{uuid}`, `/slide/{uuid}` or `/study-tool/{uuid}` is
//! served by the single page application entry at `/`, with the original path
//! carried in the `share_path` query parameter. The browser address bar keeps
//! the share link because the rewrite is internal.
//!
//! The rewrite has to happen before routing, so [`ShareRewriteLayer`] wraps
//! the finished [`Router`] instead of being added through [`Router::layer`]:
//!
//! ```rust
//! use axum::Router;
//! use axum::routing::get;
//! use lectern_server::middleware::ShareRewriteLayer;
//! use tower::Layer;
//!
//! let router: Router = Router::new().route("/", get(|| async { "index" }));
//! let app = ShareRewriteLayer::new().layer(router);
//! ```
//!
//! [`Router`]: axum::Router
//! [`Router::layer`]: axum::Router::layer

use std::task::{Context, Poll};

use axum::http::uri::PathAndQuery;
use axum::http::{Request, Uri};
use lectern_core::RewriteDirective;
use tower::{Layer, Service};

use crate::TRACING_TARGET_SHARE_REWRITE;

/// [`Layer`] that applies [`ShareRewrite`] to a service.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShareRewriteLayer;

impl ShareRewriteLayer {
    /// Creates a new [`ShareRewriteLayer`].
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ShareRewriteLayer {
    type Service = ShareRewrite<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ShareRewrite { inner }
    }
}

/// Service that rewrites share link requests before passing them on.
///
/// Every other request, including API calls and static assets, reaches the
/// inner service untouched.
#[derive(Debug, Clone)]
pub struct ShareRewrite<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for ShareRewrite<S>
where
    S: Service<Request<B>>,
{
    type Error = S::Error;
    type Future = S::Future;
    type Response = S::Response;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if let Some(uri) = rewrite_uri(request.uri()) {
            *request.uri_mut() = uri;
        }

        self.inner.call(request)
    }
}

/// Returns the rewritten URI for a share link, or `None` for any other path.
pub fn rewrite_uri(uri: &Uri) -> Option<Uri> {
    let directive = RewriteDirective::from_path(uri.path())?;
    let target = directive.target_uri(uri.query());

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(target.as_str()).ok()?);
    let rewritten = Uri::from_parts(parts).ok()?;

    tracing::debug!(
        target: TRACING_TARGET_SHARE_REWRITE,
        share_path = directive.preserved_path(),
        rewritten = %rewritten,
        "share link rewritten",
    );

    Some(rewritten)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use axum::Router;
    use axum::body::Body;
    use axum::extract::OriginalUri;
    use axum::http::{Request, Uri};
    use axum::routing::get;
    use tower::{Layer, ServiceExt, service_fn};

    use super::*;

    const UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

    async fn seen_uri(uri: &str) -> anyhow::Result<String> {
        let service = ShareRewriteLayer::new().layer(service_fn(
            |request: Request<Body>| async move { Ok::<_, Infallible>(request.uri().to_string()) },
        ));

        let request = Request::builder().uri(uri).body(Body::empty())?;
        Ok(service.oneshot(request).await?)
    }

    #[tokio::test]
    async fn rewrites_every_bucket() -> anyhow::Result<()> {
        for bucket in ["video", "slide", "study-tool"] {
            let seen = seen_uri(&format!("/{bucket}/{UUID}")).await?;
            assert_eq!(seen, format!("/?share_path=%2F{bucket}%2F{UUID}"));
        }
        Ok(())
    }

    #[tokio::test]
    async fn keeps_query_and_replaces_share_path() -> anyhow::Result<()> {
        let seen = seen_uri(&format!("/slide/{UUID}?share_path=%2Fvideo%2Fx&ref=mail")).await?;
        assert_eq!(seen, format!("/?ref=mail&share_path=%2Fslide%2F{UUID}"));
        Ok(())
    }

    #[tokio::test]
    async fn uppercase_uuid_is_rewritten() -> anyhow::Result<()> {
        let upper = UUID.to_uppercase();
        let seen = seen_uri(&format!("/video/{upper}")).await?;
        assert_eq!(seen, format!("/?share_path=%2Fvideo%2F{upper}"));
        Ok(())
    }

    #[tokio::test]
    async fn passes_through_everything_else() -> anyhow::Result<()> {
        for uri in [
            "/".to_owned(),
            "/about?tab=1".to_owned(),
            "/slide/not-a-uuid".to_owned(),
            format!("/document/{UUID}"),
            format!("/video/{UUID}/"),
            format!("/api/content/video/{UUID}"),
            "/assets/index-3f2a.js".to_owned(),
        ] {
            assert_eq!(seen_uri(&uri).await?, uri);
        }
        Ok(())
    }

    #[test]
    fn absolute_uri_keeps_authority() {
        let uri: Uri = format!("https://lectern.dev/video/{UUID}?t=30")
            .parse()
            .unwrap();
        let rewritten = rewrite_uri(&uri).unwrap();

        assert_eq!(rewritten.authority().map(|a| a.as_str()), Some("lectern.dev"));
        assert_eq!(rewritten.path(), "/");
        assert_eq!(
            rewritten.query(),
            Some(format!("t=30&share_path=%2Fvideo%2F{UUID}").as_str())
        );
    }

    #[tokio::test]
    async fn router_sees_entry_page_and_original_uri() -> anyhow::Result<()> {
        async fn index(OriginalUri(original): OriginalUri, uri: Uri) -> String {
            format!("{original} -> {uri}")
        }

        let router: Router = Router::new().route("/", get(index));
        let app = ShareRewriteLayer::new().layer(router);

        let request = Request::builder()
            .uri(format!("/study-tool/{UUID}"))
            .body(Body::empty())?;
        let response = app.oneshot(request).await?;
        assert!(response.status().is_success());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = String::from_utf8(body.to_vec())?;
        assert_eq!(
            body,
            format!("/?share_path=%2Fstudy-tool%2F{UUID} -> /?share_path=%2Fstudy-tool%2F{UUID}")
        );

        Ok(())
    }
}
