//! Middleware for `axum::Router` and HTTP request processing.
//!
//! - Security (CORS, headers, body limits)
//! - Observability (request IDs, tracing)
//! - Recovery (panics, timeouts, service errors)
//! - OpenAPI documentation
//! - Single page application hosting
//! - Share link rewriting
//!
//! Every router extension is added through [`Router::layer`] and therefore
//! runs after routing. [`ShareRewriteLayer`] changes which route a request
//! takes, so it wraps the finished router instead:
//!
//! ```rust,no_run
//! use aide::axum::ApiRouter;
//! use axum::Router;
//! use lectern_server::middleware::*;
//! use tower::Layer;
//!
//! let router: Router = ApiRouter::new()
//!     .with_open_api(OpenApiConfig::default())
//!     .with_spa(&SpaConfig::new("./dist"))
//!     .with_security(&CorsConfig::default(), &SecurityHeadersConfig::default())
//!     .with_observability()
//!     .with_default_recovery();
//!
//! let app = ShareRewriteLayer::new().layer(router);
//! ```
//!
//! [`Router::layer`]: axum::Router::layer

mod observability;
mod recovery;
mod security;
mod share_rewrite;
mod spa;
mod specification;

pub use observability::{REQUEST_ID_HEADER, RouterObservabilityExt};
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{
    CorsConfig, DEFAULT_MAX_BODY_SIZE, FrameOptions, ReferrerPolicy, RouterSecurityExt,
    SecurityHeadersConfig,
};
pub use share_rewrite::{ShareRewrite, ShareRewriteLayer, rewrite_uri};
pub use spa::{INDEX_FILE, RouterSpaExt, SpaConfig};
pub use specification::{OpenApiConfig, RouterOpenApiExt};
