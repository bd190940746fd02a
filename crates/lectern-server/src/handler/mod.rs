//! All `aide::axum::`[`ApiRouter`]s with related `axum::`[`Handler`]s.
//!
//! Every route lives under `/api`. Reads are public, mutations require the
//! admin token through [`AdminAccess`].
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use lectern_server::handler::routes;
//! use lectern_server::middleware::{OpenApiConfig, RouterOpenApiExt};
//! use lectern_server::service::{ServiceConfig, ServiceState};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ServiceConfig::default();
//! let state = ServiceState::from_config(&config)?;
//!
//! let router: axum::Router = routes()
//!     .with_open_api(OpenApiConfig::default())
//!     .with_state(state);
//! # Ok(())
//! # }
//! ```
//!
//! [`ApiRouter`]: aide::axum::ApiRouter
//! [`Handler`]: axum::handler::Handler
//! [`AdminAccess`]: crate::extract::AdminAccess

mod contents;
mod courses;
mod creator;
mod error;
mod monitors;
pub mod request;
pub mod response;
mod semesters;
mod slides;
mod study_tools;
mod topics;
mod videos;

use aide::axum::ApiRouter;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub(crate) use crate::handler::response::ErrorResponse;
use crate::service::ServiceState;

/// Prefix every API route is nested under.
pub const API_PREFIX: &str = "/api";

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with the catalogue routes.
fn catalogue_routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(semesters::routes())
        .merge(courses::routes())
        .merge(topics::routes())
        .merge(slides::routes())
        .merge(videos::routes())
        .merge(study_tools::routes())
        .merge(creator::routes())
}

/// Returns an [`ApiRouter`] with all routes nested under [`API_PREFIX`].
///
/// Unknown paths under the prefix answer with a JSON 404 body, so a single
/// page application fallback added to the outer router never swallows them.
pub fn routes() -> ApiRouter<ServiceState> {
    let api = ApiRouter::new()
        .merge(catalogue_routes())
        .merge(contents::routes())
        .merge(monitors::routes())
        .fallback(handler);

    ApiRouter::new().nest(API_PREFIX, api)
}

#[cfg(test)]
mod test {
    use aide::axum::ApiRouter;
    use axum::http::StatusCode;
    use axum::http::header::{AUTHORIZATION, HeaderValue};
    use axum_test::TestServer;

    use crate::handler::routes;
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] with the given router.
    pub async fn create_test_server_with_router(
        router: impl Fn(ServiceState) -> ApiRouter<ServiceState>,
    ) -> anyhow::Result<TestServer> {
        create_test_server_with_config(&ServiceConfig::default(), router).await
    }

    /// Returns a new [`TestServer`] with the given configuration and router.
    pub async fn create_test_server_with_config(
        config: &ServiceConfig,
        router: impl Fn(ServiceState) -> ApiRouter<ServiceState>,
    ) -> anyhow::Result<TestServer> {
        let state = ServiceState::from_config(config)?;
        let router = router(state.clone());
        create_test_server_with_state(router, state).await
    }

    /// Returns a new [`TestServer`] with the given router and state.
    pub async fn create_test_server_with_state(
        router: ApiRouter<ServiceState>,
        state: ServiceState,
    ) -> anyhow::Result<TestServer> {
        let app = router.with_state(state);
        let app: axum::Router = app.into();
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] with the default router and state.
    pub async fn create_test_server() -> anyhow::Result<TestServer> {
        create_test_server_with_router(|_| routes()).await
    }

    #[tokio::test]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        assert!(server.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_not_found() -> anyhow::Result<()> {
        let server = create_test_server().await?;

        let response = server.get("/api/lecture-halls/").await;
        response.assert_status_not_found();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "not_found");

        Ok(())
    }

    #[tokio::test]
    async fn mutations_are_forbidden_without_configured_token() -> anyhow::Result<()> {
        let server = create_test_server().await?;

        let response = server
            .post("/api/semesters/")
            .authorization_bearer("s3cret")
            .json(&serde_json::json!({ "title": "Fall 2026" }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_bearer_is_unauthorized() -> anyhow::Result<()> {
        let config = ServiceConfig::builder().with_admin_token("s3cret").build()?;
        let server = create_test_server_with_config(&config, |_| routes()).await?;

        let response = server
            .delete("/api/videos/0190a9c4-6a1f-7b2e-9d3c-1f2e3d4c5b6a/")
            .add_header(AUTHORIZATION, HeaderValue::from_static("Basic czNjcmV0"))
            .await;
        response.assert_status_unauthorized();

        Ok(())
    }
}
