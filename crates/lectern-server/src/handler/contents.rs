//! Shareable content lookup.
//!
//! This is the endpoint share links resolve against: the client decodes a
//! `share_path` into a kind and an id, then fetches the record from here.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use lectern_postgres::query::ContentRepository;

use crate::extract::{Json, Path, PgPool};
use crate::handler::request::ContentPathParams;
use crate::handler::response::{Content, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for content lookups.
const TRACING_TARGET: &str = "lectern_server::handler::contents";

/// Returns the content record behind a share link.
///
/// `document` reads the same rows as `slide`, `syllabus` the same rows as
/// `study-tool`. The returned `type` is the kind stored on the row.
#[tracing::instrument(
    skip_all,
    fields(
        kind = %path_params.kind,
        content_id = %path_params.content_id,
    )
)]
async fn read_content(
    Path(path_params): Path<ContentPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Content>)> {
    let content = conn
        .find_content(path_params.kind, path_params.content_id)
        .await?;

    let Some(content) = content else {
        tracing::debug!(target: TRACING_TARGET, "Shared content not found");
        return Err(ErrorKind::NotFound
            .with_message("Content not found")
            .with_resource("content"));
    };

    tracing::debug!(target: TRACING_TARGET, "Shared content resolved");

    Ok((StatusCode::OK, Json(content)))
}

fn read_content_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get shared content")
        .description(
            "Resolves a share link target. `kind` is one of `video`, `slide`, `document`, \
             `study-tool` or `syllabus`.",
        )
        .response::<200, Json<Content>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with the content lookup route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/content/{kind}/{contentId}",
            get_with(read_content, read_content_docs),
        )
        .with_path_items(|item| item.tag("Content"))
}

#[cfg(test)]
mod test {
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn unknown_kind_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server
            .get("/content/podcast/0190a9c4-6a1f-7b2e-9d3c-1f2e3d4c5b6a")
            .await;
        response.assert_status_bad_request();

        Ok(())
    }

    #[tokio::test]
    async fn malformed_content_id_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server.get("/content/video/42").await;
        response.assert_status_bad_request();

        Ok(())
    }
}
