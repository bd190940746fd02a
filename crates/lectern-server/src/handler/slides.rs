//! Slide and document handlers.
//!
//! Slides and documents share one table; the `kind` column tells them
//! apart and both are shared under `/slide/{id}`.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use lectern_postgres::query::SlideRepository;

use crate::extract::{AdminAccess, Json, Path, PgPool, ValidateJson};
use crate::handler::request::{SlidePathParams, UpdateSlide};
use crate::handler::response::{ErrorResponse, Slide};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for slide operations.
const TRACING_TARGET: &str = "lectern_server::handler::slides";

/// Returns a slide by ID.
#[tracing::instrument(skip_all, fields(slide_id = %path_params.slide_id))]
async fn read_slide(
    Path(path_params): Path<SlidePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Slide>)> {
    let Some(slide) = conn.find_slide_by_id(path_params.slide_id).await? else {
        return Err(slide_not_found());
    };

    Ok((StatusCode::OK, Json(Slide::from_model(slide))))
}

fn read_slide_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get slide")
        .description("Returns the slide or document with the given ID, including its share path.")
        .response::<200, Json<Slide>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Applies partial changes to a slide.
#[tracing::instrument(skip_all, fields(slide_id = %path_params.slide_id))]
async fn update_slide(
    _: AdminAccess,
    Path(path_params): Path<SlidePathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateSlide>,
) -> Result<(StatusCode, Json<Slide>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating slide");

    let Some(slide) = conn
        .update_slide(path_params.slide_id, request.into_model())
        .await?
    else {
        return Err(slide_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Slide updated");

    Ok((StatusCode::OK, Json(Slide::from_model(slide))))
}

fn update_slide_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update slide")
        .description("Updates the given fields of a slide or document. Requires the admin token.")
        .response::<200, Json<Slide>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a slide.
#[tracing::instrument(skip_all, fields(slide_id = %path_params.slide_id))]
async fn delete_slide(
    _: AdminAccess,
    Path(path_params): Path<SlidePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting slide");

    if !conn.delete_slide(path_params.slide_id).await? {
        return Err(slide_not_found());
    }

    tracing::info!(target: TRACING_TARGET, "Slide deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_slide_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete slide")
        .description("Permanently removes the slide. Its share link stops resolving.")
        .response::<204, ()>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

fn slide_not_found() -> Error<'static> {
    ErrorKind::NotFound
        .with_message("Slide not found")
        .with_resource("slide")
}

/// Returns a [`Router`] with all slide routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/slides/{slideId}/",
            get_with(read_slide, read_slide_docs)
                .patch_with(update_slide, update_slide_docs)
                .delete_with(delete_slide, delete_slide_docs),
        )
        .with_path_items(|item| item.tag("Slides"))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn update_slide_requires_admin_token() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server
            .patch("/slides/0190a9c4-6a1f-7b2e-9d3c-1f2e3d4c5b6a/")
            .json(&json!({ "title": "Week 2" }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        Ok(())
    }
}
