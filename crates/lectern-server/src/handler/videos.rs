//! Video handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use lectern_postgres::query::VideoRepository;

use crate::extract::{AdminAccess, Json, Path, PgPool, ValidateJson};
use crate::handler::request::{VideoPathParams, UpdateVideo};
use crate::handler::response::{ErrorResponse, Video};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for video operations.
const TRACING_TARGET: &str = "lectern_server::handler::videos";

/// Returns a video by ID.
#[tracing::instrument(skip_all, fields(video_id = %path_params.video_id))]
async fn read_video(
    Path(path_params): Path<VideoPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Video>)> {
    let Some(video) = conn.find_video_by_id(path_params.video_id).await? else {
        return Err(video_not_found());
    };

    Ok((StatusCode::OK, Json(Video::from_model(video))))
}

fn read_video_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get video")
        .description("Returns the video with the given ID, including its share path.")
        .response::<200, Json<Video>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Applies partial changes to a video.
#[tracing::instrument(skip_all, fields(video_id = %path_params.video_id))]
async fn update_video(
    _: AdminAccess,
    Path(path_params): Path<VideoPathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateVideo>,
) -> Result<(StatusCode, Json<Video>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating video");

    let Some(video) = conn
        .update_video(path_params.video_id, request.into_model())
        .await?
    else {
        return Err(video_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Video updated");

    Ok((StatusCode::OK, Json(Video::from_model(video))))
}

fn update_video_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update video")
        .description("Updates the given fields of a video. Requires the admin token.")
        .response::<200, Json<Video>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a video.
#[tracing::instrument(skip_all, fields(video_id = %path_params.video_id))]
async fn delete_video(
    _: AdminAccess,
    Path(path_params): Path<VideoPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting video");

    if !conn.delete_video(path_params.video_id).await? {
        return Err(video_not_found());
    }

    tracing::info!(target: TRACING_TARGET, "Video deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_video_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete video")
        .description("Permanently removes the video. Its share link stops resolving.")
        .response::<204, ()>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

fn video_not_found() -> Error<'static> {
    ErrorKind::NotFound
        .with_message("Video not found")
        .with_resource("video")
}

/// Returns a [`Router`] with all video routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/videos/{videoId}/",
            get_with(read_video, read_video_docs)
                .patch_with(update_video, update_video_docs)
                .delete_with(delete_video, delete_video_docs),
        )
        .with_path_items(|item| item.tag("Videos"))
}
