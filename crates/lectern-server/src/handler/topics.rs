//! Topic handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use lectern_postgres::PgConn;
use lectern_postgres::query::{SlideRepository, TopicRepository, VideoRepository};
use lectern_postgres::types::OffsetPagination;

use crate::extract::{AdminAccess, Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{
    CreateSlide, CreateVideo, Pagination, TopicPathParams, UpdateTopic,
};
use crate::handler::response::{
    ErrorResponse, Slide, SlidesPage, Topic, Video, VideosPage,
};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for topic operations.
const TRACING_TARGET: &str = "lectern_server::handler::topics";

/// Returns a topic by ID.
#[tracing::instrument(skip_all, fields(topic_id = %path_params.topic_id))]
async fn read_topic(
    Path(path_params): Path<TopicPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Topic>)> {
    let Some(topic) = conn.find_topic_by_id(path_params.topic_id).await? else {
        return Err(topic_not_found());
    };

    Ok((StatusCode::OK, Json(Topic::from_model(topic))))
}

fn read_topic_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get topic")
        .description("Returns the topic with the given ID.")
        .response::<200, Json<Topic>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Applies partial changes to a topic.
#[tracing::instrument(skip_all, fields(topic_id = %path_params.topic_id))]
async fn update_topic(
    _: AdminAccess,
    Path(path_params): Path<TopicPathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateTopic>,
) -> Result<(StatusCode, Json<Topic>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating topic");

    let Some(topic) = conn
        .update_topic(path_params.topic_id, request.into_model())
        .await?
    else {
        return Err(topic_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Topic updated");

    Ok((StatusCode::OK, Json(Topic::from_model(topic))))
}

fn update_topic_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update topic")
        .description("Updates the given fields of a topic. Requires the admin token.")
        .response::<200, Json<Topic>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a topic with its slides and videos.
#[tracing::instrument(skip_all, fields(topic_id = %path_params.topic_id))]
async fn delete_topic(
    _: AdminAccess,
    Path(path_params): Path<TopicPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting topic");

    if !conn.delete_topic(path_params.topic_id).await? {
        return Err(topic_not_found());
    }

    tracing::info!(target: TRACING_TARGET, "Topic deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_topic_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete topic")
        .description("Permanently removes the topic with its slides and videos.")
        .response::<204, ()>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists the slides and documents of a topic.
#[tracing::instrument(skip_all, fields(topic_id = %path_params.topic_id))]
async fn list_topic_slides(
    Path(path_params): Path<TopicPathParams>,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<Pagination>,
) -> Result<(StatusCode, Json<SlidesPage>)> {
    ensure_topic_exists(&mut conn, &path_params).await?;

    let pagination = OffsetPagination::from(pagination);
    let slides = conn
        .list_topic_slides(path_params.topic_id, pagination)
        .await?;
    let page = SlidesPage::from_models(slides, pagination, Slide::from_model);

    tracing::debug!(
        target: TRACING_TARGET,
        count = page.items.len(),
        "Topic slides listed",
    );

    Ok((StatusCode::OK, Json(page)))
}

fn list_topic_slides_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List topic slides")
        .description("Returns a page of the topic's slides and documents.")
        .response::<200, Json<SlidesPage>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Creates a slide or document in a topic.
#[tracing::instrument(skip_all, fields(topic_id = %path_params.topic_id))]
async fn create_topic_slide(
    _: AdminAccess,
    Path(path_params): Path<TopicPathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateSlide>,
) -> Result<(StatusCode, Json<Slide>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating slide");

    ensure_topic_exists(&mut conn, &path_params).await?;

    let slide = conn
        .create_slide(request.into_model(path_params.topic_id))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        slide_id = %slide.id,
        "Slide created",
    );

    Ok((StatusCode::CREATED, Json(Slide::from_model(slide))))
}

fn create_topic_slide_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create slide")
        .description("Creates a slide or document in the topic. Requires the admin token.")
        .response::<201, Json<Slide>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists the videos of a topic.
#[tracing::instrument(skip_all, fields(topic_id = %path_params.topic_id))]
async fn list_topic_videos(
    Path(path_params): Path<TopicPathParams>,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<Pagination>,
) -> Result<(StatusCode, Json<VideosPage>)> {
    ensure_topic_exists(&mut conn, &path_params).await?;

    let pagination = OffsetPagination::from(pagination);
    let videos = conn
        .list_topic_videos(path_params.topic_id, pagination)
        .await?;
    let page = VideosPage::from_models(videos, pagination, Video::from_model);

    tracing::debug!(
        target: TRACING_TARGET,
        count = page.items.len(),
        "Topic videos listed",
    );

    Ok((StatusCode::OK, Json(page)))
}

fn list_topic_videos_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List topic videos")
        .description("Returns a page of the topic's videos.")
        .response::<200, Json<VideosPage>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Creates a video in a topic.
#[tracing::instrument(skip_all, fields(topic_id = %path_params.topic_id))]
async fn create_topic_video(
    _: AdminAccess,
    Path(path_params): Path<TopicPathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateVideo>,
) -> Result<(StatusCode, Json<Video>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating video");

    ensure_topic_exists(&mut conn, &path_params).await?;

    let video = conn
        .create_video(request.into_model(path_params.topic_id))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        video_id = %video.id,
        "Video created",
    );

    Ok((StatusCode::CREATED, Json(Video::from_model(video))))
}

fn create_topic_video_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create video")
        .description("Creates a video in the topic. Requires the admin token.")
        .response::<201, Json<Video>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

async fn ensure_topic_exists(conn: &mut PgConn, path_params: &TopicPathParams) -> Result<()> {
    match conn.find_topic_by_id(path_params.topic_id).await? {
        Some(_) => Ok(()),
        None => Err(topic_not_found()),
    }
}

fn topic_not_found() -> Error<'static> {
    ErrorKind::NotFound
        .with_message("Topic not found")
        .with_resource("topic")
}

/// Returns a [`Router`] with all topic routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/topics/{topicId}/",
            get_with(read_topic, read_topic_docs)
                .patch_with(update_topic, update_topic_docs)
                .delete_with(delete_topic, delete_topic_docs),
        )
        .api_route(
            "/topics/{topicId}/slides/",
            get_with(list_topic_slides, list_topic_slides_docs)
                .post_with(create_topic_slide, create_topic_slide_docs),
        )
        .api_route(
            "/topics/{topicId}/videos/",
            get_with(list_topic_videos, list_topic_videos_docs)
                .post_with(create_topic_video, create_topic_video_docs),
        )
        .with_path_items(|item| item.tag("Topics"))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn create_video_requires_admin_token() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server
            .post("/topics/0190a9c4-6a1f-7b2e-9d3c-1f2e3d4c5b6a/videos/")
            .json(&json!({ "title": "Lecture 1", "url": "https://cdn.example.com/l1.mp4" }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        Ok(())
    }
}
