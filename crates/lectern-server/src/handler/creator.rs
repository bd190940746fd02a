//! All-in-one catalogue creator.
//!
//! Creates a course with its topics, slides, videos and study tools in a
//! single transaction. A failure at any step leaves the catalogue untouched.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use lectern_core::ContentKind;
use lectern_postgres::ScopedFutureExt;
use lectern_postgres::query::{
    CourseRepository, SemesterRepository, SlideRepository, StudyToolRepository, TopicRepository,
    VideoRepository,
};

use crate::extract::{AdminAccess, Json, PgPool, ValidateJson};
use crate::handler::request::CreateCatalogue;
use crate::handler::response::{CreatedCatalogue, CreatedMaterial, CreatedTopic, ErrorResponse};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for creator operations.
const TRACING_TARGET: &str = "lectern_server::handler::creator";

/// Creates a course together with its whole outline.
#[tracing::instrument(skip_all)]
async fn create_catalogue(
    _: AdminAccess,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateCatalogue>,
) -> Result<(StatusCode, Json<CreatedCatalogue>)> {
    tracing::debug!(
        target: TRACING_TARGET,
        topics = request.topics.len(),
        study_tools = request.study_tools.len(),
        "Creating catalogue",
    );

    let CreateCatalogue {
        semester_id,
        semester,
        course,
        topics,
        study_tools,
    } = request;

    let created = conn
        .transaction(|conn| {
            async move {
                let semester_id = match (semester_id, semester) {
                    (Some(semester_id), _) => conn
                        .find_semester_by_id(semester_id)
                        .await?
                        .map(|semester| semester.id)
                        .ok_or_else(|| {
                            ErrorKind::NotFound
                                .with_message("Semester not found")
                                .with_resource("semester")
                        })?,
                    (None, Some(semester)) => conn.create_semester(semester.into_model()).await?.id,
                    (None, None) => {
                        return Err(ErrorKind::BadRequest
                            .with_message("Either semesterId or semester is required")
                            .with_resource("request"));
                    }
                };

                let course = conn.create_course(course.into_model(semester_id)).await?;

                let mut created_topics = Vec::with_capacity(topics.len());
                for (index, topic) in topics.into_iter().enumerate() {
                    let (topic, slides, videos) = topic.into_parts(index);
                    let topic = conn.create_topic(topic.into_model(course.id)).await?;

                    let mut materials = Vec::with_capacity(slides.len() + videos.len());
                    for slide in slides {
                        let slide = conn.create_slide(slide.into_model(topic.id)).await?;
                        materials.push(CreatedMaterial::new(slide.content_kind(), slide.id));
                    }
                    for video in videos {
                        let video = conn.create_video(video.into_model(topic.id)).await?;
                        materials.push(CreatedMaterial::new(ContentKind::Video, video.id));
                    }

                    created_topics.push(CreatedTopic {
                        topic_id: topic.id,
                        materials,
                    });
                }

                let mut created_tools = Vec::with_capacity(study_tools.len());
                for study_tool in study_tools {
                    let study_tool = conn
                        .create_study_tool(study_tool.into_model(course.id))
                        .await?;
                    created_tools.push(CreatedMaterial::new(
                        study_tool.content_kind(),
                        study_tool.id,
                    ));
                }

                Ok::<CreatedCatalogue, Error<'static>>(CreatedCatalogue {
                    semester_id,
                    course_id: course.id,
                    topics: created_topics,
                    study_tools: created_tools,
                })
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        semester_id = %created.semester_id,
        course_id = %created.course_id,
        topics = created.topics.len(),
        "Catalogue created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

fn create_catalogue_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create catalogue")
        .description(
            "Creates a course in a new or existing semester together with its topics, \
             slides, videos and study tools. Everything is created in one transaction. \
             Requires the admin token.",
        )
        .response::<201, Json<CreatedCatalogue>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with the creator route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/creator/",
            post_with(create_catalogue, create_catalogue_docs),
        )
        .with_path_items(|item| item.tag("Creator"))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handler::test::create_test_server_with_config;
    use crate::service::ServiceConfig;

    #[tokio::test]
    async fn creator_requires_admin_token() -> anyhow::Result<()> {
        let config = ServiceConfig::builder().with_admin_token("s3cret").build()?;
        let server = create_test_server_with_config(&config, |_| super::routes()).await?;

        let response = server
            .post("/creator/")
            .json(&json!({
                "semester": { "title": "Fall 2026" },
                "course": { "code": "CS 101", "title": "Intro to Computing" },
            }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
