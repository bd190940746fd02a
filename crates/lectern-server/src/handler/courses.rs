//! Course handlers.
//!
//! A course owns its topics and its study tools, so both collections are
//! listed and created under `/courses/{courseId}/`.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use lectern_postgres::PgConn;
use lectern_postgres::query::{CourseRepository, StudyToolRepository, TopicRepository};
use lectern_postgres::types::OffsetPagination;

use crate::extract::{AdminAccess, Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{
    CoursePathParams, CreateStudyTool, CreateTopic, Pagination, UpdateCourse,
};
use crate::handler::response::{
    Course, ErrorResponse, StudyTool, StudyToolsPage, Topic, TopicsPage,
};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for course operations.
const TRACING_TARGET: &str = "lectern_server::handler::courses";

/// Returns a course by ID.
#[tracing::instrument(skip_all, fields(course_id = %path_params.course_id))]
async fn read_course(
    Path(path_params): Path<CoursePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Course>)> {
    let Some(course) = conn.find_course_by_id(path_params.course_id).await? else {
        return Err(course_not_found());
    };

    Ok((StatusCode::OK, Json(Course::from_model(course))))
}

fn read_course_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get course")
        .description("Returns the course with the given ID.")
        .response::<200, Json<Course>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Applies partial changes to a course.
#[tracing::instrument(skip_all, fields(course_id = %path_params.course_id))]
async fn update_course(
    _: AdminAccess,
    Path(path_params): Path<CoursePathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateCourse>,
) -> Result<(StatusCode, Json<Course>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating course");

    let Some(course) = conn
        .update_course(path_params.course_id, request.into_model())
        .await?
    else {
        return Err(course_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Course updated");

    Ok((StatusCode::OK, Json(Course::from_model(course))))
}

fn update_course_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update course")
        .description("Updates the given fields of a course. Requires the admin token.")
        .response::<200, Json<Course>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Deletes a course with its topics and materials.
#[tracing::instrument(skip_all, fields(course_id = %path_params.course_id))]
async fn delete_course(
    _: AdminAccess,
    Path(path_params): Path<CoursePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting course");

    if !conn.delete_course(path_params.course_id).await? {
        return Err(course_not_found());
    }

    tracing::info!(target: TRACING_TARGET, "Course deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_course_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete course")
        .description("Permanently removes the course, its topics and their materials.")
        .response::<204, ()>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists the topics of a course in outline order.
#[tracing::instrument(skip_all, fields(course_id = %path_params.course_id))]
async fn list_course_topics(
    Path(path_params): Path<CoursePathParams>,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<Pagination>,
) -> Result<(StatusCode, Json<TopicsPage>)> {
    ensure_course_exists(&mut conn, &path_params).await?;

    let pagination = OffsetPagination::from(pagination);
    let topics = conn
        .list_course_topics(path_params.course_id, pagination)
        .await?;
    let page = TopicsPage::from_models(topics, pagination, Topic::from_model);

    tracing::debug!(
        target: TRACING_TARGET,
        count = page.items.len(),
        "Course topics listed",
    );

    Ok((StatusCode::OK, Json(page)))
}

fn list_course_topics_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List course topics")
        .description("Returns a page of the course's topics in outline order.")
        .response::<200, Json<TopicsPage>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Creates a topic in a course.
#[tracing::instrument(skip_all, fields(course_id = %path_params.course_id))]
async fn create_course_topic(
    _: AdminAccess,
    Path(path_params): Path<CoursePathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateTopic>,
) -> Result<(StatusCode, Json<Topic>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating topic");

    ensure_course_exists(&mut conn, &path_params).await?;

    let topic = conn
        .create_topic(request.into_model(path_params.course_id))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        topic_id = %topic.id,
        "Topic created",
    );

    Ok((StatusCode::CREATED, Json(Topic::from_model(topic))))
}

fn create_course_topic_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create topic")
        .description("Creates a topic in the course. Requires the admin token.")
        .response::<201, Json<Topic>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists the study tools and syllabi of a course.
#[tracing::instrument(skip_all, fields(course_id = %path_params.course_id))]
async fn list_course_study_tools(
    Path(path_params): Path<CoursePathParams>,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<Pagination>,
) -> Result<(StatusCode, Json<StudyToolsPage>)> {
    ensure_course_exists(&mut conn, &path_params).await?;

    let pagination = OffsetPagination::from(pagination);
    let study_tools = conn
        .list_course_study_tools(path_params.course_id, pagination)
        .await?;
    let page = StudyToolsPage::from_models(study_tools, pagination, StudyTool::from_model);

    tracing::debug!(
        target: TRACING_TARGET,
        count = page.items.len(),
        "Course study tools listed",
    );

    Ok((StatusCode::OK, Json(page)))
}

fn list_course_study_tools_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List course study tools")
        .description("Returns a page of the course's study tools and syllabi.")
        .response::<200, Json<StudyToolsPage>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Creates a study tool or syllabus in a course.
#[tracing::instrument(skip_all, fields(course_id = %path_params.course_id))]
async fn create_course_study_tool(
    _: AdminAccess,
    Path(path_params): Path<CoursePathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateStudyTool>,
) -> Result<(StatusCode, Json<StudyTool>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating study tool");

    ensure_course_exists(&mut conn, &path_params).await?;

    let study_tool = conn
        .create_study_tool(request.into_model(path_params.course_id))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        study_tool_id = %study_tool.id,
        "Study tool created",
    );

    Ok((StatusCode::CREATED, Json(StudyTool::from_model(study_tool))))
}

fn create_course_study_tool_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create study tool")
        .description("Creates a study tool or syllabus in the course. Requires the admin token.")
        .response::<201, Json<StudyTool>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Fails with 404 unless the course exists.
async fn ensure_course_exists(conn: &mut PgConn, path_params: &CoursePathParams) -> Result<()> {
    match conn.find_course_by_id(path_params.course_id).await? {
        Some(_) => Ok(()),
        None => Err(course_not_found()),
    }
}

fn course_not_found() -> Error<'static> {
    ErrorKind::NotFound
        .with_message("Course not found")
        .with_resource("course")
}

/// Returns a [`Router`] with all course routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/courses/{courseId}/",
            get_with(read_course, read_course_docs)
                .patch_with(update_course, update_course_docs)
                .delete_with(delete_course, delete_course_docs),
        )
        .api_route(
            "/courses/{courseId}/topics/",
            get_with(list_course_topics, list_course_topics_docs)
                .post_with(create_course_topic, create_course_topic_docs),
        )
        .api_route(
            "/courses/{courseId}/study-tools/",
            get_with(list_course_study_tools, list_course_study_tools_docs)
                .post_with(create_course_study_tool, create_course_study_tool_docs),
        )
        .with_path_items(|item| item.tag("Courses"))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn delete_course_requires_admin_token() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server
            .delete("/courses/0190a9c4-6a1f-7b2e-9d3c-1f2e3d4c5b6a/")
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    async fn create_topic_requires_admin_token() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server
            .post("/courses/0190a9c4-6a1f-7b2e-9d3c-1f2e3d4c5b6a/topics/")
            .json(&json!({ "title": "Recursion" }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        Ok(())
    }
}
