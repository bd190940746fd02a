//! Semester handlers.
//!
//! Reads are public. Creating, updating and deleting a semester requires the
//! admin token. Deleting a semester cascades to its courses and everything
//! below them.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use lectern_postgres::query::{CourseRepository, SemesterRepository};
use lectern_postgres::types::OffsetPagination;

use crate::extract::{AdminAccess, Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{
    CreateCourse, CreateSemester, Pagination, SemesterPathParams, UpdateSemester,
};
use crate::handler::response::{Course, CoursesPage, ErrorResponse, Semester, SemestersPage};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for semester operations.
const TRACING_TARGET: &str = "lectern_server::handler::semesters";

/// Lists semesters, newest first.
#[tracing::instrument(skip_all)]
async fn list_semesters(
    PgPool(mut conn): PgPool,
    Query(pagination): Query<Pagination>,
) -> Result<(StatusCode, Json<SemestersPage>)> {
    let pagination = OffsetPagination::from(pagination);
    let semesters = conn.list_semesters(pagination).await?;
    let page = SemestersPage::from_models(semesters, pagination, Semester::from_model);

    tracing::debug!(
        target: TRACING_TARGET,
        count = page.items.len(),
        "Semesters listed",
    );

    Ok((StatusCode::OK, Json(page)))
}

fn list_semesters_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List semesters")
        .description("Returns a page of semesters, newest first.")
        .response::<200, Json<SemestersPage>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Creates a new semester.
#[tracing::instrument(skip_all)]
async fn create_semester(
    _: AdminAccess,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateSemester>,
) -> Result<(StatusCode, Json<Semester>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating semester");

    let semester = conn.create_semester(request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        semester_id = %semester.id,
        "Semester created",
    );

    Ok((StatusCode::CREATED, Json(Semester::from_model(semester))))
}

fn create_semester_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create semester")
        .description("Creates a new semester. Requires the admin token.")
        .response::<201, Json<Semester>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
}

/// Returns a semester by ID.
#[tracing::instrument(skip_all, fields(semester_id = %path_params.semester_id))]
async fn read_semester(
    Path(path_params): Path<SemesterPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Semester>)> {
    let Some(semester) = conn.find_semester_by_id(path_params.semester_id).await? else {
        return Err(semester_not_found());
    };

    Ok((StatusCode::OK, Json(Semester::from_model(semester))))
}

fn read_semester_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get semester")
        .description("Returns the semester with the given ID.")
        .response::<200, Json<Semester>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Applies partial changes to a semester.
#[tracing::instrument(skip_all, fields(semester_id = %path_params.semester_id))]
async fn update_semester(
    _: AdminAccess,
    Path(path_params): Path<SemesterPathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateSemester>,
) -> Result<(StatusCode, Json<Semester>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating semester");

    let changes = request.into_model();
    let Some(semester) = conn
        .update_semester(path_params.semester_id, changes)
        .await?
    else {
        return Err(semester_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Semester updated");

    Ok((StatusCode::OK, Json(Semester::from_model(semester))))
}

fn update_semester_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update semester")
        .description("Updates the given fields of a semester. Requires the admin token.")
        .response::<200, Json<Semester>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a semester with all of its courses.
#[tracing::instrument(skip_all, fields(semester_id = %path_params.semester_id))]
async fn delete_semester(
    _: AdminAccess,
    Path(path_params): Path<SemesterPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting semester");

    if !conn.delete_semester(path_params.semester_id).await? {
        return Err(semester_not_found());
    }

    tracing::info!(target: TRACING_TARGET, "Semester deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_semester_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete semester")
        .description("Permanently removes the semester, its courses and their materials.")
        .response::<204, ()>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists the courses of a semester, ordered by course code.
#[tracing::instrument(skip_all, fields(semester_id = %path_params.semester_id))]
async fn list_semester_courses(
    Path(path_params): Path<SemesterPathParams>,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<Pagination>,
) -> Result<(StatusCode, Json<CoursesPage>)> {
    if conn
        .find_semester_by_id(path_params.semester_id)
        .await?
        .is_none()
    {
        return Err(semester_not_found());
    }

    let pagination = OffsetPagination::from(pagination);
    let courses = conn
        .list_semester_courses(path_params.semester_id, pagination)
        .await?;
    let page = CoursesPage::from_models(courses, pagination, Course::from_model);

    tracing::debug!(
        target: TRACING_TARGET,
        count = page.items.len(),
        "Semester courses listed",
    );

    Ok((StatusCode::OK, Json(page)))
}

fn list_semester_courses_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List semester courses")
        .description("Returns a page of the semester's courses, ordered by course code.")
        .response::<200, Json<CoursesPage>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Creates a course in a semester.
#[tracing::instrument(skip_all, fields(semester_id = %path_params.semester_id))]
async fn create_semester_course(
    _: AdminAccess,
    Path(path_params): Path<SemesterPathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateCourse>,
) -> Result<(StatusCode, Json<Course>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating course");

    if conn
        .find_semester_by_id(path_params.semester_id)
        .await?
        .is_none()
    {
        return Err(semester_not_found());
    }

    let course = conn
        .create_course(request.into_model(path_params.semester_id))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        course_id = %course.id,
        "Course created",
    );

    Ok((StatusCode::CREATED, Json(Course::from_model(course))))
}

fn create_semester_course_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create course")
        .description("Creates a course in the semester. Requires the admin token.")
        .response::<201, Json<Course>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

fn semester_not_found() -> crate::handler::Error<'static> {
    ErrorKind::NotFound
        .with_message("Semester not found")
        .with_resource("semester")
}

/// Returns a [`Router`] with all semester routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/semesters/",
            get_with(list_semesters, list_semesters_docs)
                .post_with(create_semester, create_semester_docs),
        )
        .api_route(
            "/semesters/{semesterId}/",
            get_with(read_semester, read_semester_docs)
                .patch_with(update_semester, update_semester_docs)
                .delete_with(delete_semester, delete_semester_docs),
        )
        .api_route(
            "/semesters/{semesterId}/courses/",
            get_with(list_semester_courses, list_semester_courses_docs)
                .post_with(create_semester_course, create_semester_course_docs),
        )
        .with_path_items(|item| item.tag("Semesters"))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn create_without_admin_token_configured_is_forbidden() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server
            .post("/semesters/")
            .authorization_bearer("anything")
            .json(&json!({ "title": "Fall 2026" }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_semester_id_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server.get("/semesters/not-a-uuid/").await;
        response.assert_status_bad_request();

        Ok(())
    }
}
