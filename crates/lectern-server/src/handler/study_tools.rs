//! Study tool and syllabus handlers.
//!
//! Syllabi live in the same table as study tools and share their
//! `/study-tool/{id}` links.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use lectern_postgres::query::StudyToolRepository;

use crate::extract::{AdminAccess, Json, Path, PgPool, ValidateJson};
use crate::handler::request::{StudyToolPathParams, UpdateStudyTool};
use crate::handler::response::{ErrorResponse, StudyTool};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for study tool operations.
const TRACING_TARGET: &str = "lectern_server::handler::study_tools";

/// Returns a study tool by ID.
#[tracing::instrument(skip_all, fields(study_tool_id = %path_params.study_tool_id))]
async fn read_study_tool(
    Path(path_params): Path<StudyToolPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<StudyTool>)> {
    let Some(study_tool) = conn.find_study_tool_by_id(path_params.study_tool_id).await? else {
        return Err(study_tool_not_found());
    };

    Ok((StatusCode::OK, Json(StudyTool::from_model(study_tool))))
}

fn read_study_tool_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get study tool")
        .description("Returns the study tool or syllabus with the given ID, including its share path.")
        .response::<200, Json<StudyTool>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Applies partial changes to a study tool.
#[tracing::instrument(skip_all, fields(study_tool_id = %path_params.study_tool_id))]
async fn update_study_tool(
    _: AdminAccess,
    Path(path_params): Path<StudyToolPathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateStudyTool>,
) -> Result<(StatusCode, Json<StudyTool>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating study tool");

    let Some(study_tool) = conn
        .update_study_tool(path_params.study_tool_id, request.into_model())
        .await?
    else {
        return Err(study_tool_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Study tool updated");

    Ok((StatusCode::OK, Json(StudyTool::from_model(study_tool))))
}

fn update_study_tool_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update study tool")
        .description("Updates the given fields of a study tool or syllabus. Requires the admin token.")
        .response::<200, Json<StudyTool>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a study tool.
#[tracing::instrument(skip_all, fields(study_tool_id = %path_params.study_tool_id))]
async fn delete_study_tool(
    _: AdminAccess,
    Path(path_params): Path<StudyToolPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting study tool");

    if !conn.delete_study_tool(path_params.study_tool_id).await? {
        return Err(study_tool_not_found());
    }

    tracing::info!(target: TRACING_TARGET, "Study tool deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_study_tool_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete study tool")
        .description("Permanently removes the study tool. Its share link stops resolving.")
        .response::<204, ()>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

fn study_tool_not_found() -> Error<'static> {
    ErrorKind::NotFound
        .with_message("Study tool not found")
        .with_resource("study_tool")
}

/// Returns a [`Router`] with all study tool routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/study-tools/{studyToolId}/",
            get_with(read_study_tool, read_study_tool_docs)
                .patch_with(update_study_tool, update_study_tool_docs)
                .delete_with(delete_study_tool, delete_study_tool_docs),
        )
        .with_path_items(|item| item.tag("Study Tools"))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;

    use crate::handler::test::create_test_server_with_config;
    use crate::service::ServiceConfig;

    const STUDY_TOOL: &str = "/study-tools/0190a9c4-6a1f-7b2e-9d3c-1f2e3d4c5b6a/";

    #[tokio::test]
    async fn delete_without_token_is_unauthorized() -> anyhow::Result<()> {
        let config = ServiceConfig::builder().with_admin_token("s3cret").build()?;
        let server = create_test_server_with_config(&config, |_| super::routes()).await?;

        let response = server.delete(STUDY_TOOL).await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    async fn delete_with_wrong_token_is_unauthorized() -> anyhow::Result<()> {
        let config = ServiceConfig::builder().with_admin_token("s3cret").build()?;
        let server = create_test_server_with_config(&config, |_| super::routes()).await?;

        let response = server
            .delete(STUDY_TOOL)
            .authorization_bearer("guess")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
