//! Study tool repository.

use std::future::Future;

use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewStudyTool, StudyTool, UpdateStudyTool};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for study tool database operations.
pub trait StudyToolRepository {
    /// Creates a new study tool.
    ///
    /// A missing course surfaces as a foreign key violation.
    fn create_study_tool(
        &mut self,
        study_tool: NewStudyTool,
    ) -> impl Future<Output = PgResult<StudyTool>> + Send;

    /// Finds a study tool by ID.
    fn find_study_tool_by_id(
        &mut self,
        study_tool_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<StudyTool>>> + Send;

    /// Applies partial changes, returning `None` if the row does not exist.
    fn update_study_tool(
        &mut self,
        study_tool_id: Uuid,
        changes: UpdateStudyTool,
    ) -> impl Future<Output = PgResult<Option<StudyTool>>> + Send;

    /// Deletes a study tool, returning `false` if nothing was deleted.
    fn delete_study_tool(
        &mut self,
        study_tool_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists the study tools and syllabi of a course.
    fn list_course_study_tools(
        &mut self,
        parent_course_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<StudyTool>>> + Send;
}

impl StudyToolRepository for PgConnection {
    async fn create_study_tool(&mut self, study_tool: NewStudyTool) -> PgResult<StudyTool> {
        use schema::study_tools;

        let study_tool = diesel::insert_into(study_tools::table)
            .values(&study_tool)
            .returning(StudyTool::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(study_tool)
    }

    async fn find_study_tool_by_id(&mut self, study_tool_id: Uuid) -> PgResult<Option<StudyTool>> {
        use schema::study_tools::dsl::*;

        let study_tool = study_tools
            .filter(id.eq(study_tool_id))
            .select(StudyTool::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(study_tool)
    }

    async fn update_study_tool(
        &mut self,
        study_tool_id: Uuid,
        changes: UpdateStudyTool,
    ) -> PgResult<Option<StudyTool>> {
        use schema::study_tools::dsl::*;

        let study_tool = diesel::update(study_tools)
            .filter(id.eq(study_tool_id))
            .set((&changes, updated_at.eq(now)))
            .returning(StudyTool::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(study_tool)
    }

    async fn delete_study_tool(&mut self, study_tool_id: Uuid) -> PgResult<bool> {
        use schema::study_tools::dsl::*;

        let deleted = diesel::delete(study_tools.filter(id.eq(study_tool_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn list_course_study_tools(
        &mut self,
        parent_course_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<StudyTool>> {
        use schema::study_tools::dsl::*;

        let study_tool_list = study_tools
            .filter(course_id.eq(parent_course_id))
            .select(StudyTool::as_select())
            .order((tool_kind.asc(), created_at.asc()))
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(study_tool_list)
    }
}
