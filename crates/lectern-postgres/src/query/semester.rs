//! Semester repository.

use std::future::Future;

use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewSemester, Semester, UpdateSemester};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for semester database operations.
pub trait SemesterRepository {
    /// Creates a new semester.
    fn create_semester(
        &mut self,
        semester: NewSemester,
    ) -> impl Future<Output = PgResult<Semester>> + Send;

    /// Finds a semester by ID.
    fn find_semester_by_id(
        &mut self,
        semester_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Semester>>> + Send;

    /// Applies partial changes, returning `None` if the semester does not exist.
    fn update_semester(
        &mut self,
        semester_id: Uuid,
        changes: UpdateSemester,
    ) -> impl Future<Output = PgResult<Option<Semester>>> + Send;

    /// Deletes a semester and, through cascading keys, its courses.
    ///
    /// Returns `false` if nothing was deleted.
    fn delete_semester(&mut self, semester_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists semesters, newest first.
    fn list_semesters(
        &mut self,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Semester>>> + Send;
}

impl SemesterRepository for PgConnection {
    async fn create_semester(&mut self, semester: NewSemester) -> PgResult<Semester> {
        use schema::semesters;

        let semester = diesel::insert_into(semesters::table)
            .values(&semester)
            .returning(Semester::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(semester)
    }

    async fn find_semester_by_id(&mut self, semester_id: Uuid) -> PgResult<Option<Semester>> {
        use schema::semesters::dsl::*;

        let semester = semesters
            .filter(id.eq(semester_id))
            .select(Semester::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(semester)
    }

    async fn update_semester(
        &mut self,
        semester_id: Uuid,
        changes: UpdateSemester,
    ) -> PgResult<Option<Semester>> {
        use schema::semesters::dsl::*;

        let semester = diesel::update(semesters)
            .filter(id.eq(semester_id))
            .set((&changes, updated_at.eq(now)))
            .returning(Semester::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(semester)
    }

    async fn delete_semester(&mut self, semester_id: Uuid) -> PgResult<bool> {
        use schema::semesters::dsl::*;

        let deleted = diesel::delete(semesters.filter(id.eq(semester_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn list_semesters(&mut self, pagination: OffsetPagination) -> PgResult<Vec<Semester>> {
        use schema::semesters::dsl::*;

        let semester_list = semesters
            .select(Semester::as_select())
            .order(created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(semester_list)
    }
}
