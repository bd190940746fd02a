//! Course repository.

use std::future::Future;

use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewCourse, Course, UpdateCourse};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for course database operations.
pub trait CourseRepository {
    /// Creates a new course.
    ///
    /// A missing semester surfaces as a foreign key violation.
    fn create_course(&mut self, course: NewCourse) -> impl Future<Output = PgResult<Course>> + Send;

    /// Finds a course by ID.
    fn find_course_by_id(
        &mut self,
        course_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Course>>> + Send;

    /// Applies partial changes, returning `None` if the row does not exist.
    fn update_course(
        &mut self,
        course_id: Uuid,
        changes: UpdateCourse,
    ) -> impl Future<Output = PgResult<Option<Course>>> + Send;

    /// Deletes a course, returning `false` if nothing was deleted.
    fn delete_course(&mut self, course_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists the courses of a semester ordered by code.
    fn list_semester_courses(
        &mut self,
        parent_semester_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Course>>> + Send;
}

impl CourseRepository for PgConnection {
    async fn create_course(&mut self, course: NewCourse) -> PgResult<Course> {
        use schema::courses;

        let course = diesel::insert_into(courses::table)
            .values(&course)
            .returning(Course::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(course)
    }

    async fn find_course_by_id(&mut self, course_id: Uuid) -> PgResult<Option<Course>> {
        use schema::courses::dsl::*;

        let course = courses
            .filter(id.eq(course_id))
            .select(Course::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(course)
    }

    async fn update_course(
        &mut self,
        course_id: Uuid,
        changes: UpdateCourse,
    ) -> PgResult<Option<Course>> {
        use schema::courses::dsl::*;

        let course = diesel::update(courses)
            .filter(id.eq(course_id))
            .set((&changes, updated_at.eq(now)))
            .returning(Course::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(course)
    }

    async fn delete_course(&mut self, course_id: Uuid) -> PgResult<bool> {
        use schema::courses::dsl::*;

        let deleted = diesel::delete(courses.filter(id.eq(course_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn list_semester_courses(
        &mut self,
        parent_semester_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Course>> {
        use schema::courses::dsl::*;

        let course_list = courses
            .filter(semester_id.eq(parent_semester_id))
            .select(Course::as_select())
            .order(code.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(course_list)
    }
}
