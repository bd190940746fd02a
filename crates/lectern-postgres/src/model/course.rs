//! Course model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::courses;

/// Course taught during a semester.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Course {
    /// Unique course identifier.
    pub id: Uuid,
    /// Semester the course belongs to.
    pub semester_id: Uuid,
    /// Short course code, unique within the semester (e.g. "CS101").
    pub code: String,
    /// Display title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Timestamp when the course was created.
    pub created_at: Timestamp,
    /// Timestamp when the course was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new course.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCourse {
    pub semester_id: Uuid,
    pub code: String,
    pub title: String,
    pub description: String,
}

/// Data for updating a course.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateCourse {
    pub code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}
