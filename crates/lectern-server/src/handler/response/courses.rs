//! Course response types.

use jiff::Timestamp;
use lectern_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Page;

/// Course response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// ID of the course.
    pub course_id: Uuid,
    /// ID of the semester the course runs in.
    pub semester_id: Uuid,
    /// Course code, e.g. `CS-101`.
    pub code: String,
    /// Display title of the course.
    pub title: String,
    /// Description of the course.
    pub description: String,
    /// Timestamp when the course was created.
    pub created_at: Timestamp,
    /// Timestamp when the course was last updated.
    pub updated_at: Timestamp,
}

impl Course {
    /// Creates a new instance of [`Course`] from the database model.
    pub fn from_model(course: model::Course) -> Self {
        Self {
            course_id: course.id,
            semester_id: course.semester_id,
            code: course.code,
            title: course.title,
            description: course.description,
            created_at: course.created_at.into(),
            updated_at: course.updated_at.into(),
        }
    }
}

/// Paginated list of courses.
pub type CoursesPage = Page<Course>;
