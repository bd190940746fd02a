//! Course request types.

use lectern_postgres::model::{NewCourse, UpdateCourse as UpdateCourseModel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validations::{MAX_DESCRIPTION_LEN, validate_course_code};

/// Request payload for creating a course in a semester.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    /// Course code, unique within the semester, e.g. "CS 101".
    #[validate(length(min = 1, max = 32), custom(function = "validate_course_code"))]
    pub code: String,
    /// Display title (1-128 characters).
    #[validate(length(min = 1, max = 128))]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: String,
}

impl CreateCourse {
    /// Converts this request into a [`NewCourse`] model.
    ///
    /// # Arguments
    ///
    /// * `semester_id` - The semester the course belongs to.
    #[inline]
    pub fn into_model(self, semester_id: Uuid) -> NewCourse {
        NewCourse {
            semester_id,
            code: self.code,
            title: self.title,
            description: self.description,
        }
    }
}

/// Request payload for updating a course.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    /// New course code.
    #[validate(length(min = 1, max = 32), custom(function = "validate_course_code"))]
    pub code: Option<String>,
    /// New title (1-128 characters).
    #[validate(length(min = 1, max = 128))]
    pub title: Option<String>,
    /// New description.
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
}

impl UpdateCourse {
    pub fn into_model(self) -> UpdateCourseModel {
        UpdateCourseModel {
            code: self.code,
            title: self.title,
            description: self.description,
        }
    }
}
