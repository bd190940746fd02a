//! Courses table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// `courses` table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum CourseConstraints {
    // Course validation constraints
    #[strum(serialize = "courses_title_length")]
    TitleLength,
    #[strum(serialize = "courses_code_format")]
    CodeFormat,

    // Course uniqueness constraints
    #[strum(serialize = "courses_semester_code_unique_idx")]
    CodeUnique,

    // Course foreign key constraints
    #[strum(serialize = "courses_semester_id_fkey")]
    SemesterReference,

    // Course chronological constraints
    #[strum(serialize = "courses_updated_after_created")]
    UpdatedAfterCreated,
}

impl CourseConstraints {
    /// Creates a new [`CourseConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            CourseConstraints::TitleLength
            | CourseConstraints::CodeFormat => ConstraintCategory::Validation,

            CourseConstraints::CodeUnique => ConstraintCategory::Uniqueness,

            CourseConstraints::SemesterReference => ConstraintCategory::Reference,

            CourseConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
        }
    }
}

impl From<CourseConstraints> for String {
    #[inline]
    fn from(val: CourseConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for CourseConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
