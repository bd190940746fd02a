//! Study tools table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// `study_tools` table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum StudyToolConstraints {
    // Study tool validation constraints
    #[strum(serialize = "study_tools_title_length")]
    TitleLength,
    #[strum(serialize = "study_tools_url_not_empty")]
    UrlNotEmpty,

    // Study tool foreign key constraints
    #[strum(serialize = "study_tools_course_id_fkey")]
    CourseReference,

    // Study tool chronological constraints
    #[strum(serialize = "study_tools_updated_after_created")]
    UpdatedAfterCreated,
}

impl StudyToolConstraints {
    /// Creates a new [`StudyToolConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            StudyToolConstraints::TitleLength
            | StudyToolConstraints::UrlNotEmpty => ConstraintCategory::Validation,

            StudyToolConstraints::CourseReference => ConstraintCategory::Reference,

            StudyToolConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
        }
    }
}

impl From<StudyToolConstraints> for String {
    #[inline]
    fn from(val: StudyToolConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for StudyToolConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
