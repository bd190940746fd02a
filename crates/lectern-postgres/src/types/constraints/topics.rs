//! Topics table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// `topics` table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum TopicConstraints {
    // Topic validation constraints
    #[strum(serialize = "topics_title_length")]
    TitleLength,
    #[strum(serialize = "topics_position_min")]
    PositionMin,

    // Topic uniqueness constraints
    #[strum(serialize = "topics_course_position_unique_idx")]
    PositionUnique,

    // Topic foreign key constraints
    #[strum(serialize = "topics_course_id_fkey")]
    CourseReference,

    // Topic chronological constraints
    #[strum(serialize = "topics_updated_after_created")]
    UpdatedAfterCreated,
}

impl TopicConstraints {
    /// Creates a new [`TopicConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            TopicConstraints::TitleLength
            | TopicConstraints::PositionMin => ConstraintCategory::Validation,

            TopicConstraints::PositionUnique => ConstraintCategory::Uniqueness,

            TopicConstraints::CourseReference => ConstraintCategory::Reference,

            TopicConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
        }
    }
}

impl From<TopicConstraints> for String {
    #[inline]
    fn from(val: TopicConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for TopicConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
