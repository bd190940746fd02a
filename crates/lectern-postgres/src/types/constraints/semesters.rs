//! Semesters table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// `semesters` table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum SemesterConstraints {
    // Semester validation constraints
    #[strum(serialize = "semesters_title_length")]
    TitleLength,
    #[strum(serialize = "semesters_description_length_max")]
    DescriptionLengthMax,

    // Semester chronological constraints
    #[strum(serialize = "semesters_ends_after_starts")]
    EndsAfterStarts,
    #[strum(serialize = "semesters_updated_after_created")]
    UpdatedAfterCreated,
}

impl SemesterConstraints {
    /// Creates a new [`SemesterConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            SemesterConstraints::TitleLength
            | SemesterConstraints::DescriptionLengthMax => ConstraintCategory::Validation,

            SemesterConstraints::EndsAfterStarts
            | SemesterConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
        }
    }
}

impl From<SemesterConstraints> for String {
    #[inline]
    fn from(val: SemesterConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for SemesterConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
