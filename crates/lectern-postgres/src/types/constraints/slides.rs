//! Slides table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// `slides` table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum SlideConstraints {
    // Slide validation constraints
    #[strum(serialize = "slides_title_length")]
    TitleLength,
    #[strum(serialize = "slides_url_not_empty")]
    UrlNotEmpty,

    // Slide foreign key constraints
    #[strum(serialize = "slides_topic_id_fkey")]
    TopicReference,

    // Slide chronological constraints
    #[strum(serialize = "slides_updated_after_created")]
    UpdatedAfterCreated,
}

impl SlideConstraints {
    /// Creates a new [`SlideConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            SlideConstraints::TitleLength
            | SlideConstraints::UrlNotEmpty => ConstraintCategory::Validation,

            SlideConstraints::TopicReference => ConstraintCategory::Reference,

            SlideConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
        }
    }
}

impl From<SlideConstraints> for String {
    #[inline]
    fn from(val: SlideConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for SlideConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
