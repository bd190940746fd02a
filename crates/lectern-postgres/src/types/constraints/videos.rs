//! Videos table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// `videos` table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum VideoConstraints {
    // Video validation constraints
    #[strum(serialize = "videos_title_length")]
    TitleLength,
    #[strum(serialize = "videos_url_not_empty")]
    UrlNotEmpty,
    #[strum(serialize = "videos_duration_secs_min")]
    DurationMin,

    // Video foreign key constraints
    #[strum(serialize = "videos_topic_id_fkey")]
    TopicReference,

    // Video chronological constraints
    #[strum(serialize = "videos_updated_after_created")]
    UpdatedAfterCreated,
}

impl VideoConstraints {
    /// Creates a new [`VideoConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            VideoConstraints::TitleLength
            | VideoConstraints::UrlNotEmpty
            | VideoConstraints::DurationMin => ConstraintCategory::Validation,

            VideoConstraints::TopicReference => ConstraintCategory::Reference,

            VideoConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
        }
    }
}

impl From<VideoConstraints> for String {
    #[inline]
    fn from(val: VideoConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for VideoConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
