//! Topic request types.

use lectern_postgres::model::{NewTopic, UpdateTopic as UpdateTopicModel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validations::MAX_DESCRIPTION_LEN;

/// Request payload for creating a topic in a course.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopic {
    /// Display title (1-128 characters).
    #[validate(length(min = 1, max = 128))]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    /// Zero-based position in the course outline, unique per course.
    #[validate(range(min = 0))]
    pub position: i32,
}

impl CreateTopic {
    /// Converts this request into a [`NewTopic`] model.
    #[inline]
    pub fn into_model(self, course_id: Uuid) -> NewTopic {
        NewTopic {
            course_id,
            title: self.title,
            description: self.description,
            position: self.position,
        }
    }
}

/// Request payload for updating a topic.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopic {
    /// New title (1-128 characters).
    #[validate(length(min = 1, max = 128))]
    pub title: Option<String>,
    /// New description.
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    /// New position in the course outline.
    #[validate(range(min = 0))]
    pub position: Option<i32>,
}

impl UpdateTopic {
    pub fn into_model(self) -> UpdateTopicModel {
        UpdateTopicModel {
            title: self.title,
            description: self.description,
            position: self.position,
        }
    }
}
