//! Topic response types.

use jiff::Timestamp;
use lectern_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Page;

/// Topic response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// ID of the topic.
    pub topic_id: Uuid,
    /// ID of the course the topic belongs to.
    pub course_id: Uuid,
    /// Display title of the topic.
    pub title: String,
    /// Description of the topic.
    pub description: String,
    /// Position of the topic within the course.
    pub position: i32,
    /// Timestamp when the topic was created.
    pub created_at: Timestamp,
    /// Timestamp when the topic was last updated.
    pub updated_at: Timestamp,
}

impl Topic {
    /// Creates a new instance of [`Topic`] from the database model.
    pub fn from_model(topic: model::Topic) -> Self {
        Self {
            topic_id: topic.id,
            course_id: topic.course_id,
            title: topic.title,
            description: topic.description,
            position: topic.position,
            created_at: topic.created_at.into(),
            updated_at: topic.updated_at.into(),
        }
    }
}

/// Paginated list of topics.
pub type TopicsPage = Page<Topic>;
