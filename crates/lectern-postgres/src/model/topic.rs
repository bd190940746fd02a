//! Course topic model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::topics;

/// Ordered topic within a course; slides and videos hang off topics.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Topic {
    /// Unique topic identifier.
    pub id: Uuid,
    /// Course the topic belongs to.
    pub course_id: Uuid,
    /// Display title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Zero-based position within the course.
    pub position: i32,
    /// Timestamp when the topic was created.
    pub created_at: Timestamp,
    /// Timestamp when the topic was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new topic.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTopic {
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub position: i32,
}

/// Data for updating a topic.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateTopic {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<i32>,
}
