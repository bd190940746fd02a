//! Video model.

use std::time::Duration;

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use lectern_core::{ContentKind, ContentRecord};
use uuid::Uuid;

use crate::schema::videos;

/// Recorded video attached to a topic.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = videos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Video {
    /// Unique video identifier.
    pub id: Uuid,
    /// Topic the video belongs to.
    pub topic_id: Uuid,
    /// Display title.
    pub title: String,
    /// Location of the stream or file.
    pub url: String,
    /// Free-form description.
    pub description: String,
    /// Running time in seconds, if known.
    pub duration_secs: Option<i32>,
    /// Timestamp when the video was created.
    pub created_at: Timestamp,
    /// Timestamp when the video was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new video.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = videos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewVideo {
    pub topic_id: Uuid,
    pub title: String,
    pub url: String,
    pub description: String,
    pub duration_secs: Option<i32>,
}

/// Data for updating a video.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = videos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub duration_secs: Option<Option<i32>>,
}

impl Video {
    /// Returns the running time, ignoring negative values.
    pub fn duration(&self) -> Option<Duration> {
        self.duration_secs
            .and_then(|secs| u64::try_from(secs).ok())
            .map(Duration::from_secs)
    }

    /// Returns the public share path of this video.
    pub fn share_path(&self) -> String {
        lectern_core::encode(ContentKind::Video, &self.id.to_string())
    }
}

impl From<Video> for ContentRecord {
    fn from(video: Video) -> Self {
        Self {
            kind: ContentKind::Video,
            id: video.id.to_string(),
            title: video.title,
            url: video.url,
            description: video.description,
        }
    }
}
