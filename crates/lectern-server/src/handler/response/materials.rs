//! Study material response types.
//!
//! Every material carries the share path that links to it.

use jiff::Timestamp;
use lectern_postgres::model;
use lectern_postgres::types::{SlideKind, StudyToolKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Page;

/// Slide or document response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// ID of the slide.
    pub slide_id: Uuid,
    /// ID of the topic the slide belongs to.
    pub topic_id: Uuid,
    /// Display title.
    pub title: String,
    /// Location of the file.
    pub url: String,
    /// Description of the slide.
    pub description: String,
    /// Slide deck or document.
    pub kind: SlideKind,
    /// Public share path, e.g. `/slide/{id}`.
    pub share_path: String,
    /// Timestamp when the slide was created.
    pub created_at: Timestamp,
    /// Timestamp when the slide was last updated.
    pub updated_at: Timestamp,
}

impl Slide {
    /// Creates a new instance of [`Slide`] from the database model.
    pub fn from_model(slide: model::Slide) -> Self {
        let share_path = slide.share_path();
        Self {
            slide_id: slide.id,
            topic_id: slide.topic_id,
            title: slide.title,
            url: slide.url,
            description: slide.description,
            kind: slide.slide_kind,
            share_path,
            created_at: slide.created_at.into(),
            updated_at: slide.updated_at.into(),
        }
    }
}

/// Video response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// ID of the video.
    pub video_id: Uuid,
    /// ID of the topic the video belongs to.
    pub topic_id: Uuid,
    /// Display title.
    pub title: String,
    /// Location of the recording.
    pub url: String,
    /// Description of the video.
    pub description: String,
    /// Length of the recording in seconds.
    pub duration_secs: Option<i32>,
    /// Public share path, e.g. `/video/{id}`.
    pub share_path: String,
    /// Timestamp when the video was created.
    pub created_at: Timestamp,
    /// Timestamp when the video was last updated.
    pub updated_at: Timestamp,
}

impl Video {
    /// Creates a new instance of [`Video`] from the database model.
    pub fn from_model(video: model::Video) -> Self {
        let share_path = video.share_path();
        Self {
            video_id: video.id,
            topic_id: video.topic_id,
            title: video.title,
            url: video.url,
            description: video.description,
            duration_secs: video.duration_secs,
            share_path,
            created_at: video.created_at.into(),
            updated_at: video.updated_at.into(),
        }
    }
}

/// Study tool or syllabus response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyTool {
    /// ID of the study tool.
    pub study_tool_id: Uuid,
    /// ID of the course the study tool belongs to.
    pub course_id: Uuid,
    /// Display title.
    pub title: String,
    /// Location of the tool.
    pub url: String,
    /// Description of the study tool.
    pub description: String,
    /// Study tool or syllabus.
    pub kind: StudyToolKind,
    /// Public share path, e.g. `/study-tool/{id}`.
    pub share_path: String,
    /// Timestamp when the study tool was created.
    pub created_at: Timestamp,
    /// Timestamp when the study tool was last updated.
    pub updated_at: Timestamp,
}

impl StudyTool {
    /// Creates a new instance of [`StudyTool`] from the database model.
    pub fn from_model(study_tool: model::StudyTool) -> Self {
        let share_path = study_tool.share_path();
        Self {
            study_tool_id: study_tool.id,
            course_id: study_tool.course_id,
            title: study_tool.title,
            url: study_tool.url,
            description: study_tool.description,
            kind: study_tool.tool_kind,
            share_path,
            created_at: study_tool.created_at.into(),
            updated_at: study_tool.updated_at.into(),
        }
    }
}

/// Paginated list of slides.
pub type SlidesPage = Page<Slide>;

/// Paginated list of videos.
pub type VideosPage = Page<Video>;

/// Paginated list of study tools.
pub type StudyToolsPage = Page<StudyTool>;
