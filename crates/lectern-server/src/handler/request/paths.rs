//! Path parameter types for HTTP handlers.

use lectern_core::ContentKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Path parameters for semester operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemesterPathParams {
    /// Unique identifier of the semester.
    pub semester_id: Uuid,
}

/// Path parameters for course operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoursePathParams {
    /// Unique identifier of the course.
    pub course_id: Uuid,
}

/// Path parameters for topic operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicPathParams {
    /// Unique identifier of the topic.
    pub topic_id: Uuid,
}

/// Path parameters for slide operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlidePathParams {
    /// Unique identifier of the slide or document.
    pub slide_id: Uuid,
}

/// Path parameters for video operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoPathParams {
    /// Unique identifier of the video.
    pub video_id: Uuid,
}

/// Path parameters for study tool operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyToolPathParams {
    /// Unique identifier of the study tool or syllabus.
    pub study_tool_id: Uuid,
}

/// Path parameters for the public content lookup.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentPathParams {
    /// Content kind, e.g. `video` or `study-tool`.
    pub kind: ContentKind,
    /// Unique identifier of the content row.
    pub content_id: Uuid,
}
