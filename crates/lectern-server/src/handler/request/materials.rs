//! Slide, video and study tool request types.

use lectern_postgres::model::{
    NewSlide, NewStudyTool, NewVideo, UpdateSlide as UpdateSlideModel,
    UpdateStudyTool as UpdateStudyToolModel, UpdateVideo as UpdateVideoModel,
};
use lectern_postgres::types::{SlideKind, StudyToolKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validations::MAX_DESCRIPTION_LEN;

/// Request payload for attaching a slide deck or document to a topic.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlide {
    /// Display title (1-256 characters).
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    /// Location of the file.
    #[validate(url)]
    pub url: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    /// Either `slide` (default) or `document`.
    #[serde(default)]
    pub kind: SlideKind,
}

impl CreateSlide {
    #[inline]
    pub fn into_model(self, topic_id: Uuid) -> NewSlide {
        NewSlide {
            topic_id,
            title: self.title,
            url: self.url,
            description: self.description,
            slide_kind: self.kind,
        }
    }
}

/// Request payload for updating a slide or document.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlide {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    pub kind: Option<SlideKind>,
}

impl UpdateSlide {
    pub fn into_model(self) -> UpdateSlideModel {
        UpdateSlideModel {
            title: self.title,
            url: self.url,
            description: self.description,
            slide_kind: self.kind,
        }
    }
}

/// Request payload for attaching a video to a topic.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideo {
    /// Display title (1-256 characters).
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    /// Location of the video.
    #[validate(url)]
    pub url: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    /// Running time in seconds.
    #[validate(range(min = 0))]
    pub duration_secs: Option<i32>,
}

impl CreateVideo {
    #[inline]
    pub fn into_model(self, topic_id: Uuid) -> NewVideo {
        NewVideo {
            topic_id,
            title: self.title,
            url: self.url,
            description: self.description,
            duration_secs: self.duration_secs,
        }
    }
}

/// Request payload for updating a video.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideo {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub duration_secs: Option<i32>,
}

impl UpdateVideo {
    pub fn into_model(self) -> UpdateVideoModel {
        UpdateVideoModel {
            title: self.title,
            url: self.url,
            description: self.description,
            duration_secs: self.duration_secs.map(Some),
        }
    }
}

/// Request payload for attaching a study tool or syllabus to a course.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudyTool {
    /// Display title (1-256 characters).
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    /// Location of the tool.
    #[validate(url)]
    pub url: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    /// Either `study-tool` (default) or `syllabus`.
    #[serde(default)]
    pub kind: StudyToolKind,
}

impl CreateStudyTool {
    #[inline]
    pub fn into_model(self, course_id: Uuid) -> NewStudyTool {
        NewStudyTool {
            course_id,
            title: self.title,
            url: self.url,
            description: self.description,
            tool_kind: self.kind,
        }
    }
}

/// Request payload for updating a study tool or syllabus.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudyTool {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    pub kind: Option<StudyToolKind>,
}

impl UpdateStudyTool {
    pub fn into_model(self) -> UpdateStudyToolModel {
        UpdateStudyToolModel {
            title: self.title,
            url: self.url,
            description: self.description,
            tool_kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_kind_defaults_to_slide() -> anyhow::Result<()> {
        let request: CreateSlide = serde_json::from_str(
            r#"{"title":"Week 1","url":"https://cdn.example.com/week1.pdf"}"#,
        )?;
        assert_eq!(request.kind, SlideKind::Slide);
        assert!(request.validate().is_ok());
        Ok(())
    }

    #[test]
    fn study_tool_kind_parses_syllabus() -> anyhow::Result<()> {
        let request: CreateStudyTool = serde_json::from_str(
            r#"{"title":"Syllabus","url":"https://example.com/s","kind":"syllabus"}"#,
        )?;
        assert_eq!(request.kind, StudyToolKind::Syllabus);
        Ok(())
    }

    #[test]
    fn rejects_invalid_url_and_negative_duration() {
        let request = CreateVideo {
            title: "Lecture".into(),
            url: "not a url".into(),
            duration_secs: Some(-1),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("url"));
        assert_eq!(fields.len(), 2);
    }
}
