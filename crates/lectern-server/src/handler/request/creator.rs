//! All-in-one creator request types.
//!
//! A single [`CreateCatalogue`] request describes a course together with its
//! topics and materials so the whole outline can be written in one
//! transaction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::validations::{MAX_DESCRIPTION_LEN, validation_error};
use super::{CreateCourse, CreateSemester, CreateSlide, CreateStudyTool, CreateTopic, CreateVideo};

/// Topic with its materials, as submitted to the creator.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatorTopic {
    /// Display title (1-128 characters).
    #[validate(length(min = 1, max = 128))]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    /// Position in the course outline; defaults to the index in `topics`.
    #[validate(range(min = 0))]
    pub position: Option<i32>,
    /// Slide decks and documents of the topic.
    #[serde(default)]
    #[validate(nested)]
    pub slides: Vec<CreateSlide>,
    /// Videos of the topic.
    #[serde(default)]
    #[validate(nested)]
    pub videos: Vec<CreateVideo>,
}

impl CreatorTopic {
    /// Splits the topic into its own create request and its materials.
    pub fn into_parts(self, index: usize) -> (CreateTopic, Vec<CreateSlide>, Vec<CreateVideo>) {
        let position = self
            .position
            .unwrap_or_else(|| i32::try_from(index).unwrap_or(i32::MAX));
        let topic = CreateTopic {
            title: self.title,
            description: self.description,
            position,
        };

        (topic, self.slides, self.videos)
    }
}

/// Request payload for the all-in-one creator.
///
/// Exactly one of `semesterId` (reuse an existing semester) and `semester`
/// (create a new one) must be given.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_semester_choice"))]
pub struct CreateCatalogue {
    /// Existing semester to add the course to.
    pub semester_id: Option<Uuid>,
    /// New semester to create for the course.
    #[validate(nested)]
    pub semester: Option<CreateSemester>,
    /// The course to create.
    #[validate(nested)]
    pub course: CreateCourse,
    /// Topics of the course, in outline order.
    #[serde(default)]
    #[validate(nested)]
    pub topics: Vec<CreatorTopic>,
    /// Study tools and syllabi of the course.
    #[serde(default)]
    #[validate(nested)]
    pub study_tools: Vec<CreateStudyTool>,
}

fn validate_semester_choice(request: &CreateCatalogue) -> Result<(), ValidationError> {
    match (&request.semester_id, &request.semester) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        (Some(_), Some(_)) => Err(validation_error(
            "semester_choice",
            "give either semesterId or semester, not both",
        )),
        (None, None) => Err(validation_error(
            "semester_choice",
            "either semesterId or semester is required",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> CreateCourse {
        CreateCourse {
            code: "CS 101".into(),
            title: "Intro to Computing".into(),
            description: String::new(),
        }
    }

    #[test]
    fn requires_exactly_one_semester_source() {
        let neither = CreateCatalogue {
            course: course(),
            ..Default::default()
        };
        assert!(neither.validate().is_err());

        let both = CreateCatalogue {
            semester_id: Some(Uuid::now_v7()),
            semester: Some(CreateSemester {
                title: "Fall 2026".into(),
                ..Default::default()
            }),
            course: course(),
            ..Default::default()
        };
        assert!(both.validate().is_err());

        let reuse = CreateCatalogue {
            semester_id: Some(Uuid::now_v7()),
            course: course(),
            ..Default::default()
        };
        assert!(reuse.validate().is_ok());
    }

    #[test]
    fn nested_material_errors_are_reported() {
        let request = CreateCatalogue {
            semester_id: Some(Uuid::now_v7()),
            course: course(),
            topics: vec![CreatorTopic {
                title: "Week 1".into(),
                slides: vec![CreateSlide {
                    title: String::new(),
                    url: "https://example.com/a.pdf".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("topics"));
    }

    #[test]
    fn topic_position_defaults_to_index() {
        let (topic, slides, videos) = CreatorTopic {
            title: "Week 3".into(),
            ..Default::default()
        }
        .into_parts(2);

        assert_eq!(topic.position, 2);
        assert!(slides.is_empty());
        assert!(videos.is_empty());
    }
}
