//! Study tool and syllabus model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use lectern_core::{ContentKind, ContentRecord};
use uuid::Uuid;

use crate::schema::study_tools;
use crate::types::StudyToolKind;

/// Study tool or syllabus attached to a course.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = study_tools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudyTool {
    /// Unique study tool identifier.
    pub id: Uuid,
    /// Course the study tool belongs to.
    pub course_id: Uuid,
    /// Display title.
    pub title: String,
    /// Location of the material.
    pub url: String,
    /// Free-form description.
    pub description: String,
    /// Study tool or syllabus.
    pub tool_kind: StudyToolKind,
    /// Timestamp when the study tool was created.
    pub created_at: Timestamp,
    /// Timestamp when the study tool was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new study tool.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = study_tools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewStudyTool {
    pub course_id: Uuid,
    pub title: String,
    pub url: String,
    pub description: String,
    pub tool_kind: StudyToolKind,
}

/// Data for updating a study tool.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = study_tools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateStudyTool {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub tool_kind: Option<StudyToolKind>,
}

impl StudyTool {
    /// Returns the fine-grained content kind of this row.
    #[inline]
    pub fn content_kind(&self) -> ContentKind {
        self.tool_kind.into()
    }

    /// Returns the public share path of this study tool.
    pub fn share_path(&self) -> String {
        lectern_core::encode(self.content_kind(), &self.id.to_string())
    }
}

impl From<StudyTool> for ContentRecord {
    fn from(tool: StudyTool) -> Self {
        Self {
            kind: tool.content_kind(),
            id: tool.id.to_string(),
            title: tool.title,
            url: tool.url,
            description: tool.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllabus_shares_the_study_tool_bucket() {
        let now = jiff::Timestamp::now();
        let tool = StudyTool {
            id: Uuid::nil(),
            course_id: Uuid::nil(),
            title: "CS101 syllabus".to_owned(),
            url: "https://cdn.example.com/cs101.pdf".to_owned(),
            description: String::new(),
            tool_kind: StudyToolKind::Syllabus,
            created_at: now.into(),
            updated_at: now.into(),
        };

        assert_eq!(
            tool.share_path(),
            "/study-tool/00000000-0000-0000-0000-000000000000"
        );

        let record = ContentRecord::from(tool);
        assert_eq!(record.kind, ContentKind::Syllabus);
        assert_eq!(record.title, "CS101 syllabus");
    }
}
