//! Study tool kind enumeration.

use diesel_derive_enum::DbEnum;
use lectern_core::ContentKind;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of material stored in the `study_tools` table.
///
/// Corresponds to the `STUDY_TOOL_KIND` PostgreSQL enum. Both kinds share
/// the `/study-tool/{id}` link.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::StudyToolKind"]
pub enum StudyToolKind {
    /// Flashcards, quizzes and similar practice material
    #[db_rename = "study-tool"]
    #[serde(rename = "study-tool")]
    #[strum(serialize = "study-tool")]
    #[default]
    StudyTool,

    /// Course syllabus
    #[db_rename = "syllabus"]
    #[serde(rename = "syllabus")]
    #[strum(serialize = "syllabus")]
    Syllabus,
}

impl From<StudyToolKind> for ContentKind {
    fn from(value: StudyToolKind) -> Self {
        match value {
            StudyToolKind::StudyTool => ContentKind::StudyTool,
            StudyToolKind::Syllabus => ContentKind::Syllabus,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn converts_to_content_kind() {
        assert_eq!(
            ContentKind::from(StudyToolKind::StudyTool),
            ContentKind::StudyTool
        );
        assert_eq!(
            ContentKind::from(StudyToolKind::Syllabus),
            ContentKind::Syllabus
        );
    }

    #[test]
    fn string_forms_match_share_names() {
        assert_eq!(StudyToolKind::StudyTool.to_string(), "study-tool");
        assert_eq!(
            StudyToolKind::from_str("syllabus").ok(),
            Some(StudyToolKind::Syllabus)
        );
    }
}
