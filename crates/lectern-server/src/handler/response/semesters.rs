//! Semester response types.

use jiff::Timestamp;
use lectern_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Page;

/// Semester response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    /// ID of the semester.
    pub semester_id: Uuid,
    /// Display title of the semester.
    pub title: String,
    /// Description of the semester.
    pub description: String,
    /// Start of teaching.
    pub starts_at: Option<Timestamp>,
    /// End of teaching.
    pub ends_at: Option<Timestamp>,
    /// Whether the semester is running right now.
    pub in_session: bool,
    /// Timestamp when the semester was created.
    pub created_at: Timestamp,
    /// Timestamp when the semester was last updated.
    pub updated_at: Timestamp,
}

impl Semester {
    /// Creates a new instance of [`Semester`] from the database model.
    pub fn from_model(semester: model::Semester) -> Self {
        let in_session = semester.is_in_session(Timestamp::now());
        Self {
            semester_id: semester.id,
            title: semester.title,
            description: semester.description,
            starts_at: semester.starts_at.map(Into::into),
            ends_at: semester.ends_at.map(Into::into),
            in_session,
            created_at: semester.created_at.into(),
            updated_at: semester.updated_at.into(),
        }
    }
}

/// Paginated list of semesters.
pub type SemestersPage = Page<Semester>;
