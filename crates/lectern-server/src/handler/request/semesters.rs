//! Semester request types.

use jiff::Timestamp;
use lectern_postgres::model::{NewSemester, UpdateSemester as UpdateSemesterModel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::validations::{MAX_DESCRIPTION_LEN, validate_date_order};

/// Request payload for creating a semester.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_dates"))]
pub struct CreateSemester {
    /// Display title, e.g. "Fall 2026" (1-128 characters).
    #[validate(length(min = 1, max = 128))]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    /// First day of teaching.
    pub starts_at: Option<Timestamp>,
    /// Last day of teaching.
    pub ends_at: Option<Timestamp>,
}

fn validate_create_dates(request: &CreateSemester) -> Result<(), ValidationError> {
    validate_date_order(request.starts_at, request.ends_at)
}

impl CreateSemester {
    /// Converts this request into a [`NewSemester`] model.
    #[inline]
    pub fn into_model(self) -> NewSemester {
        NewSemester {
            title: self.title,
            description: self.description,
            starts_at: self.starts_at.map(Into::into),
            ends_at: self.ends_at.map(Into::into),
        }
    }
}

/// Request payload for updating a semester.
///
/// Only provided fields are changed.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_dates"))]
pub struct UpdateSemester {
    /// New title (1-128 characters).
    #[validate(length(min = 1, max = 128))]
    pub title: Option<String>,
    /// New description.
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    /// New first day of teaching.
    pub starts_at: Option<Timestamp>,
    /// New last day of teaching.
    pub ends_at: Option<Timestamp>,
}

fn validate_update_dates(request: &UpdateSemester) -> Result<(), ValidationError> {
    validate_date_order(request.starts_at, request.ends_at)
}

impl UpdateSemester {
    pub fn into_model(self) -> UpdateSemesterModel {
        UpdateSemesterModel {
            title: self.title,
            description: self.description,
            starts_at: self.starts_at.map(|t| Some(t.into())),
            ends_at: self.ends_at.map(|t| Some(t.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;

    use super::*;

    #[test]
    fn rejects_reversed_dates() -> anyhow::Result<()> {
        let now = Timestamp::now();
        let request = CreateSemester {
            title: "Spring 2027".into(),
            starts_at: Some(now),
            ends_at: Some(now.checked_sub(1.hour())?),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
        Ok(())
    }

    #[test]
    fn rejects_empty_title() {
        let request = CreateSemester::default();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn update_leaves_missing_fields_untouched() {
        let model = UpdateSemester {
            title: Some("Fall".into()),
            ..Default::default()
        }
        .into_model();

        assert_eq!(model.title.as_deref(), Some("Fall"));
        assert!(model.description.is_none());
        assert!(model.starts_at.is_none());
    }
}
