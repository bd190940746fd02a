//! Academic semester model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::semesters;

/// Academic semester grouping a set of courses.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = semesters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Semester {
    /// Unique semester identifier.
    pub id: Uuid,
    /// Display title, e.g. "Fall 2026".
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// First day of teaching.
    pub starts_at: Option<Timestamp>,
    /// Last day of teaching.
    pub ends_at: Option<Timestamp>,
    /// Timestamp when the semester was created.
    pub created_at: Timestamp,
    /// Timestamp when the semester was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new semester.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = semesters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewSemester {
    pub title: String,
    pub description: String,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// Data for updating a semester.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = semesters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateSemester {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<Option<Timestamp>>,
    pub ends_at: Option<Option<Timestamp>>,
}

impl Semester {
    /// Returns whether `at` falls between the start and end dates.
    ///
    /// Open-ended bounds are treated as unbounded.
    pub fn is_in_session(&self, at: jiff::Timestamp) -> bool {
        let started = self
            .starts_at
            .is_none_or(|starts_at| jiff::Timestamp::from(starts_at) <= at);
        let not_ended = self
            .ends_at
            .is_none_or(|ends_at| at <= jiff::Timestamp::from(ends_at));
        started && not_ended
    }
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;

    use super::*;

    fn semester(starts_at: Option<jiff::Timestamp>, ends_at: Option<jiff::Timestamp>) -> Semester {
        let now = jiff::Timestamp::now();
        Semester {
            id: Uuid::now_v7(),
            title: "Fall 2026".to_owned(),
            description: String::new(),
            starts_at: starts_at.map(Into::into),
            ends_at: ends_at.map(Into::into),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn in_session_between_bounds() -> Result<(), jiff::Error> {
        let now = jiff::Timestamp::now();
        let start = now.checked_sub(24.hours())?;
        let end = now.checked_add(24.hours())?;

        assert!(semester(Some(start), Some(end)).is_in_session(now));
        assert!(!semester(Some(end), None).is_in_session(now));
        assert!(!semester(None, Some(start)).is_in_session(now));
        assert!(semester(None, None).is_in_session(now));
        Ok(())
    }
}
