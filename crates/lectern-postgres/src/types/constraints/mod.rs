//! Database constraint violations grouped by table.

mod courses;
mod semesters;
mod slides;
mod study_tools;
mod topics;
mod videos;

use std::fmt;

pub use courses::CourseConstraints;
pub use semesters::SemesterConstraints;
use serde::{Deserialize, Serialize};
pub use slides::SlideConstraints;
pub use study_tools::StudyToolConstraints;
pub use topics::TopicConstraints;
pub use videos::VideoConstraints;

/// Any known constraint of the catalogue schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConstraintViolation {
    Semester(SemesterConstraints),
    Course(CourseConstraints),
    Topic(TopicConstraints),
    Slide(SlideConstraints),
    Video(VideoConstraints),
    StudyTool(StudyToolConstraints),
}

/// Categories of database constraint violations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintCategory {
    /// Data validation constraints (format, length, range checks).
    Validation,
    /// Chronological integrity constraints (timestamp relationships).
    Chronological,
    /// Uniqueness constraints (unique indexes).
    Uniqueness,
    /// Foreign key constraints (the referenced parent row must exist).
    Reference,
}

impl ConstraintViolation {
    /// Creates a new [`ConstraintViolation`] from the constraint name.
    ///
    /// ```
    /// use lectern_postgres::types::ConstraintViolation;
    ///
    /// let violation = ConstraintViolation::new("courses_semester_id_fkey");
    /// assert!(violation.is_some());
    ///
    /// let unknown = ConstraintViolation::new("unknown_constraint");
    /// assert!(unknown.is_none());
    /// ```
    pub fn new(constraint: &str) -> Option<Self> {
        if constraint.starts_with("semesters_") {
            SemesterConstraints::new(constraint).map(Self::Semester)
        } else if constraint.starts_with("courses_") {
            CourseConstraints::new(constraint).map(Self::Course)
        } else if constraint.starts_with("topics_") {
            TopicConstraints::new(constraint).map(Self::Topic)
        } else if constraint.starts_with("slides_") {
            SlideConstraints::new(constraint).map(Self::Slide)
        } else if constraint.starts_with("videos_") {
            VideoConstraints::new(constraint).map(Self::Video)
        } else if constraint.starts_with("study_tools_") {
            StudyToolConstraints::new(constraint).map(Self::StudyTool)
        } else {
            None
        }
    }

    /// Returns the table name associated with this constraint.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConstraintViolation::Semester(_) => "semesters",
            ConstraintViolation::Course(_) => "courses",
            ConstraintViolation::Topic(_) => "topics",
            ConstraintViolation::Slide(_) => "slides",
            ConstraintViolation::Video(_) => "videos",
            ConstraintViolation::StudyTool(_) => "study_tools",
        }
    }

    /// Returns the category of this constraint violation.
    pub fn constraint_category(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::Semester(c) => c.categorize(),
            ConstraintViolation::Course(c) => c.categorize(),
            ConstraintViolation::Topic(c) => c.categorize(),
            ConstraintViolation::Slide(c) => c.categorize(),
            ConstraintViolation::Video(c) => c.categorize(),
            ConstraintViolation::StudyTool(c) => c.categorize(),
        }
    }

    /// Returns the underlying constraint name as used in the database.
    #[inline]
    pub fn constraint_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Semester(c) => write!(f, "{}", c),
            ConstraintViolation::Course(c) => write!(f, "{}", c),
            ConstraintViolation::Topic(c) => write!(f, "{}", c),
            ConstraintViolation::Slide(c) => write!(f, "{}", c),
            ConstraintViolation::Video(c) => write!(f, "{}", c),
            ConstraintViolation::StudyTool(c) => write!(f, "{}", c),
        }
    }
}

impl From<ConstraintViolation> for String {
    #[inline]
    fn from(val: ConstraintViolation) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ConstraintViolation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| format!("Unknown constraint: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_known_constraints() {
        assert_eq!(
            ConstraintViolation::new("courses_semester_code_unique_idx"),
            Some(ConstraintViolation::Course(CourseConstraints::CodeUnique))
        );
        assert_eq!(
            ConstraintViolation::new("study_tools_course_id_fkey"),
            Some(ConstraintViolation::StudyTool(
                StudyToolConstraints::CourseReference
            ))
        );
        assert_eq!(ConstraintViolation::new("unknown_constraint"), None);
        assert_eq!(ConstraintViolation::new("slides_unknown"), None);
    }

    #[test]
    fn every_constraint_round_trips_through_its_name() {
        let all = SemesterConstraints::iter()
            .map(ConstraintViolation::Semester)
            .chain(CourseConstraints::iter().map(ConstraintViolation::Course))
            .chain(TopicConstraints::iter().map(ConstraintViolation::Topic))
            .chain(SlideConstraints::iter().map(ConstraintViolation::Slide))
            .chain(VideoConstraints::iter().map(ConstraintViolation::Video))
            .chain(StudyToolConstraints::iter().map(ConstraintViolation::StudyTool));

        for violation in all {
            let name = violation.constraint_name();
            assert!(name.starts_with(violation.table_name()));
            assert_eq!(ConstraintViolation::new(&name), Some(violation));
        }
    }

    #[test]
    fn categorizes_constraints() {
        let violation = ConstraintViolation::Topic(TopicConstraints::CourseReference);
        assert_eq!(violation.constraint_category(), ConstraintCategory::Reference);

        let violation = ConstraintViolation::Semester(SemesterConstraints::EndsAfterStarts);
        assert_eq!(
            violation.constraint_category(),
            ConstraintCategory::Chronological
        );

        let violation = ConstraintViolation::Video(VideoConstraints::DurationMin);
        assert_eq!(violation.constraint_category(), ConstraintCategory::Validation);
    }

    #[test]
    fn serializes_as_constraint_name() -> Result<(), serde_json::Error> {
        let violation = ConstraintViolation::Slide(SlideConstraints::TopicReference);
        assert_eq!(
            serde_json::to_string(&violation)?,
            "\"slides_topic_id_fkey\""
        );
        Ok(())
    }
}
