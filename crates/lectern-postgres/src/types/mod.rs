//! Contains constraints, enumerations and other custom types.

mod constraints;
mod enums;
mod pagination;

pub use constraints::{
    ConstraintCategory, ConstraintViolation, CourseConstraints, SemesterConstraints,
    SlideConstraints, StudyToolConstraints, TopicConstraints, VideoConstraints,
};
pub use enums::{SlideKind, StudyToolKind};
pub use pagination::{MAX_LIMIT, OffsetPagination};
