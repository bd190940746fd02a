//! Database enumeration types for type-safe queries.
//!
//! Each enumeration corresponds to a PostgreSQL ENUM type and converts into
//! the shared [`ContentKind`] used by share links.
//!
//! [`ContentKind`]: lectern_core::ContentKind

mod slide_kind;
mod study_tool_kind;

pub use slide_kind::SlideKind;
pub use study_tool_kind::StudyToolKind;
