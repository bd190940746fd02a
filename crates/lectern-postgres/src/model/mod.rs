//! Database models for the catalogue tables.
//!
//! Every table has a `Queryable + Selectable` record, an `Insertable` `New*`
//! struct and an `AsChangeset` `Update*` struct.

mod course;
mod semester;
mod slide;
mod study_tool;
mod topic;
mod video;

pub use course::{Course, NewCourse, UpdateCourse};
pub use semester::{NewSemester, Semester, UpdateSemester};
pub use slide::{NewSlide, Slide, UpdateSlide};
pub use study_tool::{NewStudyTool, StudyTool, UpdateStudyTool};
pub use topic::{NewTopic, Topic, UpdateTopic};
pub use video::{NewVideo, UpdateVideo, Video};
