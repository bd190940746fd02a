//! Repository traits implemented for [`PgConnection`].
//!
//! Every query selects into a typed record; a row that does not fit the
//! record fails the query instead of returning partial data.
//!
//! [`PgConnection`]: crate::PgConnection

mod content;
mod course;
mod semester;
mod slide;
mod study_tool;
mod topic;
mod video;

pub use content::ContentRepository;
pub use course::CourseRepository;
pub use semester::SemesterRepository;
pub use slide::SlideRepository;
pub use study_tool::StudyToolRepository;
pub use topic::TopicRepository;
pub use video::VideoRepository;
