//! Catalogue constraint violation error handlers.

use lectern_postgres::types::{
    CourseConstraints, SemesterConstraints, SlideConstraints, StudyToolConstraints,
    TopicConstraints, VideoConstraints,
};

use crate::handler::{Error, ErrorKind};

impl From<SemesterConstraints> for Error<'static> {
    fn from(c: SemesterConstraints) -> Self {
        let error = match c {
            SemesterConstraints::TitleLength => ErrorKind::BadRequest
                .with_message("Semester title must be between 1 and 128 characters long"),
            SemesterConstraints::DescriptionLengthMax => {
                ErrorKind::BadRequest.with_message("Semester description is too long")
            }
            SemesterConstraints::EndsAfterStarts => {
                ErrorKind::BadRequest.with_message("Semester must end after it starts")
            }
            SemesterConstraints::UpdatedAfterCreated => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("semester")
    }
}

impl From<CourseConstraints> for Error<'static> {
    fn from(c: CourseConstraints) -> Self {
        let error = match c {
            CourseConstraints::TitleLength => ErrorKind::BadRequest
                .with_message("Course title must be between 1 and 128 characters long"),
            CourseConstraints::CodeFormat => {
                ErrorKind::BadRequest.with_message("Course code format is invalid")
            }
            CourseConstraints::CodeUnique => ErrorKind::Conflict
                .with_message("A course with this code already exists in the semester"),
            CourseConstraints::SemesterReference => {
                ErrorKind::NotFound.with_message("Semester not found")
            }
            CourseConstraints::UpdatedAfterCreated => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("course")
    }
}

impl From<TopicConstraints> for Error<'static> {
    fn from(c: TopicConstraints) -> Self {
        let error = match c {
            TopicConstraints::TitleLength => ErrorKind::BadRequest
                .with_message("Topic title must be between 1 and 128 characters long"),
            TopicConstraints::PositionMin => {
                ErrorKind::BadRequest.with_message("Topic position cannot be negative")
            }
            TopicConstraints::PositionUnique => ErrorKind::Conflict
                .with_message("Another topic of the course already uses this position"),
            TopicConstraints::CourseReference => {
                ErrorKind::NotFound.with_message("Course not found")
            }
            TopicConstraints::UpdatedAfterCreated => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("topic")
    }
}

impl From<SlideConstraints> for Error<'static> {
    fn from(c: SlideConstraints) -> Self {
        let error = match c {
            SlideConstraints::TitleLength => ErrorKind::BadRequest
                .with_message("Slide title must be between 1 and 256 characters long"),
            SlideConstraints::UrlNotEmpty => {
                ErrorKind::BadRequest.with_message("Slide URL cannot be empty")
            }
            SlideConstraints::TopicReference => ErrorKind::NotFound.with_message("Topic not found"),
            SlideConstraints::UpdatedAfterCreated => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("slide")
    }
}

impl From<VideoConstraints> for Error<'static> {
    fn from(c: VideoConstraints) -> Self {
        let error = match c {
            VideoConstraints::TitleLength => ErrorKind::BadRequest
                .with_message("Video title must be between 1 and 256 characters long"),
            VideoConstraints::UrlNotEmpty => {
                ErrorKind::BadRequest.with_message("Video URL cannot be empty")
            }
            VideoConstraints::DurationMin => {
                ErrorKind::BadRequest.with_message("Video duration cannot be negative")
            }
            VideoConstraints::TopicReference => ErrorKind::NotFound.with_message("Topic not found"),
            VideoConstraints::UpdatedAfterCreated => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("video")
    }
}

impl From<StudyToolConstraints> for Error<'static> {
    fn from(c: StudyToolConstraints) -> Self {
        let error = match c {
            StudyToolConstraints::TitleLength => ErrorKind::BadRequest
                .with_message("Study tool title must be between 1 and 256 characters long"),
            StudyToolConstraints::UrlNotEmpty => {
                ErrorKind::BadRequest.with_message("Study tool URL cannot be empty")
            }
            StudyToolConstraints::CourseReference => {
                ErrorKind::NotFound.with_message("Course not found")
            }
            StudyToolConstraints::UpdatedAfterCreated => {
                ErrorKind::InternalServerError.into_error()
            }
        };

        error.with_resource("study_tool")
    }
}

#[cfg(test)]
mod tests {
    use lectern_postgres::types::ConstraintViolation;

    use super::*;

    #[test]
    fn reference_violations_are_not_found() {
        let error: Error = CourseConstraints::SemesterReference.into();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.resource(), Some("course"));
    }

    #[test]
    fn uniqueness_violations_are_conflicts() {
        let error: Error = TopicConstraints::PositionUnique.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn constraint_name_maps_to_bad_request() {
        let violation = ConstraintViolation::new("videos_duration_secs_min");
        let error = violation.map(Error::from);
        assert_eq!(error.map(|e| e.kind()), Some(ErrorKind::BadRequest));
    }
}
