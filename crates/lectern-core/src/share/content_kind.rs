use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of shareable study material.
///
/// The string forms (`video`, `slide`, `document`, `study-tool`, `syllabus`)
/// are used on the wire, in share paths and in the database.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// Recorded lecture or tutorial video.
    Video,
    /// Slide deck.
    #[default]
    Slide,
    /// Written document, shared through the slide bucket.
    Document,
    /// Study tool such as a flashcard set or practice quiz.
    StudyTool,
    /// Course syllabus, shared through the study tool bucket.
    Syllabus,
}

impl ContentKind {
    /// Returns the kind whose name is used as the first share path segment.
    #[must_use]
    pub fn bucket(self) -> Self {
        match self {
            Self::Video => Self::Video,
            Self::Slide | Self::Document => Self::Slide,
            Self::StudyTool | Self::Syllabus => Self::StudyTool,
        }
    }

    /// Parses a share path bucket segment.
    ///
    /// Only `video`, `slide` and `study-tool` are accepted.
    pub fn from_bucket(segment: &str) -> Option<Self> {
        match segment {
            "video" => Some(Self::Video),
            "slide" => Some(Self::Slide),
            "study-tool" => Some(Self::StudyTool),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn wire_names() {
        let names: Vec<_> = ContentKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            ["video", "slide", "document", "study-tool", "syllabus"]
        );
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!(
            ContentKind::from_str("study-tool").ok(),
            Some(ContentKind::StudyTool)
        );
        assert!(ContentKind::from_str("StudyTool").is_err());
        assert!(ContentKind::from_str("quiz").is_err());
    }

    #[test]
    fn buckets_collapse_documents_and_syllabi() {
        assert_eq!(ContentKind::Document.bucket(), ContentKind::Slide);
        assert_eq!(ContentKind::Syllabus.bucket(), ContentKind::StudyTool);
        assert_eq!(ContentKind::Video.bucket(), ContentKind::Video);

        for kind in ContentKind::iter() {
            assert_eq!(kind.bucket().bucket(), kind.bucket());
            assert_eq!(ContentKind::from_bucket(kind.bucket().as_ref()), Some(kind.bucket()));
        }
    }

    #[test]
    fn non_bucket_segments_are_rejected() {
        assert_eq!(ContentKind::from_bucket("document"), None);
        assert_eq!(ContentKind::from_bucket("syllabus"), None);
        assert_eq!(ContentKind::from_bucket("Video"), None);
    }
}
