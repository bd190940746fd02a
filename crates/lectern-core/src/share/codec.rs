use super::{ContentKind, ShareRef};

/// Builds the public share path for a piece of content.
///
/// Documents are shared through `/slide/{id}` and syllabi through
/// `/study-tool/{id}`.
#[must_use]
pub fn encode(kind: ContentKind, id: &str) -> String {
    format!("/{}/{}", kind.bucket(), id)
}

/// Builds a share path from an untyped kind name.
///
/// Unrecognized names fall back to the slide bucket.
#[must_use]
pub fn encode_named(kind: &str, id: &str) -> String {
    let kind = kind.parse::<ContentKind>().unwrap_or(ContentKind::Slide);
    encode(kind, id)
}

/// Parses a share path back into a reference.
///
/// The path is split into non-empty segments. The first segment must be a
/// bucket (`video`, `slide` or `study-tool`) and the second is the id.
/// Anything else yields `None`.
pub fn decode(path: &str) -> Option<ShareRef> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let kind = ContentKind::from_bucket(segments.next()?)?;
    let id = segments.next()?;
    Some(ShareRef::new(kind, id))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    const ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[test]
    fn encodes_each_kind() {
        assert_eq!(encode(ContentKind::Video, ID), format!("/video/{ID}"));
        assert_eq!(encode(ContentKind::Slide, ID), format!("/slide/{ID}"));
        assert_eq!(encode(ContentKind::Document, ID), format!("/slide/{ID}"));
        assert_eq!(encode(ContentKind::StudyTool, ID), format!("/study-tool/{ID}"));
        assert_eq!(encode(ContentKind::Syllabus, ID), format!("/study-tool/{ID}"));
    }

    #[test]
    fn unknown_kind_names_fall_back_to_slide() {
        assert_eq!(encode_named("podcast", ID), format!("/slide/{ID}"));
        assert_eq!(encode_named("", ID), format!("/slide/{ID}"));
        assert_eq!(encode_named("syllabus", ID), format!("/study-tool/{ID}"));
        assert_eq!(encode_named("video", ID), format!("/video/{ID}"));
    }

    #[test]
    fn round_trip_keeps_id_and_bucket() {
        let ids = [ID, "abc", "42", "lecture-01"];
        for kind in ContentKind::iter() {
            for id in ids {
                let decoded = decode(&encode(kind, id));
                assert_eq!(decoded, Some(ShareRef::new(kind.bucket(), id)));
            }
        }
    }

    #[test]
    fn decodes_bucket_paths() {
        assert_eq!(
            decode(&format!("/slide/{ID}")),
            Some(ShareRef::new(ContentKind::Slide, ID))
        );
        assert_eq!(
            decode(&format!("/video/{ID}")),
            Some(ShareRef::new(ContentKind::Video, ID))
        );
        assert_eq!(
            decode(&format!("/study-tool/{ID}")),
            Some(ShareRef::new(ContentKind::StudyTool, ID))
        );
    }

    #[test]
    fn ignores_empty_segments() {
        assert_eq!(decode("//video//abc/"), Some(ShareRef::new(ContentKind::Video, "abc")));
        assert_eq!(decode("video/abc"), Some(ShareRef::new(ContentKind::Video, "abc")));
    }

    #[test]
    fn extra_segments_keep_the_second_as_id() {
        assert_eq!(
            decode("/slide/abc/extra"),
            Some(ShareRef::new(ContentKind::Slide, "abc"))
        );
    }

    #[test]
    fn rejects_non_share_paths() {
        assert_eq!(decode("/nonsense/abc"), None);
        assert_eq!(decode("/"), None);
        assert_eq!(decode(""), None);
        assert_eq!(decode("/video"), None);
        assert_eq!(decode("/video/"), None);
        assert_eq!(decode("/document/abc"), None);
        assert_eq!(decode("/syllabus/abc"), None);
    }

    #[test]
    fn share_ref_path_matches_encode() {
        let share = ShareRef::new(ContentKind::Syllabus, ID);
        assert_eq!(share.to_path(), format!("/study-tool/{ID}"));
        assert_eq!(share.to_string(), format!("syllabus:{ID}"));
    }
}
