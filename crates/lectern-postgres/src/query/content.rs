//! Content lookup across the material tables.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use lectern_core::{ContentKind, ContentRecord};
use uuid::Uuid;

use crate::model::{Slide, StudyTool, Video};
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Resolves shareable content by kind and id.
///
/// The kind selects the table through its share bucket: `video` reads
/// `videos`, `slide` and `document` read `slides`, `study-tool` and
/// `syllabus` read `study_tools`. The returned record carries the row's own
/// kind.
pub trait ContentRepository {
    /// Finds a content record, returning `None` if the row does not exist.
    fn find_content(
        &mut self,
        kind: ContentKind,
        content_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<ContentRecord>>> + Send;
}

impl ContentRepository for PgConnection {
    async fn find_content(
        &mut self,
        kind: ContentKind,
        content_id: Uuid,
    ) -> PgResult<Option<ContentRecord>> {
        let record = match kind.bucket() {
            ContentKind::Video => schema::videos::table
                .find(content_id)
                .select(Video::as_select())
                .first(self)
                .await
                .optional()
                .map_err(PgError::from)?
                .map(ContentRecord::from),
            ContentKind::StudyTool => schema::study_tools::table
                .find(content_id)
                .select(StudyTool::as_select())
                .first(self)
                .await
                .optional()
                .map_err(PgError::from)?
                .map(ContentRecord::from),
            _ => schema::slides::table
                .find(content_id)
                .select(Slide::as_select())
                .first(self)
                .await
                .optional()
                .map_err(PgError::from)?
                .map(ContentRecord::from),
        };

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            %kind,
            %content_id,
            found = record.is_some(),
            "Content lookup"
        );

        Ok(record)
    }
}
