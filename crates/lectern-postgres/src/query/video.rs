//! Video repository.

use std::future::Future;

use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewVideo, Video, UpdateVideo};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for video database operations.
pub trait VideoRepository {
    /// Creates a new video.
    ///
    /// A missing topic surfaces as a foreign key violation.
    fn create_video(&mut self, video: NewVideo) -> impl Future<Output = PgResult<Video>> + Send;

    /// Finds a video by ID.
    fn find_video_by_id(
        &mut self,
        video_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Video>>> + Send;

    /// Applies partial changes, returning `None` if the row does not exist.
    fn update_video(
        &mut self,
        video_id: Uuid,
        changes: UpdateVideo,
    ) -> impl Future<Output = PgResult<Option<Video>>> + Send;

    /// Deletes a video, returning `false` if nothing was deleted.
    fn delete_video(&mut self, video_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists the videos of a topic, oldest first.
    fn list_topic_videos(
        &mut self,
        parent_topic_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Video>>> + Send;
}

impl VideoRepository for PgConnection {
    async fn create_video(&mut self, video: NewVideo) -> PgResult<Video> {
        use schema::videos;

        let video = diesel::insert_into(videos::table)
            .values(&video)
            .returning(Video::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(video)
    }

    async fn find_video_by_id(&mut self, video_id: Uuid) -> PgResult<Option<Video>> {
        use schema::videos::dsl::*;

        let video = videos
            .filter(id.eq(video_id))
            .select(Video::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(video)
    }

    async fn update_video(
        &mut self,
        video_id: Uuid,
        changes: UpdateVideo,
    ) -> PgResult<Option<Video>> {
        use schema::videos::dsl::*;

        let video = diesel::update(videos)
            .filter(id.eq(video_id))
            .set((&changes, updated_at.eq(now)))
            .returning(Video::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(video)
    }

    async fn delete_video(&mut self, video_id: Uuid) -> PgResult<bool> {
        use schema::videos::dsl::*;

        let deleted = diesel::delete(videos.filter(id.eq(video_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn list_topic_videos(
        &mut self,
        parent_topic_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Video>> {
        use schema::videos::dsl::*;

        let video_list = videos
            .filter(topic_id.eq(parent_topic_id))
            .select(Video::as_select())
            .order(created_at.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(video_list)
    }
}
