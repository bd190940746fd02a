//! Slide repository.

use std::future::Future;

use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewSlide, Slide, UpdateSlide};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for slide database operations.
pub trait SlideRepository {
    /// Creates a new slide.
    ///
    /// A missing topic surfaces as a foreign key violation.
    fn create_slide(&mut self, slide: NewSlide) -> impl Future<Output = PgResult<Slide>> + Send;

    /// Finds a slide by ID.
    fn find_slide_by_id(
        &mut self,
        slide_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Slide>>> + Send;

    /// Applies partial changes, returning `None` if the row does not exist.
    fn update_slide(
        &mut self,
        slide_id: Uuid,
        changes: UpdateSlide,
    ) -> impl Future<Output = PgResult<Option<Slide>>> + Send;

    /// Deletes a slide, returning `false` if nothing was deleted.
    fn delete_slide(&mut self, slide_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists the slides and documents of a topic, oldest first.
    fn list_topic_slides(
        &mut self,
        parent_topic_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Slide>>> + Send;
}

impl SlideRepository for PgConnection {
    async fn create_slide(&mut self, slide: NewSlide) -> PgResult<Slide> {
        use schema::slides;

        let slide = diesel::insert_into(slides::table)
            .values(&slide)
            .returning(Slide::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(slide)
    }

    async fn find_slide_by_id(&mut self, slide_id: Uuid) -> PgResult<Option<Slide>> {
        use schema::slides::dsl::*;

        let slide = slides
            .filter(id.eq(slide_id))
            .select(Slide::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(slide)
    }

    async fn update_slide(
        &mut self,
        slide_id: Uuid,
        changes: UpdateSlide,
    ) -> PgResult<Option<Slide>> {
        use schema::slides::dsl::*;

        let slide = diesel::update(slides)
            .filter(id.eq(slide_id))
            .set((&changes, updated_at.eq(now)))
            .returning(Slide::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(slide)
    }

    async fn delete_slide(&mut self, slide_id: Uuid) -> PgResult<bool> {
        use schema::slides::dsl::*;

        let deleted = diesel::delete(slides.filter(id.eq(slide_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn list_topic_slides(
        &mut self,
        parent_topic_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Slide>> {
        use schema::slides::dsl::*;

        let slide_list = slides
            .filter(topic_id.eq(parent_topic_id))
            .select(Slide::as_select())
            .order(created_at.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(slide_list)
    }
}
