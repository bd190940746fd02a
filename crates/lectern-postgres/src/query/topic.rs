//! Topic repository.

use std::future::Future;

use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewTopic, Topic, UpdateTopic};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for topic database operations.
pub trait TopicRepository {
    /// Creates a new topic.
    ///
    /// A missing course surfaces as a foreign key violation.
    fn create_topic(&mut self, topic: NewTopic) -> impl Future<Output = PgResult<Topic>> + Send;

    /// Finds a topic by ID.
    fn find_topic_by_id(
        &mut self,
        topic_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Topic>>> + Send;

    /// Applies partial changes, returning `None` if the row does not exist.
    fn update_topic(
        &mut self,
        topic_id: Uuid,
        changes: UpdateTopic,
    ) -> impl Future<Output = PgResult<Option<Topic>>> + Send;

    /// Deletes a topic, returning `false` if nothing was deleted.
    fn delete_topic(&mut self, topic_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists the topics of a course in teaching order.
    fn list_course_topics(
        &mut self,
        parent_course_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Topic>>> + Send;
}

impl TopicRepository for PgConnection {
    async fn create_topic(&mut self, topic: NewTopic) -> PgResult<Topic> {
        use schema::topics;

        let topic = diesel::insert_into(topics::table)
            .values(&topic)
            .returning(Topic::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(topic)
    }

    async fn find_topic_by_id(&mut self, topic_id: Uuid) -> PgResult<Option<Topic>> {
        use schema::topics::dsl::*;

        let topic = topics
            .filter(id.eq(topic_id))
            .select(Topic::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(topic)
    }

    async fn update_topic(
        &mut self,
        topic_id: Uuid,
        changes: UpdateTopic,
    ) -> PgResult<Option<Topic>> {
        use schema::topics::dsl::*;

        let topic = diesel::update(topics)
            .filter(id.eq(topic_id))
            .set((&changes, updated_at.eq(now)))
            .returning(Topic::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(topic)
    }

    async fn delete_topic(&mut self, topic_id: Uuid) -> PgResult<bool> {
        use schema::topics::dsl::*;

        let deleted = diesel::delete(topics.filter(id.eq(topic_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn list_course_topics(
        &mut self,
        parent_course_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Topic>> {
        use schema::topics::dsl::*;

        let topic_list = topics
            .filter(course_id.eq(parent_course_id))
            .select(Topic::as_select())
            .order((position.asc(), created_at.asc()))
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(topic_list)
    }
}
