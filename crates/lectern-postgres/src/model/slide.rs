//! Slide and document model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use lectern_core::{ContentKind, ContentRecord};
use uuid::Uuid;

use crate::schema::slides;
use crate::types::SlideKind;

/// Slide deck or document attached to a topic.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = slides)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Slide {
    /// Unique slide identifier.
    pub id: Uuid,
    /// Topic the slide belongs to.
    pub topic_id: Uuid,
    /// Display title.
    pub title: String,
    /// Location of the file.
    pub url: String,
    /// Free-form description.
    pub description: String,
    /// Slide deck or document.
    pub slide_kind: SlideKind,
    /// Timestamp when the slide was created.
    pub created_at: Timestamp,
    /// Timestamp when the slide was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new slide.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = slides)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewSlide {
    pub topic_id: Uuid,
    pub title: String,
    pub url: String,
    pub description: String,
    pub slide_kind: SlideKind,
}

/// Data for updating a slide.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = slides)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateSlide {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub slide_kind: Option<SlideKind>,
}

impl Slide {
    /// Returns the fine-grained content kind of this row.
    #[inline]
    pub fn content_kind(&self) -> ContentKind {
        self.slide_kind.into()
    }

    /// Returns the public share path of this slide.
    pub fn share_path(&self) -> String {
        lectern_core::encode(self.content_kind(), &self.id.to_string())
    }
}

impl From<Slide> for ContentRecord {
    fn from(slide: Slide) -> Self {
        Self {
            kind: slide.content_kind(),
            id: slide.id.to_string(),
            title: slide.title,
            url: slide.url,
            description: slide.description,
        }
    }
}
