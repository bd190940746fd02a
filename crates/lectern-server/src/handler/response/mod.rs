//! Response types for HTTP handlers.

use lectern_postgres::types::OffsetPagination;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod contents;
mod courses;
mod creator;
mod errors;
mod materials;
mod monitors;
mod semesters;
mod topics;

pub use contents::*;
pub use courses::*;
pub use creator::*;
pub use errors::*;
pub use materials::*;
pub use monitors::*;
pub use semesters::*;
pub use topics::*;

/// Offset-paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(rename = "{T}Page")]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Number of records skipped before this page.
    pub offset: i64,
    /// Maximum number of records requested.
    pub limit: i64,
}

impl<T> Page<T> {
    /// Creates a page from query results, mapping each model.
    pub fn from_models<M, F>(models: Vec<M>, pagination: OffsetPagination, f: F) -> Self
    where
        F: FnMut(M) -> T,
    {
        Self {
            items: models.into_iter().map(f).collect(),
            offset: pagination.offset,
            limit: pagination.limit,
        }
    }

    /// Returns true if a full page was returned and more items may follow.
    pub fn may_have_more(&self) -> bool {
        self.items.len() as i64 >= self.limit
    }
}
