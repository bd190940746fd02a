//! Pagination query parameters.

use lectern_postgres::types::{MAX_LIMIT, OffsetPagination};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Offset pagination taken from the query string.
///
/// Missing values fall back to the defaults and out-of-range values are
/// clamped rather than rejected.
#[must_use]
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct Pagination {
    /// Number of records to skip.
    pub offset: Option<u32>,
    /// Maximum number of records to return (1 to 1000).
    pub limit: Option<u32>,
}

impl Pagination {
    /// Default page size.
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Returns a new [`Pagination`].
    #[inline]
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Returns the pagination offset.
    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or_default()
    }

    /// Returns the pagination limit.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

impl From<Pagination> for OffsetPagination {
    fn from(pagination: Pagination) -> Self {
        OffsetPagination::new(
            i64::from(pagination.limit()).min(MAX_LIMIT),
            i64::from(pagination.offset()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_clamping() {
        let default = OffsetPagination::from(Pagination::default());
        assert_eq!(default.limit, 50);
        assert_eq!(default.offset, 0);

        let clamped = OffsetPagination::from(Pagination::new(20, 5000));
        assert_eq!(clamped.limit, MAX_LIMIT);
        assert_eq!(clamped.offset, 20);

        let zero = OffsetPagination::from(Pagination::new(0, 0));
        assert_eq!(zero.limit, 1);
    }
}
