//! Offset-based pagination for database queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 1000;

/// Offset pagination parameters for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OffsetPagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl OffsetPagination {
    /// Creates a new pagination instance, clamping out-of-range values.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Gets the current page number (1-based).
    pub fn page_number(&self) -> i64 {
        (self.offset / self.limit) + 1
    }
}

impl Default for OffsetPagination {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_bounds() {
        assert_eq!(OffsetPagination::new(0, 10).limit, 1);
        assert_eq!(OffsetPagination::new(1500, 10).limit, MAX_LIMIT);
        assert_eq!(OffsetPagination::new(10, -5).offset, 0);
    }

    #[test]
    fn page_number() {
        assert_eq!(OffsetPagination::new(20, 0).page_number(), 1);
        assert_eq!(OffsetPagination::new(20, 20).page_number(), 2);
        assert_eq!(OffsetPagination::new(10, 25).page_number(), 3);
        assert_eq!(OffsetPagination::default().limit, 50);
    }
}
