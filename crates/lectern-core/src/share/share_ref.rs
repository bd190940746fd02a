use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ContentKind, encode};

/// Reference to a piece of shareable content.
///
/// The `id` is opaque here; in practice it is a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ShareRef {
    /// Content kind. Decoded references always carry a bucket kind.
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Opaque content identifier.
    pub id: String,
}

impl ShareRef {
    /// Creates a new share reference.
    pub fn new(kind: ContentKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Returns the public share path for this reference.
    #[must_use]
    pub fn to_path(&self) -> String {
        encode(self.kind, &self.id)
    }
}

impl fmt::Display for ShareRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
