//! All-in-one creator response types.

use lectern_core::ContentKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Material created by the all-in-one creator.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedMaterial {
    /// ID of the created row.
    pub id: Uuid,
    /// Kind of the created material.
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Public share path of the material.
    pub share_path: String,
}

impl CreatedMaterial {
    /// Creates a new entry, deriving the share path from `kind` and `id`.
    pub fn new(kind: ContentKind, id: Uuid) -> Self {
        Self {
            id,
            kind,
            share_path: lectern_core::encode(kind, &id.to_string()),
        }
    }
}

/// Topic created by the all-in-one creator.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTopic {
    /// ID of the created topic.
    pub topic_id: Uuid,
    /// Slides, documents and videos created under the topic.
    pub materials: Vec<CreatedMaterial>,
}

/// Result of an all-in-one creator run.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCatalogue {
    /// ID of the created or reused semester.
    pub semester_id: Uuid,
    /// ID of the created course.
    pub course_id: Uuid,
    /// Created topics in request order.
    pub topics: Vec<CreatedTopic>,
    /// Study tools and syllabi created for the course.
    pub study_tools: Vec<CreatedMaterial>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_material_uses_bucket_path() {
        let id = Uuid::nil();
        let material = CreatedMaterial::new(ContentKind::Syllabus, id);
        assert_eq!(material.share_path, format!("/study-tool/{id}"));
        assert_eq!(material.kind, ContentKind::Syllabus);
    }
}
