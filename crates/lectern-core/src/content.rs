//! Content records and the lookup collaborator contract.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::share::{ContentKind, ShareRef};

/// A piece of study material as returned by a content lookup.
///
/// `kind` is the fine-grained kind of the stored row, so a document reports
/// [`ContentKind::Document`] even though its share link uses the slide bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ContentRecord {
    /// Row identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Location of the underlying material.
    pub url: String,
    /// Free-form description.
    pub description: String,
    /// Fine-grained content kind.
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

/// Fetches a single content record by its share reference.
///
/// `Ok(None)` means the record does not exist. Errors are reserved for
/// transport or decoding failures.
#[async_trait::async_trait]
pub trait ContentLookup: Send + Sync {
    /// Looks up the record addressed by `share`.
    async fn fetch(&self, share: &ShareRef) -> Result<Option<ContentRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_type_on_the_wire() -> anyhow::Result<()> {
        let record = ContentRecord {
            id: "123e4567-e89b-12d3-a456-426614174000".to_owned(),
            title: "Lecture 1".to_owned(),
            url: "https://cdn.example.com/lecture-1.pdf".to_owned(),
            description: String::new(),
            kind: ContentKind::Document,
        };

        let value = serde_json::to_value(&record)?;
        assert_eq!(value["type"], "document");

        let parsed: ContentRecord = serde_json::from_value(value)?;
        assert_eq!(parsed, record);
        Ok(())
    }

    #[test]
    fn record_accepts_study_tool_kind() -> anyhow::Result<()> {
        let json = r#"{"id":"a","title":"t","url":"u","description":"d","type":"study-tool"}"#;
        let record: ContentRecord = serde_json::from_str(json)?;
        assert_eq!(record.kind, ContentKind::StudyTool);
        Ok(())
    }
}
