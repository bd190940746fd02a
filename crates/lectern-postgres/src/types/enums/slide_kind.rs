//! Slide kind enumeration.

use diesel_derive_enum::DbEnum;
use lectern_core::ContentKind;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of material stored in the `slides` table.
///
/// Corresponds to the `SLIDE_KIND` PostgreSQL enum. Both kinds share the
/// `/slide/{id}` link.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::SlideKind"]
pub enum SlideKind {
    /// Slide deck
    #[db_rename = "slide"]
    #[serde(rename = "slide")]
    #[strum(serialize = "slide")]
    #[default]
    Slide,

    /// Written document
    #[db_rename = "document"]
    #[serde(rename = "document")]
    #[strum(serialize = "document")]
    Document,
}

impl From<SlideKind> for ContentKind {
    fn from(value: SlideKind) -> Self {
        match value {
            SlideKind::Slide => ContentKind::Slide,
            SlideKind::Document => ContentKind::Document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_content_kind() {
        assert_eq!(ContentKind::from(SlideKind::Slide), ContentKind::Slide);
        assert_eq!(ContentKind::from(SlideKind::Document), ContentKind::Document);
    }

    #[test]
    fn serde_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&SlideKind::Document)?, "\"document\"");
        assert_eq!(serde_json::from_str::<SlideKind>("\"slide\"")?, SlideKind::Slide);
        Ok(())
    }
}
