//! Shareable content links.
//!
//! Study material is shared through short public paths such as
//! `/video/{id}`. This module maps content to those paths and back, and
//! describes the internal rewrite that hands a share link to the SPA entry
//! page.
//!
//! Share paths only carry three buckets: `video`, `slide` and `study-tool`.
//! Documents share the slide bucket and syllabi share the study tool bucket,
//! so decoding a share path yields the bucket and never the finer kind.

mod codec;
mod content_kind;
mod rewrite;
mod share_ref;

pub use codec::{decode, encode, encode_named};
pub use content_kind::ContentKind;
pub use rewrite::{RewriteDirective, SHARE_PATH_PARAM};
pub use share_ref::ShareRef;
