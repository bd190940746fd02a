//! Shareable content response types.

/// Content resolved from a share link.
///
/// Serialized as `{ id, title, url, description, type }`, the shape the
/// client side lookup deserializes.
pub use lectern_core::ContentRecord as Content;
