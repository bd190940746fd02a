#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for share link operations.
pub const TRACING_TARGET_SHARE: &str = "lectern_core::share";

mod content;
mod error;

pub mod share;

pub use content::{ContentLookup, ContentRecord};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use share::{
    ContentKind, RewriteDirective, SHARE_PATH_PARAM, ShareRef, decode, encode, encode_named,
};
