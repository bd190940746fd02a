#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;

pub mod extract;
pub mod handler;
pub mod middleware;
pub mod service;

pub use crate::error::{BoxedError, Error, ErrorKind, Result};

/// Tracing target for admin token checks.
pub const TRACING_TARGET_AUTHORIZATION: &str = "lectern_server::authorization";

/// Tracing target for share link rewrites.
pub const TRACING_TARGET_SHARE_REWRITE: &str = "lectern_server::middleware::share_rewrite";
