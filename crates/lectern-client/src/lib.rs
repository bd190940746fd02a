#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod cache;
mod client;
mod config;
mod error;
mod resolve;

pub use crate::cache::{ContentCache, DEFAULT_CACHE_CAPACITY, ResponseCache};
pub use crate::client::{ContentClient, TRACING_TARGET};
pub use crate::config::{ContentClientConfig, DEFAULT_TIMEOUT};
pub use crate::error::{Error, Result};
pub use crate::resolve::{ShareResolver, ViewerState};
