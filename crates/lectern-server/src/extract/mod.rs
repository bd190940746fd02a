//! HTTP request extractors with consistent error handling and validation.
//!
//! Every extractor in this module rejects with the handler [`Error`] type so
//! that failures render as the same JSON error body the handlers produce.
//!
//! - [`Json`], [`ValidateJson`], [`Path`] and [`Query`] wrap their axum
//!   counterparts with descriptive rejections.
//! - [`PgPool`] checks a connection out of the Postgres pool.
//! - [`AdminAccess`] guards mutating catalogue routes behind the admin token.
//!
//! [`Error`]: crate::handler::Error

mod admin_access;
mod pg_connection;
pub mod reject;
mod typed_header;

pub use crate::extract::admin_access::AdminAccess;
pub use crate::extract::pg_connection::PgPool;
pub use crate::extract::reject::{Json, Path, Query, ValidateJson};
pub use crate::extract::typed_header::TypedHeader;
