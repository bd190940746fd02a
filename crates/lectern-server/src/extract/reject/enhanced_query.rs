//! Query string extractor with descriptive rejections.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Query string extractor that wraps [`axum::extract::Query`].
///
/// ```rust,ignore
/// use lectern_server::extract::Query;
/// use lectern_server::handler::request::Pagination;
///
/// // GET /api/semesters/?offset=20&limit=10
/// async fn list(Query(pagination): Query<Pagination>) {}
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Creates a new [`Query`] wrapper.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner query parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Query(query)),
            Err(rejection) => Err(describe_rejection(rejection)),
        }
    }
}

fn describe_rejection(rejection: QueryRejection) -> Error<'static> {
    tracing::debug!(
        target: "lectern_server::extract::query",
        error = %rejection,
        "query string parsing failed"
    );

    let detail = rejection.body_text();
    if detail.contains("missing field") {
        let field = quoted_field(&detail).unwrap_or("unknown");
        ErrorKind::BadRequest
            .with_message("Missing required query parameter")
            .with_context(format!("Query parameter '{field}' is required"))
    } else if detail.contains("duplicate field") {
        let field = quoted_field(&detail).unwrap_or("unknown");
        ErrorKind::BadRequest
            .with_message("Duplicate query parameter")
            .with_context(format!("Query parameter '{field}' was given more than once"))
    } else {
        ErrorKind::BadRequest
            .with_message("Invalid query parameters")
            .with_context(detail)
    }
}

/// Returns the first backtick-quoted name in a serde error message.
fn quoted_field(detail: &str) -> Option<&str> {
    let start = detail.find('`')? + 1;
    let len = detail[start..].find('`')?;
    Some(&detail[start..start + len])
}

impl<T> aide::OperationInput for Query<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumQuery::<T>::operation_input(ctx, operation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_field_extracts_name() {
        assert_eq!(quoted_field("missing field `limit`"), Some("limit"));
        assert_eq!(quoted_field("no quotes here"), None);
    }

    #[test]
    fn query_wrapper_roundtrip() {
        let query = Query::new(7_u32);
        assert_eq!(query.into_inner(), 7);
    }
}
