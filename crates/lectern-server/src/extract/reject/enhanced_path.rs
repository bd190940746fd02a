//! Path parameter extractor with descriptive rejections.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use super::shorten_detail;
use crate::handler::{Error, ErrorKind};

/// Path parameter extractor that wraps [`axum::extract::Path`].
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new [`Path`] wrapper.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner path parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor =
            <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl From<PathRejection> for Error<'static> {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                let detail = err.body_text();
                ErrorKind::BadRequest
                    .with_message("Invalid path parameter")
                    .with_context(format!(
                        "{}. {}",
                        shorten_detail(&detail, 2, 150),
                        path_hint(&detail)
                    ))
            }
            PathRejection::MissingPathParams(err) => ErrorKind::MissingPathParam
                .with_context(shorten_detail(&err.body_text(), 2, 150)),
            _ => ErrorKind::InternalServerError
                .with_message("Path processing failed")
                .with_context("Route is missing its path parameter definitions"),
        }
    }
}

/// Returns a formatting hint for the most common path parameter failures.
fn path_hint(detail: &str) -> &'static str {
    let detail = detail.to_lowercase();
    if detail.contains("uuid") || detail.contains("invalid character") {
        "Identifiers must be UUIDs such as 01234567-89ab-cdef-0123-456789abcdef"
    } else if detail.contains("unknown variant") {
        "Content kinds are video, slide, document, study-tool and syllabus"
    } else {
        "Check that the parameter matches the expected format"
    }
}

impl<T> aide::OperationInput for Path<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumPath::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumPath::<T>::inferred_early_responses(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::path_hint;

    #[test]
    fn hints_follow_failure_kind() {
        assert!(path_hint("UUID parsing failed: invalid character").contains("UUID"));
        assert!(path_hint("unknown variant `podcast`").contains("study-tool"));
        assert!(path_hint("something else").starts_with("Check"));
    }
}
