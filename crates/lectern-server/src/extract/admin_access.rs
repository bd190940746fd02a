//! Admin token guard for mutating catalogue routes.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use axum_extra::typed_header::TypedHeaderRejectionReason;

use super::TypedHeader;
use crate::TRACING_TARGET_AUTHORIZATION;
use crate::handler::{Error, ErrorKind};
use crate::service::AdminToken;

/// Proof that the request carried the configured admin bearer token.
///
/// Handlers that create, update or delete catalogue rows take this
/// extractor as their first argument. Extraction fails with:
///
/// - `403 Forbidden` when no admin token is configured,
/// - `401 Unauthorized` when the `Authorization` header is missing,
///   malformed, or carries a different token.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess(());

impl<S> FromRequestParts<S> for AdminAccess
where
    AdminToken: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(access) = parts.extensions.get::<Self>() {
            return Ok(*access);
        }

        let admin_token = AdminToken::from_ref(state);
        if !admin_token.is_configured() {
            tracing::warn!(
                target: TRACING_TARGET_AUTHORIZATION,
                "admin request rejected, no admin token configured"
            );
            return Err(ErrorKind::Forbidden.with_resource("admin"));
        }

        type BearerHeader = TypedHeader<Authorization<Bearer>>;
        let TypedHeader(authorization) = BearerHeader::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection.reason() {
                TypedHeaderRejectionReason::Missing => ErrorKind::MissingAuthToken
                    .with_context("Missing Authorization header with Bearer token")
                    .with_resource("admin"),
                _ => ErrorKind::Unauthorized
                    .with_context("Authorization header must contain a Bearer token")
                    .with_resource("admin"),
            })?;

        if !admin_token.matches(authorization.token()) {
            tracing::warn!(
                target: TRACING_TARGET_AUTHORIZATION,
                "admin request rejected, token mismatch"
            );
            return Err(ErrorKind::Unauthorized.with_resource("admin"));
        }

        tracing::debug!(target: TRACING_TARGET_AUTHORIZATION, "admin request authorized");
        let access = Self(());
        parts.extensions.insert(access);
        Ok(access)
    }
}

impl aide::OperationInput for AdminAccess {}
