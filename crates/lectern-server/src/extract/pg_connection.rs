//! PostgreSQL connection extractor for request handlers.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut};
use lectern_postgres::{PgClient, PgConn};

use crate::handler::{Error, ErrorKind};

/// Extractor that checks a database connection out of the pool.
///
/// The connection implements every repository trait of `lectern-postgres`.
///
/// ```rust,ignore
/// use lectern_server::extract::PgPool;
///
/// async fn list(PgPool(mut conn): PgPool) {
///     // conn.list_semesters(...)
/// }
/// ```
#[derive(Debug, Deref, DerefMut)]
pub struct PgPool(pub PgConn);

impl<S> FromRequestParts<S> for PgPool
where
    PgClient: FromRef<S>,
    S: Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pg_client = PgClient::from_ref(state);
        let conn = pg_client.get_connection().await.map_err(|e| {
            tracing::error!(error = %e, "failed to acquire database connection");
            ErrorKind::ServiceUnavailable
                .with_message("Database connection unavailable")
                .with_context(e.to_string())
                .with_resource("database")
        })?;

        Ok(PgPool(conn))
    }
}

impl aide::OperationInput for PgPool {}
