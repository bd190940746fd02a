//! Health monitoring handlers.
//!
//! The health route is public and served from [`HealthCache`], so it stays
//! cheap under frequent polling.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::MonitorStatus;
use crate::service::{HealthCache, ServiceState};

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "lectern_server::handler::monitors";

/// Reports whether the server can reach its database.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(service_state): State<ServiceState>,
    State(health_cache): State<HealthCache>,
) -> Result<(StatusCode, Json<MonitorStatus>)> {
    let is_healthy = health_cache.is_healthy(&service_state).await;

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::debug!(
        target: TRACING_TARGET,
        is_healthy,
        status_code = status_code.as_u16(),
        "Health status response prepared",
    );

    Ok((status_code, Json(MonitorStatus::new(is_healthy))))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get health status")
        .description("Returns 200 when the database is reachable and 503 otherwise.")
        .response::<200, Json<MonitorStatus>>()
        .response::<503, Json<MonitorStatus>>()
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Health"))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;

    use crate::handler::response::MonitorStatus;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn reports_version_and_status() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| super::routes()).await?;

        let response = server.get("/health").await;
        let status = response.status_code();
        assert!(status == StatusCode::OK || status == StatusCode::SERVICE_UNAVAILABLE);

        let body = response.json::<MonitorStatus>();
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.is_healthy, status == StatusCode::OK);

        Ok(())
    }
}
