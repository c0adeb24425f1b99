use axum::http::StatusCode;
use tracing::trace;

/// Liveness probe. Returns `200 OK` with an empty body and touches no collaborator.
///
/// GET /health-check
pub async fn health_check() -> StatusCode {
    trace!("Health check");
    StatusCode::OK
}
