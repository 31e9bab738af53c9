use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use super::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Ready once the embedded catalog is loaded; the position service is
/// never a readiness dependency because it degrades to the fallback chart.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.catalog.is_empty() {
        tracing::error!("Readiness check failed: candidate catalog is empty");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "catalog_empty"
            })),
        )
    } else {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "catalog_size": state.catalog.len()
            })),
        )
    }
}
