use axum::Json;
use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check with a small status body.
pub async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Handler for `GET /readyz` — readiness check (override per service as needed).
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
