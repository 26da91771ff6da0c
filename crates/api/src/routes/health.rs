use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness payload for `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database answered the last ping.
    pub db_healthy: bool,
}

/// GET /health -- liveness plus a best-effort database ping.
///
/// Always returns 200; a dead database only degrades the payload so load
/// balancers keep routing while the pool recovers.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = lexora_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /health/db -- strict database readiness: 503 when the ping fails.
async fn db_health_check(State(state): State<AppState>) -> StatusCode {
    match lexora_db::health_check(&state.pool).await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::error!(error = %err, "Database health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/db", get(db_health_check))
}
