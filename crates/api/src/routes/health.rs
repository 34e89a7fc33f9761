use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of business calendars loaded.
    pub calendars: usize,
}

/// GET /health -- returns service health.
///
/// Reports `degraded` when no calendars are loaded.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let calendars = state.calendars.len();
    let status = if calendars > 0 { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        calendars,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
