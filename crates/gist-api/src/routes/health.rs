//! Health check endpoints

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health status response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler. Liveness only; the upstream is not contacted.
async fn health() -> Json<HealthResponse> {
    metrics::counter!("gist_gateway_health_checks_total").increment(1);

    Json(HealthResponse { status: "healthy" })
}

/// Create health route
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
