//! Prometheus metrics endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use gist_core::GistCache;
use std::sync::Arc;

use crate::state::MetricsHandle;

#[derive(Clone)]
struct MetricsState {
    handle: Arc<MetricsHandle>,
    cache: Arc<GistCache>,
}

/// Path of the Prometheus endpoint. GitHub logins cannot start with `-`, so
/// this never shadows a username.
pub const METRICS_PATH: &str = "/-/metrics";

/// Create metrics routes with the Prometheus handle
pub fn routes(handle: Arc<MetricsHandle>, cache: Arc<GistCache>) -> Router {
    Router::new()
        .route(METRICS_PATH, get(get_metrics))
        .with_state(MetricsState { handle, cache })
}

/// GET /-/metrics - Prometheus metrics endpoint
async fn get_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    metrics::gauge!("gist_gateway_cache_entries").set(state.cache.len() as f64);

    state.handle.render()
}
