//! API routes

mod gists;
mod health;
mod index;
pub mod metrics;

use axum::Router;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::{AppState, MetricsHandle};

/// Fallback for paths no route matches
async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Create the main router
pub fn create_router(state: AppState, metrics_handle: Option<Arc<MetricsHandle>>) -> Router {
    let cache = state.service.cache().clone();

    let mut router = Router::new()
        // API index
        .merge(index::routes())
        // Health check
        .merge(health::routes())
        // Gists listing; static routes above take precedence over the capture
        .merge(gists::routes())
        .with_state(state);

    // Add metrics endpoint if handle is provided
    if let Some(handle) = metrics_handle {
        router = router.merge(metrics::routes(handle, cache));
    }

    router.fallback(not_found)
}
