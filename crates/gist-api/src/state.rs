//! Application state

use gist_core::GistService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Handle used to render the Prometheus exposition
pub type MetricsHandle = PrometheusHandle;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GistService>,
}

impl AppState {
    pub fn new(service: Arc<GistService>) -> Self {
        Self { service }
    }
}
