//! Gist Gateway REST API
//!
//! This crate provides the Axum-based HTTP surface for the gateway: the
//! per-user gists listing, health and index endpoints, and the Prometheus
//! metrics endpoint.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, MetricsHandle};
