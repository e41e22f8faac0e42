//! Gist Gateway Core Business Logic
//!
//! This crate provides the request pipeline for the gateway: parameter
//! validation, the bounded LRU response cache, and the cache-aside fetch
//! against the upstream gists listing.

pub mod cache;
pub mod error;
pub mod model;
pub mod query;
pub mod service;
pub mod upstream;

pub use cache::{CacheConfig, CacheEntry, CacheKey, CacheStats, GistCache};
pub use error::PipelineError;
pub use model::GistsResponse;
pub use query::{DEFAULT_PAGE, DEFAULT_PER_PAGE, GistsQuery, MAX_PER_PAGE};
pub use service::GistService;
pub use upstream::GistSource;

pub use gist_proxy::{GistSummary, UpstreamError};
