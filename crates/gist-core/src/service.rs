//! Gist listing service (cache-aside pipeline)

use gist_proxy::UpstreamError;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheEntry, GistCache};
use crate::error::PipelineError;
use crate::model::GistsResponse;
use crate::query::GistsQuery;
use crate::upstream::GistSource;

/// Request pipeline: validate, look up the cache, fetch on miss, populate
pub struct GistService {
    cache: Arc<GistCache>,
    upstream: Arc<dyn GistSource>,
}

impl GistService {
    /// Create a new gist service
    pub fn new(cache: Arc<GistCache>, upstream: Arc<dyn GistSource>) -> Self {
        Self { cache, upstream }
    }

    pub fn cache(&self) -> &Arc<GistCache> {
        &self.cache
    }

    /// Handle one listing request from raw path/query values
    pub async fn handle(
        &self,
        raw_username: &str,
        raw_per_page: Option<&str>,
        raw_page: Option<&str>,
    ) -> Result<GistsResponse, PipelineError> {
        let query = GistsQuery::parse(raw_username, raw_per_page, raw_page)?;
        self.get_gists(&query).await
    }

    /// Get a listing page (cache-aside pattern)
    pub async fn get_gists(&self, query: &GistsQuery) -> Result<GistsResponse, PipelineError> {
        let key = query.cache_key();

        if let Some(entry) = self.cache.get(&key) {
            debug!(
                "Cache hit for gists: {} (page {}, per_page {})",
                query.username(),
                query.page(),
                query.per_page()
            );
            return Ok(GistsResponse::from_entry(query, &entry));
        }

        info!(
            "Cache miss for gists: {} (page {}, per_page {}), fetching from upstream",
            query.username(),
            query.page(),
            query.per_page()
        );

        let gists = self
            .upstream
            .fetch_gists(query.username(), query.per_page(), query.page())
            .await
            .map_err(|e| map_upstream_error(query, e))?;

        metrics::counter!("gist_gateway_upstream_requests_total", "outcome" => "ok").increment(1);

        let entry = CacheEntry::new(gists);
        let response = GistsResponse::from_entry(query, &entry);
        self.cache.put(key, entry);

        Ok(response)
    }
}

fn map_upstream_error(query: &GistsQuery, err: UpstreamError) -> PipelineError {
    let outcome = match &err {
        UpstreamError::NotFound(_) => "not_found",
        UpstreamError::RateLimited => "rate_limited",
        UpstreamError::Timeout => "timeout",
        UpstreamError::MalformedResponse(_) => "malformed",
        UpstreamError::Unreachable(_) | UpstreamError::InvalidConfig(_) => "unreachable",
    };
    metrics::counter!("gist_gateway_upstream_requests_total", "outcome" => outcome).increment(1);

    match err {
        UpstreamError::NotFound(_) => {
            debug!("Upstream has no user: {}", query.username());
            PipelineError::UserNotFound(query.username().to_string())
        }
        UpstreamError::RateLimited => {
            warn!("Upstream rate limit hit for user: {}", query.username());
            PipelineError::RateLimited
        }
        e => {
            error!("Upstream request for {} failed: {}", query.username(), e);
            PipelineError::UpstreamFailure(e)
        }
    }
}
