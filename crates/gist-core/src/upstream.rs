//! Upstream source seam for the pipeline

use async_trait::async_trait;
use gist_proxy::{GistSummary, GitHubClient, UpstreamError};

/// Source of gist listing pages
#[async_trait]
pub trait GistSource: Send + Sync {
    /// Fetch one page of a user's public gists
    async fn fetch_gists(
        &self,
        username: &str,
        per_page: u32,
        page: u64,
    ) -> Result<Vec<GistSummary>, UpstreamError>;
}

#[async_trait]
impl GistSource for GitHubClient {
    async fn fetch_gists(
        &self,
        username: &str,
        per_page: u32,
        page: u64,
    ) -> Result<Vec<GistSummary>, UpstreamError> {
        GitHubClient::fetch_gists(self, username, per_page, page).await
    }
}
