//! GitHub gists upstream client

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::UpstreamError;
use crate::gist::{self, GistSummary};

/// Default request timeout for upstream calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default upstream API base URL
pub const DEFAULT_URL: &str = "https://api.github.com";

/// Default User-Agent; GitHub rejects requests without one
pub const DEFAULT_USER_AGENT: &str = concat!("gist-gateway/", env!("CARGO_PKG_VERSION"));

/// Bytes of an upstream error body kept for diagnostics
const ERROR_BODY_LIMIT: usize = 256;

/// GitHub client configuration
#[derive(Clone, Debug)]
pub struct GitHubClientConfig {
    /// Base URL of the upstream API
    pub url: String,
    /// Timeout applied to each request, including reading the body
    pub timeout: Duration,
    /// User-Agent header sent upstream
    pub user_agent: String,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// GitHub API client for the public gists listing
pub struct GitHubClient {
    config: GitHubClientConfig,
    base: Url,
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubClientConfig) -> Result<Self, UpstreamError> {
        let base = Url::parse(&config.url)
            .map_err(|e| UpstreamError::InvalidConfig(format!("{}: {}", config.url, e)))?;

        if base.cannot_be_a_base() {
            return Err(UpstreamError::InvalidConfig(format!(
                "{} cannot be used as a base URL",
                config.url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| UpstreamError::InvalidConfig(e.to_string()))?;

        info!(
            "Created GitHub client for {} (timeout: {:?})",
            config.url, config.timeout
        );

        Ok(Self {
            config,
            base,
            client,
        })
    }

    /// Build `{base}/users/{username}/gists?per_page=..&page=..`
    fn gists_url(&self, username: &str, per_page: u32, page: u64) -> Result<Url, UpstreamError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                UpstreamError::InvalidConfig(format!(
                    "{} cannot be used as a base URL",
                    self.config.url
                ))
            })?
            .pop_if_empty()
            .extend(["users", username, "gists"]);
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    /// Fetch one page of a user's public gists.
    ///
    /// Issues exactly one request; there is no retry.
    pub async fn fetch_gists(
        &self,
        username: &str,
        per_page: u32,
        page: u64,
    ) -> Result<Vec<GistSummary>, UpstreamError> {
        let url = self.gists_url(username, per_page, page)?;

        debug!("Fetching gists: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(UpstreamError::from_transport)?;
        let status = response.status();

        match status {
            StatusCode::NOT_FOUND => return Err(UpstreamError::NotFound(username.to_string())),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                return Err(UpstreamError::RateLimited);
            }
            s if !s.is_success() => {
                let body = match response.text().await {
                    Ok(body) => truncate_body(&body),
                    Err(e) => format!("<body unavailable: {}>", e),
                };
                return Err(UpstreamError::Unreachable(format!(
                    "status {}: {}",
                    s.as_u16(),
                    body
                )));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(UpstreamError::from_transport)?;

        gist::parse_gists(&body).map_err(|e| UpstreamError::MalformedResponse(e.to_string()))
    }
}

/// Cut an error body to `ERROR_BODY_LIMIT` bytes on a char boundary
fn truncate_body(body: &str) -> String {
    if body.len() <= ERROR_BODY_LIMIT {
        return body.to_string();
    }
    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &body[..end], body.len())
}
