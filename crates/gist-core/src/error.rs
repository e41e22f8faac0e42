//! Pipeline error types

use gist_proxy::UpstreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("username must not be empty")]
    InvalidUsername,

    #[error("per_page must be between 1 and 100")]
    InvalidPerPage,

    #[error("page must be greater than 0")]
    InvalidPage,

    #[error("page must be at most {}", u64::MAX)]
    PageTooLarge,

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("Upstream request failed: {0}")]
    UpstreamFailure(#[source] UpstreamError),
}
