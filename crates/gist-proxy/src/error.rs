//! Upstream error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Upstream request timed out")]
    Timeout,

    #[error("Upstream user not found: {0}")]
    NotFound(String),

    #[error("Upstream rate limit exceeded")]
    RateLimited,

    #[error("Upstream unreachable: {0}")]
    Unreachable(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Invalid upstream configuration: {0}")]
    InvalidConfig(String),
}

impl UpstreamError {
    /// Classify a transport-level failure
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Unreachable(err.to_string())
        }
    }
}
