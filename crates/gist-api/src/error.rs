//! API error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gist_core::PipelineError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Pipeline(e) => match e {
                PipelineError::InvalidUsername
                | PipelineError::InvalidPerPage
                | PipelineError::InvalidPage
                | PipelineError::PageTooLarge => (StatusCode::BAD_REQUEST, e.to_string()),
                PipelineError::UserNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
                PipelineError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, e.to_string()),
                // The cause is logged by the pipeline, never echoed
                PipelineError::UpstreamFailure(_) => (
                    StatusCode::BAD_GATEWAY,
                    "Upstream request failed".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}
