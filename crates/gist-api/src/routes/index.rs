//! API index endpoint

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// GET / - describe the available routes
async fn index() -> Json<Value> {
    Json(json!({
        "message": "GitHub Gists API",
        "usage": "GET /<username> to retrieve public gists for a user",
        "example": "/octocat",
        "query_parameters": {
            "per_page": "Number of results per page (default: 30, max: 100)",
            "page": "Page number (default: 1)"
        },
        "endpoints": {
            "/": "API information",
            "/<username>": "Get user gists",
            "/health": "Health check"
        }
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
