//! Gists listing route

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};
use gist_core::GistsResponse;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Raw pagination parameters; validation happens in the pipeline
#[derive(Debug, Deserialize)]
pub struct GistsParams {
    per_page: Option<String>,
    page: Option<String>,
}

/// GET /{username}?per_page=..&page=..
async fn list_gists(
    State(state): State<AppState>,
    Path(username): Path<String>,
    params: Result<Query<GistsParams>, QueryRejection>,
) -> Result<Json<GistsResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    debug!("GET gists: {} {:?}", username, params);

    let response = state
        .service
        .handle(&username, params.per_page.as_deref(), params.page.as_deref())
        .await?;

    Ok(Json(response))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/{username}", get(list_gists))
}
