use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::MockServer;

use gist_api::{AppState, create_router};
use gist_core::{CacheConfig, GistCache, GistService};
use gist_proxy::{GitHubClient, GitHubClientConfig};

/// Build the full router against a mock upstream
pub fn app_for(server: &MockServer, capacity: usize) -> Router {
    let upstream = GitHubClient::new(GitHubClientConfig {
        url: server.uri(),
        timeout: Duration::from_millis(500),
        user_agent: "gist-gateway-tests".to_string(),
    })
    .expect("client");
    let cache = Arc::new(GistCache::new(CacheConfig { capacity }));
    let service = Arc::new(GistService::new(cache, Arc::new(upstream)));
    create_router(AppState::new(service), None)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(req).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, serde_json::from_slice(&bytes).expect("json"))
}
