//! Pipeline output

use gist_proxy::GistSummary;
use serde::{Deserialize, Serialize};

use crate::cache::CacheEntry;
use crate::query::GistsQuery;

/// A page of a user's gists as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistsResponse {
    pub username: String,
    pub gists: Vec<GistSummary>,
    pub count: usize,
    pub page: u64,
    pub per_page: u32,
}

impl GistsResponse {
    pub fn from_entry(query: &GistsQuery, entry: &CacheEntry) -> Self {
        Self {
            username: query.username().to_string(),
            gists: entry.gists.clone(),
            count: entry.count,
            page: query.page(),
            per_page: query.per_page(),
        }
    }
}
