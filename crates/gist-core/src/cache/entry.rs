//! Cache keys and entries

use gist_proxy::GistSummary;

/// Identity of one cached listing page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub username: String,
    pub per_page: u32,
    pub page: u64,
}

/// A normalized listing page. Never mutated once cached; updates replace
/// the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub gists: Vec<GistSummary>,
    pub count: usize,
}

impl CacheEntry {
    pub fn new(gists: Vec<GistSummary>) -> Self {
        let count = gists.len();
        Self { gists, count }
    }
}
