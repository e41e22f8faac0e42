//! Bounded LRU cache for normalized listing pages

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

use super::entry::{CacheEntry, CacheKey};

/// Default number of cached pages
pub const DEFAULT_CAPACITY: usize = 128;

/// Configuration for the response cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached pages
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Point-in-time cache counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
}

/// Capacity-bounded response cache with least-recently-used eviction.
///
/// All state transitions happen under one short-lived lock; callers never
/// hold it across upstream I/O.
pub struct GistCache {
    entries: Mutex<LruCache<CacheKey, Arc<CacheEntry>>>,
    capacity: NonZeroUsize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl GistCache {
    /// Create a new cache
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.capacity).unwrap_or_else(|| {
            warn!("Cache capacity 0 is not allowed, using 1");
            NonZeroUsize::MIN
        });

        info!("Initializing response cache (capacity: {} entries)", capacity);

        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Look up an entry, marking it most recently used
    pub fn get(&self, key: &CacheKey) -> Option<Arc<CacheEntry>> {
        let entry = self.entries.lock().get(key).cloned();

        match entry {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                metrics::counter!("gist_gateway_cache_hits_total").increment(1);
                Some(entry)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                metrics::counter!("gist_gateway_cache_misses_total").increment(1);
                None
            }
        }
    }

    /// Insert or replace an entry, evicting the least recently used one
    /// when a new key arrives at capacity
    pub fn put(&self, key: CacheKey, entry: CacheEntry) {
        let (displaced, len) = {
            let mut entries = self.entries.lock();
            let displaced = entries.push(key.clone(), Arc::new(entry));
            (displaced, entries.len())
        };

        if let Some((old_key, _)) = displaced
            && old_key != key
        {
            debug!(
                "Evicted cache entry: {} (page {}, per_page {})",
                old_key.username, old_key.page, old_key.per_page
            );
            self.evictions.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("gist_gateway_cache_evictions_total").increment(1);
        }

        metrics::gauge!("gist_gateway_cache_entries").set(len as f64);
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: self.capacity(),
        }
    }
}
