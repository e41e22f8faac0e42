//! Response cache module

mod entry;
mod manager;

pub use entry::{CacheEntry, CacheKey};
pub use manager::{CacheConfig, CacheStats, GistCache};
