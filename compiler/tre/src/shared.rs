//! The process-wide matcher cache.

use std::sync::OnceLock;

use tracing::debug;
use tre_cache::{CacheConfig, CacheError, MatcherCache};
use tre_engine::RegexCompiler;

// Global singleton, built on first use
static SHARED_CACHE: OnceLock<MatcherCache> = OnceLock::new();

/// Get the shared cache (lazily initialized).
///
/// Capacity comes from `TRE_CACHE_CAPACITY` when set, otherwise
/// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY).
pub fn shared_cache() -> &'static MatcherCache {
    SHARED_CACHE.get_or_init(|| {
        let config = CacheConfig::from_env();
        debug!(capacity = config.capacity.get(), "initializing shared matcher cache");
        MatcherCache::with_config(config, RegexCompiler::new())
    })
}

/// Drop every entry in the shared cache.
pub fn purge_shared_cache() {
    shared_cache().purge();
}

/// Resize the shared cache, dropping its contents.
pub fn set_shared_cache_capacity(capacity: usize) -> Result<(), CacheError> {
    shared_cache().set_capacity(capacity)
}
