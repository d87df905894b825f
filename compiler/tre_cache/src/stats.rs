//! Cache statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time counters for a [`MatcherCache`](crate::MatcherCache).
///
/// Counters are cumulative for the life of the cache; purge and resize do not
/// reset them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to compile.
    pub misses: u64,
    /// Compiled matchers stored in the cache.
    pub inserts: u64,
    /// Entries dropped to stay within capacity.
    pub evictions: u64,
    /// Compiles that failed (never cached).
    pub compile_failures: u64,
    /// Calls to `purge`.
    pub purges: u64,
    /// Successful calls to `set_capacity`.
    pub resets: u64,
}

impl CacheStats {
    /// Total `get_or_compile` calls observed.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Lock-free counters behind [`CacheStats`].
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    evictions: AtomicU64,
    compile_failures: AtomicU64,
    purges: AtomicU64,
    resets: AtomicU64,
}

impl StatsCounters {
    #[inline]
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_compile_failure(&self) {
        self.compile_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_purge(&self) {
        self.purges.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_reset(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            compile_failures: self.compile_failures.load(Ordering::Relaxed),
            purges: self.purges.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
        }
    }
}
