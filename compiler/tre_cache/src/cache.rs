//! The matcher cache.

// Arc is the shared-ownership handle for cached matchers: the cache and every
// caller holding a returned matcher keep it alive independently.
#![expect(
    clippy::disallowed_types,
    reason = "Arc required for matchers shared between the cache and callers"
)]

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};
use tre_engine::{CompileError, Matcher, PatternCompiler, RegexCompiler};

use crate::stats::StatsCounters;
use crate::{CacheConfig, CacheError, CacheStats};

type Entries = LruCache<String, Arc<Matcher>, FxBuildHasher>;

/// Everything the lock protects.
///
/// `generation` advances on every purge and resize. A miss remembers the
/// generation it started in and only inserts if it is still current.
struct CacheState {
    entries: Entries,
    generation: u64,
}

impl CacheState {
    fn new(capacity: NonZeroUsize, generation: u64) -> Self {
        Self {
            entries: LruCache::with_hasher(capacity, FxBuildHasher),
            generation,
        }
    }
}

/// Bounded LRU cache from description to compiled [`Matcher`].
///
/// Construct one per composition root and share it by reference (or `Arc`);
/// every method takes `&self`.
///
/// # Thread Safety
/// A single `parking_lot::Mutex` protects the entries and recency order.
/// The compiler `C` runs without the lock held.
///
/// # Example
///
/// ```text
/// let cache = MatcherCache::new();
/// let a = cache.get_or_compile(r"\d+")?;
/// let b = cache.get_or_compile(r"\d+")?;
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct MatcherCache<C = RegexCompiler> {
    state: Mutex<CacheState>,
    compiler: C,
    stats: StatsCounters,
}

impl MatcherCache<RegexCompiler> {
    /// A cache with the default capacity and compiler.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default(), RegexCompiler::new())
    }

    /// A cache holding at most `capacity` matchers, using the default compiler.
    pub fn with_capacity(capacity: usize) -> Result<Self, CacheError> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity { requested: capacity })?;
        Ok(Self::with_config(
            CacheConfig::new().with_capacity(capacity),
            RegexCompiler::new(),
        ))
    }
}

impl Default for MatcherCache<RegexCompiler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PatternCompiler> MatcherCache<C> {
    /// A cache with the default capacity that compiles through `compiler`.
    pub fn with_compiler(compiler: C) -> Self {
        Self::with_config(CacheConfig::default(), compiler)
    }

    /// A cache configured by `config` that compiles through `compiler`.
    pub fn with_config(config: CacheConfig, compiler: C) -> Self {
        Self {
            state: Mutex::new(CacheState::new(config.capacity, 0)),
            compiler,
            stats: StatsCounters::default(),
        }
    }

    /// Return the matcher for `description`, compiling it on a miss.
    ///
    /// A hit marks the entry most recently used and never calls the compiler.
    /// A miss compiles without holding the lock, then inserts the result as
    /// most recently used, evicting the least recently used entry if the cache
    /// is full. A compile failure is returned and nothing is inserted.
    ///
    /// If a purge or resize happens while the compile is running, the fresh
    /// matcher is returned to this caller but not inserted.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn get_or_compile(&self, description: &str) -> Result<Arc<Matcher>, CompileError> {
        let generation = {
            let mut state = self.state.lock();
            if let Some(matcher) = state.entries.get(description) {
                self.stats.record_hit();
                trace!("cache hit");
                return Ok(Arc::clone(matcher));
            }
            state.generation
        };

        self.stats.record_miss();
        debug!("cache miss, compiling");

        let matcher = match self.compiler.compile(description) {
            Ok(matcher) => Arc::new(matcher),
            Err(err) => {
                self.stats.record_compile_failure();
                debug!(error = %err, "compile failed, nothing cached");
                return Err(err);
            }
        };

        // Anything displaced is dropped after the lock is released.
        let displaced = {
            let mut state = self.state.lock();
            if state.generation != generation {
                debug!("cache reset during compile, returning matcher uncached");
                return Ok(matcher);
            }
            state
                .entries
                .push(description.to_owned(), Arc::clone(&matcher))
        };
        self.stats.record_insert();

        if let Some((key, _)) = displaced {
            // `push` also hands back the previous value when a concurrent miss
            // for the same description inserted first; that is a replacement.
            if key != description {
                self.stats.record_eviction();
                debug!(evicted = %key, "evicted least recently used matcher");
            }
        }

        Ok(matcher)
    }

    /// Drop every entry.
    ///
    /// Matchers already handed out stay valid. Lookups that complete after
    /// this returns never see an entry inserted before it.
    pub fn purge(&self) {
        let old = {
            let mut state = self.state.lock();
            let capacity = state.entries.cap();
            let next = CacheState::new(capacity, state.generation.wrapping_add(1));
            std::mem::replace(&mut *state, next)
        };
        self.stats.record_purge();
        debug!(dropped = old.entries.len(), "purged matcher cache");
    }

    /// Replace the capacity with `capacity`, dropping every entry.
    ///
    /// Resizing is a full reset, not a trim: still-valid entries are discarded
    /// too. A capacity of zero is rejected and leaves the cache untouched.
    pub fn set_capacity(&self, capacity: usize) -> Result<(), CacheError> {
        let Some(new_capacity) = NonZeroUsize::new(capacity) else {
            return Err(CacheError::InvalidCapacity {
                requested: capacity,
            });
        };

        let old = {
            let mut state = self.state.lock();
            let next = CacheState::new(new_capacity, state.generation.wrapping_add(1));
            std::mem::replace(&mut *state, next)
        };
        self.stats.record_reset();
        debug!(
            capacity,
            dropped = old.entries.len(),
            "resized matcher cache"
        );
        Ok(())
    }

    /// Maximum number of resident matchers.
    pub fn capacity(&self) -> usize {
        self.state.lock().entries.cap().get()
    }

    /// Number of resident matchers.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Whether the cache holds no matchers.
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    /// Whether `description` is resident. Does not refresh its recency.
    pub fn contains(&self, description: &str) -> bool {
        self.state.lock().entries.contains(description)
    }

    /// Resident descriptions, most recently used first.
    pub fn descriptions(&self) -> Vec<String> {
        self.state
            .lock()
            .entries
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Snapshot of the cumulative counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// The compiler used on misses.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }
}

impl<C> std::fmt::Debug for MatcherCache<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MatcherCache")
            .field("len", &state.entries.len())
            .field("capacity", &state.entries.cap())
            .field("generation", &state.generation)
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
