#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
#![allow(
    clippy::disallowed_types,
    reason = "Tests compare Arc identity directly"
)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Barrier};
use std::thread;

use pretty_assertions::assert_eq;
use tre_engine::{compile, CompileErrorKind};

use super::*;

/// Compiles with `regex` and counts every call.
#[derive(Default)]
struct CountingCompiler {
    calls: AtomicUsize,
}

impl CountingCompiler {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PatternCompiler for CountingCompiler {
    fn compile(&self, description: &str) -> Result<Matcher, CompileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        compile(description)
    }
}

/// Blocks compilation of one description until released.
struct GatedCompiler {
    gate: &'static str,
    started: Mutex<mpsc::Sender<()>>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl PatternCompiler for GatedCompiler {
    fn compile(&self, description: &str) -> Result<Matcher, CompileError> {
        if description == self.gate {
            let _ = self.started.lock().send(());
            let _ = self.release.lock().recv();
        }
        compile(description)
    }
}

/// A gated cache plus the "compile started" receiver and "release" sender.
fn gated_cache(
    gate: &'static str,
) -> (
    MatcherCache<GatedCompiler>,
    mpsc::Receiver<()>,
    mpsc::Sender<()>,
) {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let compiler = GatedCompiler {
        gate,
        started: Mutex::new(started_tx),
        release: Mutex::new(release_rx),
    };
    (MatcherCache::with_compiler(compiler), started_rx, release_tx)
}

fn counting_cache(capacity: usize) -> MatcherCache<CountingCompiler> {
    let config = CacheConfig::new().with_capacity(NonZeroUsize::new(capacity).unwrap());
    MatcherCache::with_config(config, CountingCompiler::default())
}

// Construction

#[test]
fn new_cache_is_empty_with_default_capacity() {
    let cache = MatcherCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.capacity(), 128);
    assert_eq!(cache.stats(), CacheStats::default());
}

#[test]
fn with_capacity_rejects_zero() {
    let err = MatcherCache::with_capacity(0).unwrap_err();
    assert_eq!(err, CacheError::InvalidCapacity { requested: 0 });
    assert_eq!(MatcherCache::with_capacity(3).unwrap().capacity(), 3);
}

// Hits and misses

#[test]
fn hit_returns_same_instance() {
    let cache = counting_cache(4);
    let first = cache.get_or_compile("hello").unwrap();
    let second = cache.get_or_compile("hello").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.compiler().calls(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn distinct_descriptions_distinct_instances() {
    let cache = counting_cache(4);
    let hello = cache.get_or_compile("hello").unwrap();
    let world = cache.get_or_compile("world").unwrap();

    assert!(!Arc::ptr_eq(&hello, &world));
    assert_eq!(cache.compiler().calls(), 2);
    assert!(hello.is_match("hello"));
    assert!(world.is_match("world"));
}

#[test]
fn descriptions_are_not_normalized() {
    let cache = counting_cache(4);
    let plain = cache.get_or_compile("a+").unwrap();
    let grouped = cache.get_or_compile("(?:a+)").unwrap();

    assert!(!Arc::ptr_eq(&plain, &grouped));
    assert_eq!(cache.len(), 2);
}

#[test]
fn returned_matcher_was_compiled_from_its_description() {
    let cache = counting_cache(4);
    for description in [r"\d+", "[a-z]+", "x|y"] {
        let matcher = cache.get_or_compile(description).unwrap();
        assert_eq!(matcher.as_str(), description);
    }
}

// Purge

#[test]
fn purge_invalidates_entries() {
    let cache = counting_cache(4);
    let before = cache.get_or_compile("hello").unwrap();
    cache.purge();
    assert!(cache.is_empty());

    let after = cache.get_or_compile("hello").unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(cache.compiler().calls(), 2);
}

#[test]
fn purge_keeps_capacity() {
    let cache = counting_cache(3);
    cache.purge();
    assert_eq!(cache.capacity(), 3);
}

#[test]
fn purge_on_empty_cache_is_harmless() {
    let cache = counting_cache(2);
    cache.purge();
    cache.purge();
    assert!(cache.is_empty());
    assert_eq!(cache.stats().purges, 2);
}

// Capacity and eviction

#[test]
fn capacity_bound_evicts_least_recently_used() {
    let cache = counting_cache(3);
    let first = cache.get_or_compile("d0").unwrap();
    for i in 1..=3 {
        cache.get_or_compile(&format!("d{i}")).unwrap();
    }

    assert_eq!(cache.len(), 3);
    assert!(!cache.contains("d0"));

    let refetched = cache.get_or_compile("d0").unwrap();
    assert!(!Arc::ptr_eq(&first, &refetched));
    assert_eq!(cache.compiler().calls(), 5);
}

#[test]
fn hit_refreshes_recency() {
    let cache = counting_cache(2);
    cache.get_or_compile("d1").unwrap();
    cache.get_or_compile("d2").unwrap();
    cache.get_or_compile("d1").unwrap();
    cache.get_or_compile("d3").unwrap();

    assert!(cache.contains("d1"));
    assert!(!cache.contains("d2"));
    assert!(cache.contains("d3"));
    assert_eq!(cache.descriptions(), vec!["d3", "d1"]);
}

#[test]
fn contains_does_not_refresh_recency() {
    let cache = counting_cache(2);
    cache.get_or_compile("d1").unwrap();
    cache.get_or_compile("d2").unwrap();
    assert!(cache.contains("d1"));
    cache.get_or_compile("d3").unwrap();

    assert!(!cache.contains("d1"));
    assert!(cache.contains("d2"));
}

#[test]
fn capacity_one_keeps_only_latest() {
    let cache = counting_cache(1);
    cache.get_or_compile("a").unwrap();
    cache.get_or_compile("b").unwrap();
    assert_eq!(cache.descriptions(), vec!["b"]);
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn evicted_matcher_stays_usable() {
    let cache = counting_cache(1);
    let held = cache.get_or_compile(r"^\d{3}$").unwrap();
    cache.get_or_compile("other").unwrap();

    assert!(!cache.contains(r"^\d{3}$"));
    assert!(held.is_match("123"));
    assert_eq!(Arc::strong_count(&held), 1);
}

// Failures

#[test]
fn failures_are_not_cached() {
    let cache = counting_cache(4);
    cache.get_or_compile("ok").unwrap();
    let len_before = cache.len();

    let first = cache.get_or_compile("(?P<x").unwrap_err();
    let second = cache.get_or_compile("(?P<x").unwrap_err();

    assert_eq!(first.kind(), CompileErrorKind::Syntax);
    assert_eq!(first.kind(), second.kind());
    assert_eq!(cache.len(), len_before);
    assert!(!cache.contains("(?P<x"));
    assert_eq!(cache.compiler().calls(), 3);
    assert_eq!(cache.stats().compile_failures, 2);
}

#[test]
fn failure_does_not_disturb_recency() {
    let cache = counting_cache(2);
    cache.get_or_compile("d1").unwrap();
    cache.get_or_compile("d2").unwrap();
    let _ = cache.get_or_compile("(").unwrap_err();
    cache.get_or_compile("d3").unwrap();

    assert_eq!(cache.descriptions(), vec!["d3", "d2"]);
}

// set_capacity

#[test]
fn set_capacity_zero_is_rejected_without_mutation() {
    let cache = counting_cache(4);
    let before = cache.get_or_compile("keep").unwrap();

    let err = cache.set_capacity(0).unwrap_err();
    assert_eq!(err, CacheError::InvalidCapacity { requested: 0 });
    assert_eq!(cache.capacity(), 4);

    let after = cache.get_or_compile("keep").unwrap();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(cache.stats().resets, 0);
}

#[test]
fn set_capacity_resets_contents() {
    let cache = counting_cache(4);
    let before = cache.get_or_compile("a").unwrap();
    cache.get_or_compile("b").unwrap();

    cache.set_capacity(8).unwrap();
    assert_eq!(cache.capacity(), 8);
    assert!(cache.is_empty());

    let after = cache.get_or_compile("a").unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn set_capacity_enforces_new_bound() {
    let cache = counting_cache(8);
    cache.set_capacity(2).unwrap();
    for description in ["a", "b", "c"] {
        cache.get_or_compile(description).unwrap();
    }
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.descriptions(), vec!["c", "b"]);
}

// Statistics

#[test]
fn stats_track_operations() {
    let cache = counting_cache(1);
    cache.get_or_compile("a").unwrap();
    cache.get_or_compile("a").unwrap();
    cache.get_or_compile("b").unwrap();
    let _ = cache.get_or_compile("(").unwrap_err();
    cache.purge();
    cache.set_capacity(2).unwrap();

    assert_eq!(
        cache.stats(),
        CacheStats {
            hits: 1,
            misses: 3,
            inserts: 2,
            evictions: 1,
            compile_failures: 1,
            purges: 1,
            resets: 1,
        }
    );
    assert_eq!(cache.stats().lookups(), 4);
}

#[test]
fn debug_shows_size() {
    let cache = counting_cache(2);
    cache.get_or_compile("a").unwrap();
    let rendered = format!("{cache:?}");
    assert!(rendered.contains("MatcherCache"));
    assert!(rendered.contains("len: 1"));
}

// Concurrency

#[test]
fn concurrent_same_key_converges() {
    const THREADS: usize = 16;
    let cache = counting_cache(4);
    let barrier = Barrier::new(THREADS);

    let matchers: Vec<Arc<Matcher>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    cache.get_or_compile(r"^[a-z]+@[a-z]+\.com$").unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let calls = cache.compiler().calls();
    assert!((1..=THREADS).contains(&calls), "{calls} compiles");
    assert_eq!(cache.len(), 1);
    for matcher in &matchers {
        assert!(matcher.is_match("bob@mail.com"));
        assert!(!matcher.is_match("bob@mail"));
    }

    // Once settled, everyone gets the committed entry.
    let settled = cache.get_or_compile(r"^[a-z]+@[a-z]+\.com$").unwrap();
    let again = cache.get_or_compile(r"^[a-z]+@[a-z]+\.com$").unwrap();
    assert!(Arc::ptr_eq(&settled, &again));
}

#[test]
fn concurrent_mixed_keys_respect_capacity() {
    let cache = counting_cache(5);
    thread::scope(|s| {
        for t in 0..8 {
            let cache = &cache;
            s.spawn(move || {
                for i in 0..50 {
                    let description = format!("k{}", (t * 7 + i) % 12);
                    let matcher = cache.get_or_compile(&description).unwrap();
                    assert_eq!(matcher.as_str(), description);
                    assert!(cache.len() <= 5);
                }
            });
        }
    });
    assert_eq!(cache.len(), 5);
    assert_eq!(cache.stats().lookups(), 400);
}

#[test]
fn slow_compile_does_not_block_other_keys() {
    let (cache, started, release) = gated_cache("slow");

    thread::scope(|s| {
        let slow = s.spawn(|| cache.get_or_compile("slow"));
        started.recv().unwrap();

        // The gated compile is parked; other keys still hit and miss freely.
        let fast = cache.get_or_compile("fast").unwrap();
        assert!(fast.is_match("fast"));
        assert!(cache.contains("fast"));
        assert!(!cache.contains("slow"));

        release.send(()).unwrap();
        let slow = slow.join().unwrap().unwrap();
        assert!(slow.is_match("slow"));
    });

    assert!(cache.contains("slow"));
}

#[test]
fn compile_in_flight_across_purge_is_not_inserted() {
    let (cache, started, release) = gated_cache("slow");

    thread::scope(|s| {
        let slow = s.spawn(|| cache.get_or_compile("slow"));
        started.recv().unwrap();

        cache.purge();

        release.send(()).unwrap();
        let matcher = slow.join().unwrap().unwrap();
        assert!(matcher.is_match("slow"));
    });

    assert!(!cache.contains("slow"));
    assert!(cache.is_empty());
}

#[test]
fn compile_in_flight_across_resize_is_not_inserted() {
    let (cache, started, release) = gated_cache("slow");

    thread::scope(|s| {
        let slow = s.spawn(|| cache.get_or_compile("slow"));
        started.recv().unwrap();

        cache.set_capacity(2).unwrap();

        release.send(()).unwrap();
        slow.join().unwrap().unwrap();
    });

    assert!(cache.is_empty());
    assert_eq!(cache.capacity(), 2);
}
