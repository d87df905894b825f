//! tre cache - bounded, thread-safe cache of compiled matchers.
//!
//! [`MatcherCache`] maps a description string to a shared
//! `Arc<Matcher>`, compiling on a miss and evicting the least recently used
//! entry once it holds `capacity` entries.
//!
//! # Contract
//!
//! - **Hits** return the stored matcher (same `Arc`) and refresh its recency.
//! - **Misses** compile outside the lock, then insert as most recently used.
//! - **Failures** are returned to the caller and never cached.
//! - **Purge** and **resize** drop every entry. Nothing inserted before them
//!   is returned afterwards, including compiles that were in flight.
//!
//! # Concurrency
//!
//! One `parking_lot::Mutex` guards the map and its recency order together.
//! Compilation happens outside it, so a slow compile never blocks lookups of
//! other descriptions. Concurrent misses on the same description may each
//! compile; the last insert wins and every caller gets a valid matcher
//! (at-least-once compilation, not exactly-once).
//!
//! # Keys
//!
//! Descriptions are compared byte-for-byte. `a+` and `(?:a+)` are different
//! entries even though they match the same text.

mod cache;
mod config;
mod error;
mod stats;

pub use cache::MatcherCache;
pub use config::{CacheConfig, CAPACITY_ENV, DEFAULT_CAPACITY};
pub use error::CacheError;
pub use stats::CacheStats;
