//! tre - build patterns fluently, compile them once.
//!
//! This crate ties the workspace together:
//!
//! - [`PatternBuilder`] and [`blueprints`] (from `tre_builder`) produce
//!   description strings
//! - [`Matcher`] and [`compile`] (from `tre_engine`) turn them into matchers
//! - [`MatcherCache`] (from `tre_cache`) deduplicates compilation
//!
//! plus a process-wide [`shared_cache`] for hosts that do not want to thread a
//! cache through their code, and [`CompileExt`] to compile a builder through
//! either.
//!
//! # Example
//!
//! ```text
//! use tre::{blueprints, CompileExt, MatcherCache};
//!
//! let cache = MatcherCache::new();
//! let email = blueprints::email().compile_cached(&cache)?;
//! assert!(email.is_match("test@example.com"));
//! ```
//!
//! Prefer an explicitly constructed [`MatcherCache`] owned by your
//! application; the shared instance exists for convenience at the top level.

mod ext;
mod shared;

use std::sync::Once;

pub use ext::CompileExt;
pub use shared::{purge_shared_cache, set_shared_cache_capacity, shared_cache};
pub use tre_builder::{blueprints, digit, whitespace, word_char, PatternBuilder};
pub use tre_cache::{
    CacheConfig, CacheError, CacheStats, MatcherCache, CAPACITY_ENV, DEFAULT_CAPACITY,
};
pub use tre_engine::{
    compile, compile_with, CompileError, CompileErrorKind, EngineConfig, Matcher,
    PatternCompiler, RegexCompiler,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tre_cache=debug` or `RUST_LOG=tre_cache=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
