//! Cached compilation for builders.

#![expect(
    clippy::disallowed_types,
    reason = "Arc is the handle type returned by MatcherCache"
)]

use std::sync::Arc;

use tre_builder::PatternBuilder;
use tre_cache::MatcherCache;
use tre_engine::{CompileError, Matcher, PatternCompiler};

use crate::shared_cache;

/// Compile a builder's description through a [`MatcherCache`].
pub trait CompileExt {
    /// Look the description up in `cache`, compiling it on a miss.
    fn compile_cached<C: PatternCompiler>(
        &self,
        cache: &MatcherCache<C>,
    ) -> Result<Arc<Matcher>, CompileError>;

    /// Look the description up in the [`shared_cache`].
    fn compile_shared(&self) -> Result<Arc<Matcher>, CompileError>;
}

impl CompileExt for PatternBuilder {
    fn compile_cached<C: PatternCompiler>(
        &self,
        cache: &MatcherCache<C>,
    ) -> Result<Arc<Matcher>, CompileError> {
        cache.get_or_compile(self.as_str())
    }

    fn compile_shared(&self) -> Result<Arc<Matcher>, CompileError> {
        self.compile_cached(shared_cache())
    }
}
