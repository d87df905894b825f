//! tre engine - compiled matchers and the compile step.
//!
//! This crate turns a description string into a [`Matcher`]. Matching itself
//! is delegated to the `regex` crate; `tre_engine` only owns:
//!
//! - [`Matcher`]: an immutable, cheaply shareable compiled pattern
//! - [`compile`] / [`compile_with`]: the compile function
//! - [`PatternCompiler`]: the seam the cache compiles through
//! - [`CompileError`]: why a description could not be compiled
//!
//! # Determinism
//!
//! Compiling the same description with the same [`EngineConfig`] always
//! yields an equivalent matcher or always fails with the same
//! [`CompileErrorKind`]. The cache in `tre_cache` relies on this.

mod compiler;
mod config;
mod error;
mod matcher;

pub use compiler::{compile, compile_with, PatternCompiler, RegexCompiler};
pub use config::EngineConfig;
pub use error::{CompileError, CompileErrorKind};
pub use matcher::Matcher;
