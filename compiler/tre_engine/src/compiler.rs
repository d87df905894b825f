//! The compile step.
//!
//! [`compile`] is the plain function; [`PatternCompiler`] is the seam the
//! cache goes through, so tests and hosts can substitute their own compile
//! step (counting calls, injecting latency, alternative configs).

use crate::{CompileError, EngineConfig, Matcher};

/// Compile `description` with the default [`EngineConfig`].
pub fn compile(description: &str) -> Result<Matcher, CompileError> {
    compile_with(description, &EngineConfig::default())
}

/// Compile `description` under `config`.
pub fn compile_with(description: &str, config: &EngineConfig) -> Result<Matcher, CompileError> {
    let regex = config
        .build(description)
        .map_err(|source| CompileError::new(description, source))?;
    Ok(Matcher::from_regex(regex))
}

/// Something that turns a description into a [`Matcher`].
///
/// Implementations must be deterministic: the same description always
/// compiles to an equivalent matcher or always fails the same way. They are
/// called without any cache lock held and may run concurrently.
///
/// Any `Fn(&str) -> Result<Matcher, CompileError>` closure is a compiler.
pub trait PatternCompiler: Send + Sync {
    /// Compile one description.
    fn compile(&self, description: &str) -> Result<Matcher, CompileError>;
}

impl<F> PatternCompiler for F
where
    F: Fn(&str) -> Result<Matcher, CompileError> + Send + Sync,
{
    fn compile(&self, description: &str) -> Result<Matcher, CompileError> {
        self(description)
    }
}

/// The default compiler: `regex` with a fixed [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegexCompiler {
    config: EngineConfig,
}

impl RegexCompiler {
    /// A compiler using the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A compiler using `config` for every description.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration applied to every description.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl PatternCompiler for RegexCompiler {
    fn compile(&self, description: &str) -> Result<Matcher, CompileError> {
        compile_with(description, &self.config)
    }
}
