//! Compile errors.

/// Coarse classification of a compile failure.
///
/// Two failures for the same description always have the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompileErrorKind {
    /// The description is not valid pattern syntax.
    Syntax,
    /// The description is valid but compiles past the configured size limit.
    TooBig,
}

impl std::fmt::Display for CompileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorKind::Syntax => write!(f, "syntax"),
            CompileErrorKind::TooBig => write!(f, "too big"),
        }
    }
}

/// A description could not be compiled into a [`Matcher`](crate::Matcher).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed to compile pattern `{description}`: {source}")]
pub struct CompileError {
    description: String,
    #[source]
    source: regex::Error,
}

impl CompileError {
    /// Wrap a `regex` error together with the description that produced it.
    pub fn new(description: impl Into<String>, source: regex::Error) -> Self {
        Self {
            description: description.into(),
            source,
        }
    }

    /// The description that failed to compile.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// What kind of failure this is.
    pub fn kind(&self) -> CompileErrorKind {
        match &self.source {
            regex::Error::CompiledTooBig(_) => CompileErrorKind::TooBig,
            // `regex::Error` is non-exhaustive.
            _ => CompileErrorKind::Syntax,
        }
    }
}
