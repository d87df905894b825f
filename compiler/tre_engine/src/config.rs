//! Engine configuration.

/// Default limit on the compiled program size, in bytes.
const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Default limit on the lazy DFA cache size, in bytes.
const DEFAULT_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);

/// Default limit on syntactic nesting depth.
const DEFAULT_NEST_LIMIT: u32 = 250;

/// Options applied to every description compiled through
/// [`compile_with`](crate::compile_with) or a [`RegexCompiler`](crate::RegexCompiler).
///
/// The defaults match the `regex` crate's own defaults, so
/// `EngineConfig::default()` compiles exactly like `regex::Regex::new`.
///
/// Flags set here act as defaults; inline flags inside a description
/// (`(?i)`, `(?m:...)`) still override them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "mirrors the independent regex flags one-to-one"
)]
pub struct EngineConfig {
    /// Upper bound on the compiled program size, in bytes.
    pub size_limit: usize,
    /// Upper bound on the lazy DFA cache, in bytes.
    pub dfa_size_limit: usize,
    /// Maximum nesting depth of groups and repetitions.
    pub nest_limit: u32,
    /// Match letters case-insensitively.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Unicode-aware classes and case folding.
    pub unicode: bool,
}

impl EngineConfig {
    /// Create a configuration with the default limits and flags.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
            nest_limit: DEFAULT_NEST_LIMIT,
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            unicode: true,
        }
    }

    /// Set the compiled program size limit.
    #[must_use]
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = bytes;
        self
    }

    /// Set the lazy DFA cache limit.
    #[must_use]
    pub fn with_dfa_size_limit(mut self, bytes: usize) -> Self {
        self.dfa_size_limit = bytes;
        self
    }

    /// Set the nesting limit.
    #[must_use]
    pub fn with_nest_limit(mut self, limit: u32) -> Self {
        self.nest_limit = limit;
        self
    }

    /// Enable or disable case-insensitive matching.
    #[must_use]
    pub fn with_case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Enable or disable multi-line anchors.
    #[must_use]
    pub fn with_multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Enable or disable `.` matching newlines.
    #[must_use]
    pub fn with_dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Enable or disable Unicode mode.
    #[must_use]
    pub fn with_unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    /// Build a `regex::Regex` for `description` under these options.
    pub(crate) fn build(&self, description: &str) -> Result<regex::Regex, regex::Error> {
        regex::RegexBuilder::new(description)
            .size_limit(self.size_limit)
            .dfa_size_limit(self.dfa_size_limit)
            .nest_limit(self.nest_limit)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .unicode(self.unicode)
            .build()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
