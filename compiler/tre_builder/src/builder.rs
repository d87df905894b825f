//! The fluent pattern builder.

use std::fmt::Write as _;

use tre_engine::{CompileError, Matcher};

// Character classes and escapes.
const CLASS_WHITESPACE: &str = r"\s";
const CLASS_NOT_WHITESPACE: &str = r"\S";
const CLASS_DIGIT: &str = r"\d";
const CLASS_NOT_DIGIT: &str = r"\D";
const CLASS_WORD: &str = r"\w";
const CLASS_NOT_WORD: &str = r"\W";
const WORD_BOUNDARY: &str = r"\b";
const NOT_WORD_BOUNDARY: &str = r"\B";
const TAB: &str = r"\t";
const NEWLINE: &str = r"\n";
const CARRIAGE_RETURN: &str = r"\r";

// Anchors.
const START_ANCHOR: &str = "^";
const END_ANCHOR: &str = "$";
const START_OF_STRING: &str = r"\A";
const END_OF_STRING: &str = r"\z";

/// Incrementally assembles a pattern description.
///
/// Methods consume and return the builder so calls chain:
///
/// ```text
/// let b = PatternBuilder::new().literal("v").digit().one_or_more();
/// assert_eq!(b.as_str(), r"v\d+");
/// ```
///
/// Quantifier methods (`maybe`, `exactly`, ...) apply to whatever was
/// emitted immediately before them, exactly as in written pattern syntax.
/// Wrap multi-character pieces in a group first when the quantifier should
/// cover all of them.
///
/// Group methods take the inner builder by reference so one fragment can be
/// reused several times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PatternBuilder {
    buf: String,
}

impl PatternBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty builder with room for `capacity` bytes of description.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// The description built so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// A copy of the description built so far.
    pub fn build(&self) -> String {
        self.buf.clone()
    }

    /// Finish building and take the description.
    pub fn into_description(self) -> String {
        self.buf
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Compile the description without going through any cache.
    pub fn compile(&self) -> Result<Matcher, CompileError> {
        tre_engine::compile(&self.buf)
    }

    #[inline]
    fn push(mut self, s: &str) -> Self {
        self.buf.push_str(s);
        self
    }

    // Text

    /// Append `s` verbatim, as pattern syntax.
    #[must_use]
    pub fn raw(self, s: &str) -> Self {
        self.push(s)
    }

    /// Append `s` as literal text, escaping every metacharacter.
    #[must_use]
    pub fn literal(self, s: &str) -> Self {
        let escaped = regex::escape(s);
        self.push(&escaped)
    }

    // Anchors and boundaries

    /// `^`: start of input (start of line in multi-line mode).
    #[must_use]
    pub fn start_anchor(self) -> Self {
        self.push(START_ANCHOR)
    }

    /// `$`: end of input (end of line in multi-line mode).
    #[must_use]
    pub fn end_anchor(self) -> Self {
        self.push(END_ANCHOR)
    }

    /// `\A`: start of input regardless of mode.
    #[must_use]
    pub fn start_of_string(self) -> Self {
        self.push(START_OF_STRING)
    }

    /// `\z`: end of input regardless of mode.
    #[must_use]
    pub fn end_of_string(self) -> Self {
        self.push(END_OF_STRING)
    }

    /// `\b`
    #[must_use]
    pub fn word_boundary(self) -> Self {
        self.push(WORD_BOUNDARY)
    }

    /// `\B`
    #[must_use]
    pub fn not_word_boundary(self) -> Self {
        self.push(NOT_WORD_BOUNDARY)
    }

    // Groups

    /// `(inner)`: capturing group.
    #[must_use]
    pub fn group(mut self, inner: &PatternBuilder) -> Self {
        let _ = write!(self.buf, "({})", inner.as_str());
        self
    }

    /// `(?:inner)`: non-capturing group.
    #[must_use]
    pub fn non_capturing_group(mut self, inner: &PatternBuilder) -> Self {
        let _ = write!(self.buf, "(?:{})", inner.as_str());
        self
    }

    /// `(?P<name>inner)`: named capturing group.
    ///
    /// `name` is not validated; an invalid name surfaces as a compile error.
    #[must_use]
    pub fn named_group(mut self, name: &str, inner: &PatternBuilder) -> Self {
        let _ = write!(self.buf, "(?P<{name}>{})", inner.as_str());
        self
    }

    /// `(?flags:inner)`: non-capturing group with inline flags.
    #[must_use]
    pub fn group_with_flags(mut self, flags: &str, inner: &PatternBuilder) -> Self {
        let _ = write!(self.buf, "(?{flags}:{})", inner.as_str());
        self
    }

    /// `(?flags)`: set inline flags for the rest of the enclosing group.
    #[must_use]
    pub fn with_flags(mut self, flags: &str) -> Self {
        let _ = write!(self.buf, "(?{flags})");
        self
    }

    /// Alternation of everything built so far with each of `alternatives`.
    ///
    /// The result is wrapped in a non-capturing group:
    /// `(?:self|alt1|alt2)`. With no alternatives the builder is unchanged.
    #[must_use]
    pub fn or<'a>(self, alternatives: impl IntoIterator<Item = &'a PatternBuilder>) -> Self {
        let mut alternatives = alternatives.into_iter().peekable();
        if alternatives.peek().is_none() {
            return self;
        }

        let mut buf = String::with_capacity(self.buf.len() + 8);
        buf.push_str("(?:");
        buf.push_str(&self.buf);
        for alt in alternatives {
            buf.push('|');
            buf.push_str(alt.as_str());
        }
        buf.push(')');
        Self { buf }
    }

    // Quantifiers

    /// `?`: zero or one.
    #[must_use]
    pub fn maybe(self) -> Self {
        self.push("?")
    }

    /// `+`: one or more.
    #[must_use]
    pub fn one_or_more(self) -> Self {
        self.push("+")
    }

    /// `*`: zero or more.
    #[must_use]
    pub fn zero_or_more(self) -> Self {
        self.push("*")
    }

    /// `{n}`: exactly `n` times.
    #[must_use]
    pub fn exactly(mut self, n: usize) -> Self {
        let _ = write!(self.buf, "{{{n}}}");
        self
    }

    /// `{n,}`: at least `n` times.
    #[must_use]
    pub fn at_least(mut self, n: usize) -> Self {
        let _ = write!(self.buf, "{{{n},}}");
        self
    }

    /// `{min,max}`: between `min` and `max` times, inclusive.
    #[must_use]
    pub fn between(mut self, min: usize, max: usize) -> Self {
        let _ = write!(self.buf, "{{{min},{max}}}");
        self
    }

    /// `?` after a quantifier: make it non-greedy.
    #[must_use]
    pub fn lazy(self) -> Self {
        self.push("?")
    }

    // Classes

    /// `\s`
    #[must_use]
    pub fn whitespace(self) -> Self {
        self.push(CLASS_WHITESPACE)
    }

    /// `\S`
    #[must_use]
    pub fn not_whitespace(self) -> Self {
        self.push(CLASS_NOT_WHITESPACE)
    }

    /// `\d`
    #[must_use]
    pub fn digit(self) -> Self {
        self.push(CLASS_DIGIT)
    }

    /// `\D`
    #[must_use]
    pub fn not_digit(self) -> Self {
        self.push(CLASS_NOT_DIGIT)
    }

    /// `\w`
    #[must_use]
    pub fn word_char(self) -> Self {
        self.push(CLASS_WORD)
    }

    /// `\W`
    #[must_use]
    pub fn not_word_char(self) -> Self {
        self.push(CLASS_NOT_WORD)
    }

    /// `\t`
    #[must_use]
    pub fn tab(self) -> Self {
        self.push(TAB)
    }

    /// `\n`
    #[must_use]
    pub fn newline(self) -> Self {
        self.push(NEWLINE)
    }

    /// `\r`
    #[must_use]
    pub fn carriage_return(self) -> Self {
        self.push(CARRIAGE_RETURN)
    }

    /// `[set]`: any one character of `set`.
    ///
    /// `set` is class syntax and is not escaped, so ranges like `a-z` work.
    #[must_use]
    pub fn any_of(mut self, set: &str) -> Self {
        let _ = write!(self.buf, "[{set}]");
        self
    }

    /// `[^set]`: any one character not in `set`.
    #[must_use]
    pub fn not_any_of(mut self, set: &str) -> Self {
        let _ = write!(self.buf, "[^{set}]");
        self
    }

    /// `[from-to]`
    #[must_use]
    pub fn range(mut self, from: char, to: char) -> Self {
        let _ = write!(self.buf, "[{from}-{to}]");
        self
    }

    /// `[[:class:]]`, e.g. `alnum`, `alpha`, `digit`.
    #[must_use]
    pub fn posix_class(mut self, class: &str) -> Self {
        let _ = write!(self.buf, "[[:{class}:]]");
        self
    }

    /// `[^[:class:]]`
    #[must_use]
    pub fn not_posix_class(mut self, class: &str) -> Self {
        let _ = write!(self.buf, "[^[:{class}:]]");
        self
    }

    /// `\p{property}`, e.g. `Greek`.
    #[must_use]
    pub fn unicode_property(mut self, property: &str) -> Self {
        let _ = write!(self.buf, r"\p{{{property}}}");
        self
    }

    /// `\P{property}`
    #[must_use]
    pub fn not_unicode_property(mut self, property: &str) -> Self {
        let _ = write!(self.buf, r"\P{{{property}}}");
        self
    }
}

impl std::fmt::Display for PatternBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buf)
    }
}

impl From<PatternBuilder> for String {
    fn from(builder: PatternBuilder) -> Self {
        builder.buf
    }
}

/// A new builder matching one digit.
pub fn digit() -> PatternBuilder {
    PatternBuilder::new().digit()
}

/// A new builder matching one word character.
pub fn word_char() -> PatternBuilder {
    PatternBuilder::new().word_char()
}

/// A new builder matching one whitespace character.
pub fn whitespace() -> PatternBuilder {
    PatternBuilder::new().whitespace()
}
