//! Compiled matcher handle.
//!
//! A [`Matcher`] is immutable once built. Every query takes `&self`, so one
//! matcher can be shared across threads (usually behind an `Arc` handed out by
//! the cache) without further locking.

use std::borrow::Cow;

/// A compiled pattern.
///
/// Wraps a `regex::Regex` and exposes the query surface the rest of `tre`
/// relies on. Use [`as_regex`](Self::as_regex) for anything not covered here.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: regex::Regex,
}

impl Matcher {
    /// Wrap an already compiled `regex::Regex`.
    pub fn from_regex(regex: regex::Regex) -> Self {
        Self { regex }
    }

    /// The description this matcher was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The underlying `regex::Regex`.
    pub fn as_regex(&self) -> &regex::Regex {
        &self.regex
    }

    /// Whether the pattern matches anywhere in `text`.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Text of the leftmost match.
    pub fn find<'h>(&self, text: &'h str) -> Option<&'h str> {
        self.regex.find(text).map(|m| m.as_str())
    }

    /// Text of the leftmost match starting the search at byte offset `start`.
    ///
    /// Anchors and word boundaries still see the text before `start`.
    /// A `start` past the end of `text` finds nothing.
    pub fn find_at<'h>(&self, text: &'h str, start: usize) -> Option<&'h str> {
        if start > text.len() {
            return None;
        }
        self.regex.find_at(text, start).map(|m| m.as_str())
    }

    /// Byte range `(start, end)` of the leftmost match.
    pub fn find_index(&self, text: &str) -> Option<(usize, usize)> {
        self.regex.find(text).map(|m| (m.start(), m.end()))
    }

    /// All successive non-overlapping matches, at most `limit` of them.
    pub fn find_all<'h>(&self, text: &'h str, limit: Option<usize>) -> Vec<&'h str> {
        let matches = self.regex.find_iter(text).map(|m| m.as_str());
        match limit {
            Some(n) => matches.take(n).collect(),
            None => matches.collect(),
        }
    }

    /// Byte ranges of all successive non-overlapping matches, at most `limit`.
    pub fn find_all_index(&self, text: &str, limit: Option<usize>) -> Vec<(usize, usize)> {
        let matches = self.regex.find_iter(text).map(|m| (m.start(), m.end()));
        match limit {
            Some(n) => matches.take(n).collect(),
            None => matches.collect(),
        }
    }

    /// The leftmost match and its groups.
    ///
    /// Index 0 is the whole match; index `i` is group `i`, `None` when that
    /// group did not participate.
    pub fn captures<'h>(&self, text: &'h str) -> Option<Vec<Option<&'h str>>> {
        self.regex
            .captures(text)
            .map(|caps| caps.iter().map(|m| m.map(|m| m.as_str())).collect())
    }

    /// Groups for every successive non-overlapping match, at most `limit`.
    pub fn captures_all<'h>(
        &self,
        text: &'h str,
        limit: Option<usize>,
    ) -> Vec<Vec<Option<&'h str>>> {
        let all = self
            .regex
            .captures_iter(text)
            .map(|caps| caps.iter().map(|m| m.map(|m| m.as_str())).collect());
        match limit {
            Some(n) => all.take(n).collect(),
            None => all.collect(),
        }
    }

    /// Text captured by the group called `name` in the leftmost match.
    pub fn named_capture<'h>(&self, text: &'h str, name: &str) -> Option<&'h str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.name(name))
            .map(|m| m.as_str())
    }

    /// Group names in order; unnamed groups (including group 0) are `None`.
    pub fn capture_names(&self) -> Vec<Option<&str>> {
        self.regex.capture_names().collect()
    }

    /// Number of groups, counting the implicit whole-match group.
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    /// Expand `template` (`$1`, `${name}`) against the leftmost match.
    ///
    /// Returns `None` when there is no match.
    pub fn expand(&self, template: &str, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let mut out = String::new();
        caps.expand(template, &mut out);
        Some(out)
    }

    /// Replace every match with `replacement` (`$1`/`${name}` are expanded).
    pub fn replace_all<'h>(&self, text: &'h str, replacement: &str) -> Cow<'h, str> {
        self.regex.replace_all(text, replacement)
    }

    /// Replace the first `limit` matches with `replacement`.
    ///
    /// A `limit` of 0 replaces every match, like [`Matcher::replace_all`].
    pub fn replacen<'h>(&self, text: &'h str, limit: usize, replacement: &str) -> Cow<'h, str> {
        self.regex.replacen(text, limit, replacement)
    }

    /// Split `text` on every match.
    pub fn split<'h>(&self, text: &'h str) -> Vec<&'h str> {
        self.regex.split(text).collect()
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
