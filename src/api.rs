// api.rs - Idiomatic Rust API over compiled patterns.
//
// Wraps `Pattern`/`Matcher` with Rust-native types: Regex, RegexBuilder,
// Match, Captures and the match iterators.

use std::ops::Range;
use std::sync::Arc;

use crate::cache::PatternCache;
use crate::error::{MatchError, RegexError};
use crate::matcher::Matcher;
use crate::options::{MatchLimits, PatternFlags};
use crate::pattern::Pattern;
use crate::regcomp::compile_body;

/// A compiled regular expression.
///
/// Patterns use the delimited `preg` form. A match aborted by the depth or
/// backtrack limit counts as "no match" for the plain methods; the `try_`
/// variants report it.
///
/// # Examples
///
/// ```
/// use pregex::api::Regex;
///
/// let re = Regex::new(r"/\d+/").unwrap();
/// assert!(re.is_match("hello 42"));
///
/// let m = re.find("hello 42").unwrap();
/// assert_eq!(m.as_str(), "42");
/// assert_eq!(m.start(), 6);
/// assert_eq!(m.end(), 8);
/// ```
#[derive(Clone)]
pub struct Regex {
    inner: Arc<Pattern>,
}

impl Regex {
    /// Compile a delimited pattern such as `/ab+c/i`.
    pub fn new(pattern: &str) -> Result<Regex, RegexError> {
        Self::new_bytes(pattern.as_bytes())
    }

    /// Compile a delimited pattern from raw bytes.
    pub fn new_bytes(pattern: &[u8]) -> Result<Regex, RegexError> {
        let inner = Pattern::compile(pattern, PatternFlags::empty())?;
        Ok(Regex {
            inner: Arc::new(inner),
        })
    }

    /// Compile through the process-wide [`PatternCache`]; repeated calls with
    /// the same text share one compiled pattern.
    pub fn cached(pattern: &str) -> Result<Regex, RegexError> {
        let inner = PatternCache::global().get_or_compile(pattern)?;
        Ok(Regex { inner })
    }

    /// Create a [`RegexBuilder`] for a bare pattern body without delimiters.
    pub fn builder(body: &str) -> RegexBuilder {
        RegexBuilder::new(body)
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Arc<Pattern> {
        &self.inner
    }

    /// The pattern text as given.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.inner.source()).unwrap_or_default()
    }

    /// Return the first match in `text`, or `None` if no match.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_bytes(text.as_bytes())
    }

    /// Return the first match in `text` (as bytes), or `None` if no match.
    pub fn find_bytes<'t>(&self, text: &'t [u8]) -> Option<Match<'t>> {
        self.try_find(text).ok().flatten()
    }

    /// Like [`find_bytes`](Self::find_bytes), surfacing match errors.
    pub fn try_find<'t>(&self, text: &'t [u8]) -> Result<Option<Match<'t>>, MatchError> {
        let mut m = self.inner.matcher(text);
        if !m.find()? {
            return Ok(None);
        }
        Ok(Match::from_matcher(&m, 0))
    }

    /// Check whether `text` matches the pattern anywhere.
    pub fn is_match(&self, text: &str) -> bool {
        self.is_match_bytes(text.as_bytes())
    }

    /// Check whether `text` (as bytes) matches the pattern anywhere.
    pub fn is_match_bytes(&self, text: &[u8]) -> bool {
        self.inner.is_match(text).unwrap_or(false)
    }

    /// Return the first match with all capture groups, or `None`.
    pub fn captures<'t>(&'t self, text: &'t str) -> Option<Captures<'t>> {
        self.captures_bytes(text.as_bytes())
    }

    /// Return the first match with all capture groups (bytes), or `None`.
    pub fn captures_bytes<'t>(&'t self, text: &'t [u8]) -> Option<Captures<'t>> {
        self.try_captures(text).ok().flatten()
    }

    /// Like [`captures_bytes`](Self::captures_bytes), surfacing match errors.
    pub fn try_captures<'t>(&'t self, text: &'t [u8]) -> Result<Option<Captures<'t>>, MatchError> {
        let mut m = self.inner.matcher(text);
        if !m.find()? {
            return Ok(None);
        }
        Ok(Some(Captures::from_matcher(&m)))
    }

    /// Iterate over all successive matches in `text`. An empty match is
    /// followed by a search one character further on.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> FindIter<'r, 't> {
        self.find_iter_bytes(text.as_bytes())
    }

    /// Iterate over all successive matches in `text` (as bytes).
    pub fn find_iter_bytes<'r, 't>(&'r self, text: &'t [u8]) -> FindIter<'r, 't> {
        FindIter {
            matcher: self.inner.matcher(text),
            error: None,
        }
    }

    /// Iterate over the captures of every match in `text`.
    pub fn captures_iter<'t>(&'t self, text: &'t str) -> CaptureMatches<'t> {
        CaptureMatches {
            matcher: self.inner.matcher(text.as_bytes()),
            error: None,
        }
    }

    /// Split `text` at every match.
    pub fn split<'r, 't>(&'r self, text: &'t str) -> Split<'r, 't> {
        Split {
            finder: self.find_iter(text),
            text,
            last: 0,
            done: false,
        }
    }

    /// Return the number of capture groups in the pattern (excluding group 0).
    pub fn captures_len(&self) -> usize {
        self.inner.group_count()
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

impl std::str::FromStr for Regex {
    type Err = RegexError;

    fn from_str(s: &str) -> Result<Regex, RegexError> {
        Regex::new(s)
    }
}

// === RegexBuilder ===

/// Builder for compiling a [`Regex`] from a bare body with explicit flags.
///
/// # Examples
///
/// ```
/// use pregex::api::Regex;
///
/// let re = Regex::builder(r"hello world")
///     .case_insensitive(true)
///     .build()
///     .unwrap();
/// assert!(re.is_match("Hello World"));
/// ```
pub struct RegexBuilder {
    body: Vec<u8>,
    flags: PatternFlags,
    limits: MatchLimits,
}

impl RegexBuilder {
    /// Create a new builder for the given pattern body.
    pub fn new(body: &str) -> Self {
        RegexBuilder {
            body: body.as_bytes().to_vec(),
            flags: PatternFlags::empty(),
            limits: MatchLimits::default(),
        }
    }

    fn set(mut self, flag: PatternFlags, yes: bool) -> Self {
        self.flags.set(flag, yes);
        self
    }

    /// `i`: case-insensitive matching.
    pub fn case_insensitive(self, yes: bool) -> Self {
        self.set(PatternFlags::IGNORE_CASE, yes)
    }

    /// `s`: `.` also matches `\n`.
    pub fn dot_matches_newline(self, yes: bool) -> Self {
        self.set(PatternFlags::DOTALL, yes)
    }

    /// `m`: `^`/`$` match at every line boundary.
    pub fn multi_line(self, yes: bool) -> Self {
        self.set(PatternFlags::MULTILINE, yes)
    }

    /// `x`: whitespace and `#` comments ignored.
    pub fn extended(self, yes: bool) -> Self {
        self.set(PatternFlags::EXTENDED, yes)
    }

    /// `U`: quantifiers lazy by default.
    pub fn ungreedy(self, yes: bool) -> Self {
        self.set(PatternFlags::UNGREEDY, yes)
    }

    /// `A`: matches must start at the search position.
    pub fn anchored(self, yes: bool) -> Self {
        self.set(PatternFlags::ANCHORED, yes)
    }

    /// `D`: `$` matches only at the very end.
    pub fn dollar_end_only(self, yes: bool) -> Self {
        self.set(PatternFlags::DOLLAR_END_ONLY, yes)
    }

    /// `X`: unknown escapes are errors.
    pub fn strict(self, yes: bool) -> Self {
        self.set(PatternFlags::STRICT, yes)
    }

    /// `u`: UTF-8 pattern and subjects.
    pub fn utf8(self, yes: bool) -> Self {
        self.set(PatternFlags::UTF8, yes)
    }

    /// Add raw flags.
    pub fn flags(mut self, flags: PatternFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Maximum backtracking recursion depth.
    pub fn depth_limit(mut self, n: u32) -> Self {
        self.limits.depth_limit = n;
        self
    }

    /// Maximum node steps per start position; 0 for no limit.
    pub fn backtrack_limit(mut self, n: u64) -> Self {
        self.limits.backtrack_limit = n;
        self
    }

    /// Maximum bytes of native stack one search may use; 0 for no limit.
    pub fn stack_limit(mut self, bytes: usize) -> Self {
        self.limits.stack_limit = bytes;
        self
    }

    /// Compile the pattern into a [`Regex`].
    pub fn build(self) -> Result<Regex, RegexError> {
        let inner = compile_body(&self.body, &self.body, self.flags)?.with_limits(self.limits);
        Ok(Regex {
            inner: Arc::new(inner),
        })
    }
}

// === Match ===

/// A single match result referencing the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t [u8],
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    fn from_matcher(m: &Matcher<'_, 't>, i: usize) -> Option<Match<'t>> {
        Some(Match {
            text: m.subject(),
            start: m.group_start(i)?,
            end: m.group_end(i)?,
        })
    }

    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text as a byte slice.
    pub fn as_bytes(&self) -> &'t [u8] {
        &self.text[self.start..self.end]
    }

    /// The matched text as a `&str`.
    ///
    /// # Panics
    ///
    /// Panics if the matched bytes are not valid UTF-8, which can happen
    /// when a pattern without the `u` flag splits a multi-byte character.
    pub fn as_str(&self) -> &'t str {
        std::str::from_utf8(self.as_bytes()).expect("match is not valid UTF-8")
    }

    /// Returns the length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the match is empty (zero-length).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Captures ===

/// All capture groups from a single match.
///
/// Group 0 is the entire match. Groups 1..N correspond to `(...)` in the pattern.
pub struct Captures<'t> {
    text: &'t [u8],
    spans: Vec<Option<(usize, usize)>>,
    pattern: &'t Pattern,
}

impl<'t> Captures<'t> {
    fn from_matcher(m: &Matcher<'t, 't>) -> Captures<'t> {
        let spans = (0..=m.group_count())
            .map(|i| Some((m.group_start(i)?, m.group_end(i)?)))
            .collect();
        Captures {
            text: m.subject(),
            spans,
            pattern: m.pattern(),
        }
    }

    /// Get capture group `i`, or `None` if the group did not participate.
    ///
    /// Group 0 is the entire match.
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        let (start, end) = (*self.spans.get(i)?)?;
        Some(Match {
            text: self.text,
            start,
            end,
        })
    }

    /// Get the group with the given name, or `None`.
    pub fn name(&self, name: &str) -> Option<Match<'t>> {
        self.get(self.pattern.group_index(name)?)
    }

    /// Number of capture groups (including group 0).
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no capture groups (never the case for a match).
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate over all capture groups.
    pub fn iter(&self) -> CapturesIter<'_, 't> {
        CapturesIter {
            captures: self,
            index: 0,
        }
    }
}

impl std::fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for i in 0..self.len() {
            list.entry(&self.get(i));
        }
        list.finish()
    }
}

// === CapturesIter ===

/// Iterator over capture groups in a [`Captures`].
pub struct CapturesIter<'c, 't> {
    captures: &'c Captures<'t>,
    index: usize,
}

impl<'c, 't> Iterator for CapturesIter<'c, 't> {
    type Item = Option<Match<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.captures.len() {
            return None;
        }
        let m = self.captures.get(self.index);
        self.index += 1;
        Some(m)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.captures.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CapturesIter<'_, '_> {}

// === FindIter ===

/// Iterator over all successive matches in a text. Stops early if a match
/// attempt hits a limit; [`error`](Self::error) then reports it.
pub struct FindIter<'r, 't> {
    matcher: Matcher<'r, 't>,
    error: Option<MatchError>,
}

impl FindIter<'_, '_> {
    pub fn error(&self) -> Option<MatchError> {
        self.error
    }
}

impl<'r, 't> Iterator for FindIter<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        match self.matcher.find() {
            Ok(true) => Match::from_matcher(&self.matcher, 0),
            Ok(false) => None,
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

// === CaptureMatches ===

/// Iterator over the [`Captures`] of every match in a text.
pub struct CaptureMatches<'t> {
    matcher: Matcher<'t, 't>,
    error: Option<MatchError>,
}

impl CaptureMatches<'_> {
    pub fn error(&self) -> Option<MatchError> {
        self.error
    }
}

impl<'t> Iterator for CaptureMatches<'t> {
    type Item = Captures<'t>;

    fn next(&mut self) -> Option<Captures<'t>> {
        match self.matcher.find() {
            Ok(true) => Some(Captures::from_matcher(&self.matcher)),
            Ok(false) => None,
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

// === Split ===

/// Pieces of a text between matches, see [`Regex::split`].
pub struct Split<'r, 't> {
    finder: FindIter<'r, 't>,
    text: &'t str,
    last: usize,
    done: bool,
}

impl<'r, 't> Iterator for Split<'r, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.done {
            return None;
        }
        let bytes = self.text.as_bytes();
        match self.finder.next() {
            Some(m) => {
                let piece = &bytes[self.last..m.start()];
                self.last = m.end();
                Some(std::str::from_utf8(piece).unwrap_or_default())
            }
            None => {
                self.done = true;
                Some(std::str::from_utf8(&bytes[self.last..]).unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_new_and_find() {
        let re = Regex::new(r"/\d+/").unwrap();
        let m = re.find("hello 42 world").unwrap();
        assert_eq!(m.as_str(), "42");
        assert_eq!(m.start(), 6);
        assert_eq!(m.end(), 8);
        assert_eq!(m.range(), 6..8);
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
    }

    #[test]
    fn regex_no_match() {
        let re = Regex::new(r"/\d+/").unwrap();
        assert!(re.find("no digits here").is_none());
    }

    #[test]
    fn regex_captures() {
        let re = Regex::new(r"/(\d{4})-(\d{2})-(\d{2})/").unwrap();
        let caps = re.captures("date: 2026-02-14").unwrap();
        assert_eq!(caps.get(0).unwrap().as_str(), "2026-02-14");
        assert_eq!(caps.get(1).unwrap().as_str(), "2026");
        assert_eq!(caps.get(3).unwrap().as_str(), "14");
        assert!(caps.get(4).is_none());
        assert_eq!(caps.len(), 4);
    }

    #[test]
    fn regex_builder_flags() {
        let re = Regex::builder("hello").case_insensitive(true).build().unwrap();
        assert!(re.is_match("HELLO"));
        let re = Regex::builder("a.c").dot_matches_newline(true).build().unwrap();
        assert!(re.is_match("a\nc"));
        assert_eq!(re.as_str(), "a.c");
    }

    #[test]
    fn regex_invalid_pattern() {
        let err = Regex::new("/(unclosed/").unwrap_err();
        assert!(matches!(err, RegexError::Compile(_)));
    }

    #[test]
    fn try_find_reports_limit() {
        let re = Regex::builder("(a+)+b").backtrack_limit(1000).build().unwrap();
        let text = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaac";
        assert!(re.try_find(text.as_bytes()).is_err());
        assert!(re.find(text).is_none());
        let mut it = re.find_iter(text);
        assert!(it.next().is_none());
        assert!(matches!(it.error(), Some(MatchError::BacktrackLimit { .. })));
    }

    #[test]
    fn empty_match_find_iter() {
        let re = Regex::new("//").unwrap();
        let starts: Vec<_> = re.find_iter("ab").map(|m| m.start()).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn split_pieces() {
        let re = Regex::new(r"/\s*,\s*/").unwrap();
        let parts: Vec<_> = re.split("a , b,c").collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }
}
