// pattern.rs - The compiled, shareable pattern.
//
// A `Pattern` is immutable after compilation and may be shared across
// threads (through the cache's `Arc`). All per-match data lives in a
// `MatchState` handed out by the pattern's pool.

use std::collections::HashMap;
use std::fmt;

use crate::error::{CompileError, MatchError};
use crate::matcher::Matcher;
use crate::options::{MatchLimits, PatternFlags};
use crate::regcomp::{compile, OptimizeInfo};
use crate::regenc::PatternEncoding;
use crate::regint::Program;
use crate::regparse::ParsedPattern;
use crate::regstate::StatePool;

pub struct Pattern {
    source: Box<[u8]>,
    pub(crate) flags: PatternFlags,
    pub(crate) enc: PatternEncoding,
    pub(crate) program: Program,
    group_count: usize,
    loop_count: usize,
    group_names: Vec<Option<String>>,
    name_table: HashMap<String, usize>,
    pub(crate) optimize: OptimizeInfo,
    pub(crate) limits: MatchLimits,
    pool: StatePool,
}

impl Pattern {
    pub(crate) fn from_parsed(
        source: &[u8],
        flags: PatternFlags,
        enc: PatternEncoding,
        parsed: ParsedPattern,
        optimize: OptimizeInfo,
    ) -> Pattern {
        Pattern {
            source: Box::from(source),
            flags,
            enc,
            program: parsed.program,
            group_count: parsed.group_count,
            loop_count: parsed.loop_count,
            group_names: parsed.group_names,
            name_table: parsed.name_table,
            optimize,
            limits: MatchLimits::default(),
            pool: StatePool::new(parsed.group_count, parsed.loop_count),
        }
    }

    /// Compiles a delimited pattern such as `"/(\d+)-(\d+)/i"`.
    pub fn new(text: &str) -> Result<Pattern, CompileError> {
        compile(text.as_bytes(), PatternFlags::empty())
    }

    /// Compiles delimited pattern bytes with extra `flags`.
    pub fn compile(text: &[u8], flags: PatternFlags) -> Result<Pattern, CompileError> {
        compile(text, flags)
    }

    /// Replaces the match limits captured at compile time.
    pub fn with_limits(mut self, limits: MatchLimits) -> Pattern {
        self.limits = limits;
        self
    }

    /// Number of capturing groups, not counting group 0.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Number of repeated groups in the program. Each owns one loop counter
    /// in a `MatchState`.
    pub fn loop_count(&self) -> usize {
        self.loop_count
    }

    /// Name of group `i`, if it was declared with one.
    pub fn group_name(&self, i: usize) -> Option<&str> {
        self.group_names.get(i)?.as_deref()
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.name_table.get(name).copied()
    }

    /// Whether the `g` flag was given.
    pub fn is_global(&self) -> bool {
        self.flags.contains(PatternFlags::GLOBAL)
    }

    /// Lower bound on the length of any match, in characters.
    pub fn min_length(&self) -> usize {
        self.optimize.min_length
    }

    pub fn is_anchored_at_start(&self) -> bool {
        self.optimize.anchored_at_start
    }

    /// Whether subjects are decoded as UTF-8. Set by the `u` flag or by a
    /// Unicode block property in the pattern.
    pub fn uses_utf8(&self) -> bool {
        self.enc.is_unicode()
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn limits(&self) -> MatchLimits {
        self.limits
    }

    /// The pattern text as given to the compiler.
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// A matcher over `subject` with a state taken from the pool.
    pub fn matcher<'p, 's>(&'p self, subject: &'s [u8]) -> Matcher<'p, 's> {
        Matcher::new(self, subject, self.pool.acquire())
    }

    /// Whether the pattern matches anywhere in `subject`.
    pub fn is_match(&self, subject: &[u8]) -> Result<bool, MatchError> {
        self.matcher(subject).find()
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &StatePool {
        &self.pool
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &String::from_utf8_lossy(&self.source))
            .field("flags", &self.flags)
            .field("group_count", &self.group_count)
            .field("nodes", &self.program.len())
            .field("min_length", &self.optimize.min_length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries() {
        let p = Pattern::new(r"/(?<year>\d{4})-(\d\d)(?:x)?/g").unwrap();
        assert_eq!(p.group_count(), 2);
        assert_eq!(p.group_name(1), Some("year"));
        assert_eq!(p.group_name(2), None);
        assert_eq!(p.group_name(9), None);
        assert_eq!(p.group_index("year"), Some(1));
        assert_eq!(p.group_index("month"), None);
        assert!(p.is_global());
        assert_eq!(p.min_length(), 7);
        assert!(!p.uses_utf8());
        assert_eq!(p.source(), br"/(?<year>\d{4})-(\d\d)(?:x)?/g");
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pattern>();
    }

    #[test]
    fn matching_returns_state_to_pool() {
        let p = Pattern::new("/b+/").unwrap();
        assert!(p.is_match(b"abbc").unwrap());
        assert!(!p.is_match(b"ac").unwrap());
        assert_eq!(p.pool().idle(), 1);
    }

    #[test]
    fn loop_count() {
        assert_eq!(Pattern::new("/ab+/").unwrap().loop_count(), 0);
        let p = Pattern::new("/(?:ab){2,5}(c|d){3}/").unwrap();
        assert_eq!(p.loop_count(), 2);
        let p2 = Pattern::new("/(?:ab){2,5}(c|d){3}/").unwrap();
        assert_eq!(p2.loop_count(), p.loop_count());
    }

    #[test]
    fn limits_override() {
        let limits = MatchLimits {
            depth_limit: 7,
            backtrack_limit: 0,
            stack_limit: 1 << 16,
        };
        let p = Pattern::new("/a/").unwrap().with_limits(limits);
        assert_eq!(p.limits(), limits);
    }
}
