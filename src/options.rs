// options.rs - Pattern flags and per-pattern match limits.

use bitflags::bitflags;

use crate::regexec::{
    get_default_backtrack_limit, get_default_depth_limit, get_default_stack_limit,
};

bitflags! {
    /// Compile flags, one bit per trailing modifier letter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u32 {
        /// `m`: `^` and `$` also match at embedded newlines.
        const MULTILINE = 0x001;
        /// `s`: `.` also matches `\n`.
        const DOTALL = 0x002;
        /// `i`: case-insensitive literals and classes.
        const IGNORE_CASE = 0x004;
        /// `x`: unescaped whitespace and `#` comments are ignored.
        const EXTENDED = 0x008;
        /// `g`: global matching hint for the caller.
        const GLOBAL = 0x010;
        /// `A`: every match must start at the search start.
        const ANCHORED = 0x020;
        /// `D`: `$` matches only at the very end.
        const DOLLAR_END_ONLY = 0x040;
        /// `U`: quantifiers are lazy by default, `?` makes them greedy.
        const UNGREEDY = 0x080;
        /// `X`: unknown alphanumeric escapes are errors.
        const STRICT = 0x100;
        /// `u`: pattern and subject are UTF-8.
        const UTF8 = 0x200;
        /// `e`: replacement is evaluated by the caller. No matching effect.
        const EVAL = 0x400;
        /// `S`: extra analysis requested. Accepted and ignored.
        const STUDY = 0x800;
    }
}

impl PatternFlags {
    /// Maps a single modifier letter to its flag.
    pub fn from_letter(ch: u8) -> Option<PatternFlags> {
        let flag = match ch {
            b'm' => PatternFlags::MULTILINE,
            b's' => PatternFlags::DOTALL,
            b'i' => PatternFlags::IGNORE_CASE,
            b'x' => PatternFlags::EXTENDED,
            b'g' => PatternFlags::GLOBAL,
            b'A' => PatternFlags::ANCHORED,
            b'D' => PatternFlags::DOLLAR_END_ONLY,
            b'U' => PatternFlags::UNGREEDY,
            b'X' => PatternFlags::STRICT,
            b'u' => PatternFlags::UTF8,
            b'e' => PatternFlags::EVAL,
            b'S' => PatternFlags::STUDY,
            _ => return None,
        };
        Some(flag)
    }

    /// Letters accepted inside `(?...)`. The others only make sense for the
    /// whole pattern.
    pub(crate) fn from_inline_letter(ch: u32) -> Option<PatternFlags> {
        match char::from_u32(ch)? {
            'm' => Some(PatternFlags::MULTILINE),
            's' => Some(PatternFlags::DOTALL),
            'i' => Some(PatternFlags::IGNORE_CASE),
            'x' => Some(PatternFlags::EXTENDED),
            'g' => Some(PatternFlags::GLOBAL),
            'U' => Some(PatternFlags::UNGREEDY),
            'X' => Some(PatternFlags::STRICT),
            _ => None,
        }
    }

    /// Parses a modifier string such as `"imsx"`.
    ///
    /// Spaces and line breaks are skipped. Returns the offending byte and its
    /// index on the first unknown letter.
    pub fn parse(letters: &[u8]) -> Result<PatternFlags, (usize, u8)> {
        let mut flags = PatternFlags::empty();
        for (i, &ch) in letters.iter().enumerate() {
            if matches!(ch, b' ' | b'\n' | b'\r') {
                continue;
            }
            match PatternFlags::from_letter(ch) {
                Some(f) => flags |= f,
                None => return Err((i, ch)),
            }
        }
        Ok(flags)
    }
}

/// Resource bounds for a single match attempt.
///
/// A `backtrack_limit` or `stack_limit` of 0 disables that bound. The depth
/// bound is always enforced. Running past the depth or stack bound reports
/// `MatchError::TooComplex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    /// Maximum nesting of backtracking recursion.
    pub depth_limit: u32,
    /// Maximum node steps tried from one start position.
    pub backtrack_limit: u64,
    /// Maximum bytes of native stack one search may grow by. Must stay below
    /// the free stack of the calling thread.
    pub stack_limit: usize,
}

impl Default for MatchLimits {
    /// Reads the process-wide defaults at the time of the call.
    fn default() -> Self {
        MatchLimits {
            depth_limit: get_default_depth_limit(),
            backtrack_limit: get_default_backtrack_limit(),
            stack_limit: get_default_stack_limit(),
        }
    }
}
