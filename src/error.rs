// error.rs - Error types for compiling and matching patterns.
//
// Compile errors are plain data so the pattern cache can hand the same
// failure back to every caller. Match errors are per call.

use std::fmt;

/// Error raised while turning pattern text into a [`Pattern`](crate::pattern::Pattern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Malformed pattern: delimiters, flags, groups, quantifiers, escapes.
    Syntax {
        /// Byte offset into the pattern text where the problem was found.
        pos: usize,
        message: String,
    },
    /// `[:name:]` with a name that is not a POSIX class.
    UnknownClass(String),
    /// `\p{..}` / `\P{..}` naming no known category or block.
    UnknownProperty(String),
    /// Character range whose start sorts after its end, e.g. `[z-a]`.
    BadRange { from: u32, to: u32 },
}

impl CompileError {
    pub(crate) fn syntax(pos: usize, message: impl Into<String>) -> Self {
        CompileError::Syntax {
            pos,
            message: message.into(),
        }
    }

    /// Byte offset of a syntax error, if the error carries one.
    pub fn position(&self) -> Option<usize> {
        match self {
            CompileError::Syntax { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Syntax { pos, message } => {
                write!(f, "compilation failed: {} at offset {}", message, pos)
            }
            CompileError::UnknownClass(name) => {
                write!(f, "compilation failed: unknown POSIX class name '{}'", name)
            }
            CompileError::UnknownProperty(name) => {
                write!(f, "compilation failed: unknown property name '{}'", name)
            }
            CompileError::BadRange { from, to } => write!(
                f,
                "compilation failed: range out of order in character class ({:#x}-{:#x})",
                from, to
            ),
        }
    }
}

impl std::error::Error for CompileError {}

/// Error that aborts a match attempt. The pattern stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// Backtracking recursion went deeper than the configured depth limit, or
    /// grew the native stack past the configured stack bound.
    TooComplex { depth_limit: u32 },
    /// One match attempt took more node steps than the configured limit.
    BacktrackLimit { limit: u64 },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::TooComplex { depth_limit } => write!(
                f,
                "pattern too complex: recursion depth limit {} or stack bound exceeded",
                depth_limit
            ),
            MatchError::BacktrackLimit { limit } => {
                write!(f, "backtrack limit {} exhausted", limit)
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Either kind of failure, for callers that compile and match in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    Compile(CompileError),
    Match(MatchError),
}

impl fmt::Display for RegexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexError::Compile(e) => e.fmt(f),
            RegexError::Match(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for RegexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegexError::Compile(e) => Some(e),
            RegexError::Match(e) => Some(e),
        }
    }
}

impl From<CompileError> for RegexError {
    fn from(e: CompileError) -> Self {
        RegexError::Compile(e)
    }
}

impl From<MatchError> for RegexError {
    fn from(e: MatchError) -> Self {
        RegexError::Match(e)
    }
}
