// prelude.rs - Convenient re-exports for the common API.
//
//! # Prelude
//!
//! ```
//! use pregex::prelude::*;
//!
//! let re = Regex::new(r"/\d+/").unwrap();
//! let m = re.find("answer: 42").unwrap();
//! assert_eq!(m.as_str(), "42");
//! ```

pub use crate::api::{Captures, CapturesIter, FindIter, Match, Regex, RegexBuilder};
pub use crate::cache::PatternCache;
pub use crate::error::{CompileError, MatchError, RegexError};
pub use crate::matcher::Matcher;
pub use crate::options::{MatchLimits, PatternFlags};
pub use crate::pattern::Pattern;
pub use crate::posix::{compile_posix, preg_quote};
