//! # pregex
//!
//! Backtracking regex engine for PHP-style `preg_*` patterns and the POSIX
//! `ereg_*` dialect, with SIMD-accelerated candidate search via
//! [`memchr`](https://crates.io/crates/memchr).
//!
//! Patterns are compiled into an arena of matcher nodes linked by
//! continuations and executed by a recursive backtracking matcher with
//! bounded depth and step budgets.
//!
//! ## Quick Start
//!
//! ```rust
//! use pregex::prelude::*;
//!
//! let re = Regex::new(r"/\d{4}-\d{2}-\d{2}/").unwrap();
//! let m = re.find("Date: 2026-02-12").unwrap();
//! assert_eq!(m.as_str(), "2026-02-12");
//! assert_eq!(m.start(), 6);
//! ```
//!
//! For a bare body with explicit flags, use [`RegexBuilder`](api::RegexBuilder):
//!
//! ```rust
//! use pregex::prelude::*;
//!
//! let re = Regex::builder(r"hello")
//!     .case_insensitive(true)
//!     .build()
//!     .unwrap();
//! assert!(re.is_match("Hello World"));
//! ```
//!
//! ## Pattern / Matcher API
//!
//! ```rust
//! use pregex::cache::PatternCache;
//!
//! let cache = PatternCache::new();
//! let pattern = cache.get_or_compile(r"/(?<word>\w+)@(\w+)/").unwrap();
//!
//! let mut m = pattern.matcher(b"mail alice@example now");
//! assert!(m.find().unwrap());
//! assert_eq!(m.start(), Some(5));
//! assert_eq!(m.group_str(1), Some("alice"));
//! assert_eq!(m.group_index("word"), Some(1));
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `regparse` | Recursive-descent parser to node fragments |
//! | [`regcomp`] | Delimiters, flags, search optimization info |
//! | [`regexec`] | Backtracking matcher and forward search |
//! | [`regint`] | Node program, character classes, constants |
//! | [`regstate`] | Per-match state and the state pool |
//! | [`pattern`] | Compiled pattern |
//! | [`matcher`] | Pattern bound to a subject |
//! | [`cache`] | Memoized compilation |
//! | [`posix`] | `ereg` dialect and `preg_quote` |
//! | [`charset`] | Character sets |
//! | [`regenc`] | Encoding trait |
//! | [`regerror`] | Error messages |

pub mod api;
pub mod cache;
pub mod charset;
pub mod encodings;
pub mod error;
pub mod matcher;
pub mod options;
pub mod pattern;
pub mod posix;
pub mod prelude;
pub mod regcomp;
pub mod regenc;
pub mod regerror;
pub mod regexec;
pub mod regint;
mod regparse;
pub mod regstate;
pub mod unicode;
