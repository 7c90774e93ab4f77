// posix.rs - The POSIX `ereg` dialect and pattern quoting.
//
// `ereg` patterns have no delimiters and treat backslashes, brackets and
// braces differently from `preg` patterns. They are rewritten into the preg
// body syntax and compiled with the regular compiler.

use crate::error::CompileError;
use crate::options::PatternFlags;
use crate::pattern::Pattern;
use crate::regcomp::compile_body;

/// Escapes after which the backslash keeps its meaning; any other escaped
/// letter stands for itself.
const KEPT_LETTER_ESCAPES: &[u8] = b"acefnrtxdDsSwWbBAZzGpP";

/// Bytes `preg_quote` escapes.
const QUOTED: &[u8] = b"\\+*?[^]$(){}=!<>|:.-";

/// Rewrites an `ereg` pattern into preg body syntax.
///
/// - Inside a bracket expression a backslash is literal, `[` is literal
///   unless it opens `[:name:]`, and `#` is escaped.
/// - Outside, `\1`..`\3` followed by a digit and `\0` start octal escapes,
///   escaped letters lose the backslash unless they are known escapes, and
///   `[[` opens a class whose first member is `[`.
/// - `{` opens an interval only when a digit or comma follows; a stray `{`
///   and every `}` outside an interval are literal.
pub fn ereg_clean(pattern: &[u8]) -> Vec<u8> {
    let len = pattern.len();
    let mut out = Vec::with_capacity(len + 8);
    let mut in_class = false;
    let mut i = 0;

    while i < len {
        let ch = pattern[i];
        match ch {
            b'\\' if in_class => out.extend_from_slice(b"\\\\"),
            b'\\' => {
                i += 1;
                let Some(&c) = pattern.get(i) else {
                    out.extend_from_slice(b"\\\\");
                    break;
                };
                let next_is_digit = pattern.get(i + 1).is_some_and(u8::is_ascii_digit);
                if c == b'0' || ((b'1'..=b'3').contains(&c) && next_is_digit) {
                    out.extend_from_slice(b"\\0");
                    out.push(c);
                } else if c.is_ascii_alphabetic() {
                    if KEPT_LETTER_ESCAPES.contains(&c) {
                        out.push(b'\\');
                    }
                    out.push(c);
                } else {
                    out.push(b'\\');
                    out.push(c);
                }
            }
            b'[' if in_class => {
                if pattern.get(i + 1) != Some(&b':') {
                    out.extend_from_slice(b"\\[");
                } else if let Some(end) = posix_name_end(pattern, i + 2) {
                    out.extend_from_slice(&pattern[i..end]);
                    i = end;
                    continue;
                } else {
                    out.push(b'[');
                }
            }
            b'[' => {
                in_class = true;
                if pattern.get(i + 1) == Some(&b'[') && pattern.get(i + 2) != Some(&b':') {
                    out.extend_from_slice(b"[\\[");
                    i += 1;
                } else {
                    out.push(b'[');
                }
            }
            b'#' if in_class => out.extend_from_slice(b"\\#"),
            b']' => {
                out.push(b']');
                in_class = false;
            }
            b'{' if !in_class => {
                let opens_interval = pattern
                    .get(i + 1)
                    .is_some_and(|&c| c.is_ascii_digit() || c == b',');
                if opens_interval {
                    out.push(b'{');
                    i += 1;
                    while i < len && (pattern[i].is_ascii_digit() || pattern[i] == b',') {
                        out.push(pattern[i]);
                        i += 1;
                    }
                    if i < len {
                        out.push(pattern[i]);
                    }
                } else {
                    out.extend_from_slice(b"\\{");
                }
            }
            b'}' if !in_class => out.extend_from_slice(b"\\}"),
            _ => out.push(ch),
        }
        i += 1;
    }
    out
}

/// Offset just past the `:]` closing a `[:name:]` whose name starts at `from`.
fn posix_name_end(pattern: &[u8], from: usize) -> Option<usize> {
    pattern
        .get(from..)?
        .windows(2)
        .position(|w| w == b":]")
        .map(|p| from + p + 2)
}

/// Compiles an `ereg` (or, with `ignore_case`, `eregi`) pattern.
pub fn compile_posix(pattern: &[u8], ignore_case: bool) -> Result<Pattern, CompileError> {
    let body = ereg_clean(pattern);
    let flags = if ignore_case {
        PatternFlags::IGNORE_CASE
    } else {
        PatternFlags::empty()
    };
    compile_body(pattern, &body, flags)
}

/// Escapes every regex metacharacter in `s`, plus any byte of `delimiter`,
/// so the result matches `s` literally inside a delimited pattern. NUL
/// becomes `\000`.
pub fn preg_quote(s: &[u8], delimiter: Option<&[u8]>) -> Vec<u8> {
    let extra = delimiter.unwrap_or_default();
    let mut out = Vec::with_capacity(s.len() * 2);
    for &b in s {
        if b == 0 {
            out.extend_from_slice(b"\\000");
        } else if QUOTED.contains(&b) || extra.contains(&b) {
            out.push(b'\\');
            out.push(b);
        } else {
            out.push(b);
        }
    }
    out
}

/// [`preg_quote`] over text.
pub fn preg_quote_str(s: &str, delimiter: Option<char>) -> String {
    let mut buf = [0u8; 4];
    let delim = delimiter.map(|c| c.encode_utf8(&mut buf).as_bytes());
    let quoted = preg_quote(s.as_bytes(), delim);
    // only ASCII bytes are inserted, and always before a whole character
    String::from_utf8(quoted).unwrap_or_default()
}
