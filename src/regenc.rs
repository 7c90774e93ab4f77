// regenc.rs - Character encoding trait and shared decoding helpers.
//
// Patterns run either over raw bytes (one byte = one character) or over
// UTF-8. Everything that walks the subject character by character goes
// through this trait so the node matchers never care which mode is active.

use crate::encodings::{ENCODING_ASCII, ENCODING_UTF8};

pub type CodePoint = u32;

/// Encoding chosen at compile time and shared by all matches of a pattern.
pub type PatternEncoding = &'static dyn Encoding;

// === Constants ===
pub const MAX_CODE_POINT: CodePoint = CodePoint::MAX;
pub const ASCII_LIMIT: CodePoint = 127;
pub const NEWLINE_CODE: CodePoint = 0x0a;

// === Encoding Trait ===
pub trait Encoding: Send + Sync {
    /// Encoding name (e.g. "ASCII-8BIT", "UTF-8")
    fn name(&self) -> &str;

    /// Maximum encoded character length in bytes
    fn max_enc_len(&self) -> usize;

    /// Byte length of the character starting at `p[0]`, clamped to `p.len()`.
    fn mbc_enc_len(&self, p: &[u8]) -> usize;

    /// Decode the character starting at `p[0]`.
    fn mbc_to_code(&self, p: &[u8]) -> CodePoint;

    /// Encode a code point into `buf`; `None` if the encoding cannot hold it.
    fn code_to_mbc(&self, code: CodePoint, buf: &mut [u8; 4]) -> Option<usize>;

    /// Move `s` back to the first byte of the character containing it.
    fn left_adjust_char_head(&self, start: usize, s: usize, data: &[u8]) -> usize;

    fn is_valid_mbc_string(&self, s: &[u8]) -> bool;

    /// Simple one-to-one lower-case mapping.
    fn to_lower(&self, code: CodePoint) -> CodePoint;

    /// Simple one-to-one upper-case mapping.
    fn to_upper(&self, code: CodePoint) -> CodePoint;

    /// Largest code point a single subject character can decode to.
    fn max_code_point(&self) -> CodePoint;

    fn is_unicode(&self) -> bool {
        false
    }
}

/// Picks the encoding for a pattern compiled with or without the `u` flag.
pub fn encoding_for(utf8: bool) -> PatternEncoding {
    if utf8 {
        &ENCODING_UTF8
    } else {
        &ENCODING_ASCII
    }
}

// === Shared helpers ===

/// Decode the character at `pos`, returning it with its byte length.
/// `pos` must be in bounds.
#[inline]
pub fn char_at(enc: PatternEncoding, data: &[u8], pos: usize) -> (CodePoint, usize) {
    let p = &data[pos..];
    let len = enc.mbc_enc_len(p);
    (enc.mbc_to_code(&p[..len]), len)
}

/// Start of the character before `s`, or `None` at `start`.
#[inline]
pub fn prev_char_head(enc: PatternEncoding, start: usize, s: usize, data: &[u8]) -> Option<usize> {
    if s <= start {
        None
    } else {
        Some(enc.left_adjust_char_head(start, s - 1, data))
    }
}

/// Step back `n` characters from `s`, not crossing `start`.
pub fn step_back(
    enc: PatternEncoding,
    start: usize,
    s: usize,
    n: usize,
    data: &[u8],
) -> Option<usize> {
    let mut p = s;
    for _ in 0..n {
        p = prev_char_head(enc, start, p, data)?;
    }
    Some(p)
}

/// Character-level equality under simple case folding.
#[inline]
pub fn code_eq_ignore_case(enc: PatternEncoding, a: CodePoint, b: CodePoint) -> bool {
    a == b || enc.to_lower(a) == enc.to_lower(b) || enc.to_upper(a) == enc.to_upper(b)
}

#[inline]
pub fn is_code_ascii(code: CodePoint) -> bool {
    code <= ASCII_LIMIT
}

/// `\w` membership: ASCII letters, digits and underscore.
#[inline]
pub fn is_code_word(code: CodePoint) -> bool {
    code < 128 && (code as u8 == b'_' || (code as u8).is_ascii_alphanumeric())
}

#[inline]
pub fn is_code_newline(code: CodePoint) -> bool {
    code == NEWLINE_CODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_at_utf8() {
        let enc = encoding_for(true);
        let s = "aé€".as_bytes();
        assert_eq!(char_at(enc, s, 0), ('a' as u32, 1));
        assert_eq!(char_at(enc, s, 1), ('é' as u32, 2));
        assert_eq!(char_at(enc, s, 3), ('€' as u32, 3));
    }

    #[test]
    fn char_at_bytes() {
        let enc = encoding_for(false);
        let s = "é".as_bytes();
        assert_eq!(char_at(enc, s, 0), (0xc3, 1));
    }

    #[test]
    fn step_back_by_chars() {
        let enc = encoding_for(true);
        let s = "aé€b".as_bytes();
        assert_eq!(step_back(enc, 0, s.len(), 2, s), Some(3));
        assert_eq!(step_back(enc, 0, s.len(), 4, s), Some(0));
        assert_eq!(step_back(enc, 0, s.len(), 5, s), None);
        assert_eq!(step_back(encoding_for(false), 0, s.len(), 2, s), Some(5));
    }

    #[test]
    fn ignore_case_eq() {
        let bytes = encoding_for(false);
        assert!(code_eq_ignore_case(bytes, 'a' as u32, 'A' as u32));
        assert!(!code_eq_ignore_case(bytes, 0xe0, 0xc0));
        let utf8 = encoding_for(true);
        assert!(code_eq_ignore_case(utf8, 'à' as u32, 'À' as u32));
        assert!(code_eq_ignore_case(utf8, 'σ' as u32, 'Σ' as u32));
    }

    #[test]
    fn word_chars() {
        assert!(is_code_word('_' as u32));
        assert!(is_code_word('9' as u32));
        assert!(!is_code_word('-' as u32));
        assert!(!is_code_word('é' as u32));
    }
}
