// encodings/utf8.rs - UTF-8 encoding (RFC 3629 range: U+0000 - U+10FFFF).
//
// Decoding is lenient: a malformed sequence decodes to whatever bits are
// present and never reads past the slice, so matching stays total on
// invalid input.

use crate::regenc::*;

// === UTF-8 Helpers ===

#[inline]
fn utf8_islead(c: u8) -> bool {
    (c & 0xc0) != 0x80
}

#[inline]
fn utf8_istail(c: u8) -> bool {
    (c & 0xc0) == 0x80
}

// === EncLen_UTF8 Table ===
// Maps first byte to character length (RFC 3629: max 4 bytes).

static ENC_LEN_UTF8: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

pub struct Utf8Encoding;

pub static ENCODING_UTF8: Utf8Encoding = Utf8Encoding;

impl Encoding for Utf8Encoding {
    fn name(&self) -> &str {
        "UTF-8"
    }

    fn max_enc_len(&self) -> usize {
        4
    }

    fn mbc_enc_len(&self, p: &[u8]) -> usize {
        match p.first() {
            None => 0,
            Some(&c) => {
                let len = ENC_LEN_UTF8[c as usize] as usize;
                // stop a truncated sequence at the first non-continuation byte
                let mut n = 1;
                while n < len && n < p.len() && utf8_istail(p[n]) {
                    n += 1;
                }
                n
            }
        }
    }

    fn mbc_to_code(&self, p: &[u8]) -> CodePoint {
        let len = self.mbc_enc_len(p);
        let c = p[0] as u32;
        if len > 1 {
            let remaining = len - 1;
            let mut n = c & ((1u32 << (6 - remaining)) - 1);
            for &b in &p[1..len] {
                n = (n << 6) | ((b as u32) & 0x3f);
            }
            n
        } else {
            c
        }
    }

    fn code_to_mbc(&self, code: CodePoint, buf: &mut [u8; 4]) -> Option<usize> {
        if (code & 0xffffff80) == 0 {
            buf[0] = code as u8;
            return Some(1);
        }
        let mut i = 0;
        if (code & 0xfffff800) == 0 {
            buf[i] = ((code >> 6) & 0x1f) as u8 | 0xc0;
            i += 1;
        } else if (code & 0xffff0000) == 0 {
            buf[i] = ((code >> 12) & 0x0f) as u8 | 0xe0;
            buf[i + 1] = ((code >> 6) & 0x3f) as u8 | 0x80;
            i += 2;
        } else if code <= 0x10ffff {
            buf[i] = ((code >> 18) & 0x07) as u8 | 0xf0;
            buf[i + 1] = ((code >> 12) & 0x3f) as u8 | 0x80;
            buf[i + 2] = ((code >> 6) & 0x3f) as u8 | 0x80;
            i += 3;
        } else {
            return None;
        }
        buf[i] = (code & 0x3f) as u8 | 0x80;
        Some(i + 1)
    }

    fn left_adjust_char_head(&self, start: usize, s: usize, data: &[u8]) -> usize {
        if s <= start {
            return s;
        }
        let mut p = s;
        // a lead byte never sits more than three bytes before its tail
        while p > start && s - p < 3 && !utf8_islead(data[p]) {
            p -= 1;
        }
        if utf8_islead(data[p]) {
            p
        } else {
            s
        }
    }

    fn is_valid_mbc_string(&self, s: &[u8]) -> bool {
        std::str::from_utf8(s).is_ok()
    }

    fn to_lower(&self, code: CodePoint) -> CodePoint {
        map_single(code, char::to_lowercase)
    }

    fn to_upper(&self, code: CodePoint) -> CodePoint {
        map_single(code, char::to_uppercase)
    }

    fn max_code_point(&self) -> CodePoint {
        0x1f_ffff
    }

    fn is_unicode(&self) -> bool {
        true
    }
}

/// Applies a std case mapping when it yields exactly one character.
fn map_single<I>(code: CodePoint, f: impl Fn(char) -> I) -> CodePoint
where
    I: Iterator<Item = char>,
{
    if code < 128 {
        let b = code as u8;
        return if b.is_ascii_alphabetic() {
            let mut it = f(b as char);
            it.next().map_or(code, |c| c as CodePoint)
        } else {
            code
        };
    }
    let Some(c) = char::from_u32(code) else {
        return code;
    };
    let mut it = f(c);
    match (it.next(), it.next()) {
        (Some(m), None) => m as CodePoint,
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_sequence_is_short() {
        let enc = &ENCODING_UTF8;
        assert_eq!(enc.mbc_enc_len(&[0xe2, 0x82]), 2);
        assert_eq!(enc.mbc_enc_len(&[0xe2, b'a']), 1);
        assert_eq!(enc.mbc_enc_len(&[0xff]), 1);
    }

    #[test]
    fn encode_roundtrip_boundaries() {
        let enc = &ENCODING_UTF8;
        let mut buf = [0u8; 4];
        for c in ['a', 'é', '€', '😀'] {
            let n = enc.code_to_mbc(c as u32, &mut buf).unwrap();
            assert_eq!(&buf[..n], c.to_string().as_bytes());
            assert_eq!(enc.mbc_to_code(&buf[..n]), c as u32);
        }
        assert_eq!(enc.code_to_mbc(0x110000, &mut buf), None);
    }

    #[test]
    fn left_adjust() {
        let enc = &ENCODING_UTF8;
        let s = "a€".as_bytes();
        assert_eq!(enc.left_adjust_char_head(0, 3, s), 1);
        assert_eq!(enc.left_adjust_char_head(0, 0, s), 0);
    }

    #[test]
    fn case_mapping_is_one_to_one() {
        let enc = &ENCODING_UTF8;
        assert_eq!(enc.to_upper('ß' as u32), 'ß' as u32);
        assert_eq!(enc.to_lower('Ä' as u32), 'ä' as u32);
        assert_eq!(enc.to_upper('q' as u32), 'Q' as u32);
    }
}
