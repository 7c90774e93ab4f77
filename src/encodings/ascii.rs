// encodings/ascii.rs - Byte-per-character encoding.
// Every byte is one character; only ASCII letters have case.

use crate::regenc::*;

pub struct AsciiEncoding;

pub static ENCODING_ASCII: AsciiEncoding = AsciiEncoding;

impl Encoding for AsciiEncoding {
    fn name(&self) -> &str {
        "ASCII-8BIT"
    }

    fn max_enc_len(&self) -> usize {
        1
    }

    fn mbc_enc_len(&self, p: &[u8]) -> usize {
        p.len().min(1)
    }

    fn mbc_to_code(&self, p: &[u8]) -> CodePoint {
        p[0] as CodePoint
    }

    fn code_to_mbc(&self, code: CodePoint, buf: &mut [u8; 4]) -> Option<usize> {
        if code > 0xff {
            return None;
        }
        buf[0] = code as u8;
        Some(1)
    }

    fn left_adjust_char_head(&self, _start: usize, s: usize, _data: &[u8]) -> usize {
        s
    }

    fn is_valid_mbc_string(&self, _s: &[u8]) -> bool {
        true
    }

    fn to_lower(&self, code: CodePoint) -> CodePoint {
        if (b'A' as CodePoint..=b'Z' as CodePoint).contains(&code) {
            code + 0x20
        } else {
            code
        }
    }

    fn to_upper(&self, code: CodePoint) -> CodePoint {
        if (b'a' as CodePoint..=b'z' as CodePoint).contains(&code) {
            code - 0x20
        } else {
            code
        }
    }

    fn max_code_point(&self) -> CodePoint {
        0xff
    }
}
