// encodings/mod.rs - Encoding registry
// Byte mode and UTF-8 mode, selected by the `u` flag.

pub mod ascii;
pub mod utf8;

pub use ascii::ENCODING_ASCII;
pub use utf8::ENCODING_UTF8;
