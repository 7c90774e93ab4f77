// unicode/tables.rs - Category ranges and block table.

use super::GeneralCategory::{self, *};
use crate::regenc::CodePoint;

/// Sorted, disjoint `(first, last, category)` ranges.
///
/// Latin-1 is listed in full. Above it only ranges the std predicates cannot
/// tell apart (marks, digits, punctuation, symbols, format and private-use)
/// are listed; letters are left to `char::is_uppercase` and friends.
pub(super) static CATEGORY_RANGES: &[(CodePoint, CodePoint, GeneralCategory)] = &[
    // Basic Latin
    (0x00, 0x1f, Cc),
    (0x20, 0x20, Zs),
    (0x21, 0x23, Po),
    (0x24, 0x24, Sc),
    (0x25, 0x27, Po),
    (0x28, 0x28, Ps),
    (0x29, 0x29, Pe),
    (0x2a, 0x2a, Po),
    (0x2b, 0x2b, Sm),
    (0x2c, 0x2c, Po),
    (0x2d, 0x2d, Pd),
    (0x2e, 0x2f, Po),
    (0x30, 0x39, Nd),
    (0x3a, 0x3b, Po),
    (0x3c, 0x3e, Sm),
    (0x3f, 0x40, Po),
    (0x41, 0x5a, Lu),
    (0x5b, 0x5b, Ps),
    (0x5c, 0x5c, Po),
    (0x5d, 0x5d, Pe),
    (0x5e, 0x5e, Sk),
    (0x5f, 0x5f, Pc),
    (0x60, 0x60, Sk),
    (0x61, 0x7a, Ll),
    (0x7b, 0x7b, Ps),
    (0x7c, 0x7c, Sm),
    (0x7d, 0x7d, Pe),
    (0x7e, 0x7e, Sm),
    // Latin-1 Supplement
    (0x7f, 0x9f, Cc),
    (0xa0, 0xa0, Zs),
    (0xa1, 0xa1, Po),
    (0xa2, 0xa5, Sc),
    (0xa6, 0xa6, So),
    (0xa7, 0xa7, Po),
    (0xa8, 0xa8, Sk),
    (0xa9, 0xa9, So),
    (0xaa, 0xaa, Lo),
    (0xab, 0xab, Pi),
    (0xac, 0xac, Sm),
    (0xad, 0xad, Cf),
    (0xae, 0xae, So),
    (0xaf, 0xaf, Sk),
    (0xb0, 0xb0, So),
    (0xb1, 0xb1, Sm),
    (0xb2, 0xb3, No),
    (0xb4, 0xb4, Sk),
    (0xb5, 0xb5, Ll),
    (0xb6, 0xb7, Po),
    (0xb8, 0xb8, Sk),
    (0xb9, 0xb9, No),
    (0xba, 0xba, Lo),
    (0xbb, 0xbb, Pf),
    (0xbc, 0xbe, No),
    (0xbf, 0xbf, Po),
    (0xc0, 0xd6, Lu),
    (0xd7, 0xd7, Sm),
    (0xd8, 0xde, Lu),
    (0xdf, 0xf6, Ll),
    (0xf7, 0xf7, Sm),
    (0xf8, 0xff, Ll),
    // Titlecase digraphs
    (0x01c5, 0x01c5, Lt),
    (0x01c8, 0x01c8, Lt),
    (0x01cb, 0x01cb, Lt),
    (0x01f2, 0x01f2, Lt),
    // Spacing modifiers
    (0x02b0, 0x02c1, Lm),
    (0x02c2, 0x02c5, Sk),
    (0x02c6, 0x02d1, Lm),
    (0x02d2, 0x02df, Sk),
    (0x02e0, 0x02e4, Lm),
    (0x02e5, 0x02eb, Sk),
    (0x02ec, 0x02ec, Lm),
    (0x02ed, 0x02ed, Sk),
    (0x02ee, 0x02ee, Lm),
    (0x02ef, 0x02ff, Sk),
    (0x0300, 0x036f, Mn),
    // Greek and Cyrillic
    (0x0374, 0x0374, Lm),
    (0x0375, 0x0375, Sk),
    (0x037a, 0x037a, Lm),
    (0x037e, 0x037e, Po),
    (0x0384, 0x0385, Sk),
    (0x0387, 0x0387, Po),
    (0x03f6, 0x03f6, Sm),
    (0x0482, 0x0482, So),
    (0x0483, 0x0487, Mn),
    (0x0488, 0x0489, Me),
    // Armenian and Hebrew
    (0x0559, 0x0559, Lm),
    (0x055a, 0x055f, Po),
    (0x0589, 0x0589, Po),
    (0x058a, 0x058a, Pd),
    (0x058d, 0x058e, So),
    (0x058f, 0x058f, Sc),
    (0x0591, 0x05bd, Mn),
    (0x05be, 0x05be, Pd),
    (0x05bf, 0x05bf, Mn),
    (0x05c0, 0x05c0, Po),
    (0x05c1, 0x05c2, Mn),
    (0x05c3, 0x05c3, Po),
    (0x05c4, 0x05c5, Mn),
    (0x05c6, 0x05c6, Po),
    (0x05c7, 0x05c7, Mn),
    (0x05f3, 0x05f4, Po),
    // Arabic
    (0x0600, 0x0605, Cf),
    (0x0606, 0x0608, Sm),
    (0x0609, 0x060a, Po),
    (0x060b, 0x060b, Sc),
    (0x060c, 0x060d, Po),
    (0x060e, 0x060f, So),
    (0x0610, 0x061a, Mn),
    (0x061b, 0x061b, Po),
    (0x061c, 0x061c, Cf),
    (0x061d, 0x061f, Po),
    (0x0640, 0x0640, Lm),
    (0x064b, 0x065f, Mn),
    (0x0660, 0x0669, Nd),
    (0x066a, 0x066d, Po),
    (0x0670, 0x0670, Mn),
    (0x06d4, 0x06d4, Po),
    (0x06d6, 0x06dc, Mn),
    (0x06dd, 0x06dd, Cf),
    (0x06de, 0x06de, So),
    (0x06df, 0x06e4, Mn),
    (0x06e5, 0x06e6, Lm),
    (0x06e7, 0x06e8, Mn),
    (0x06e9, 0x06e9, So),
    (0x06ea, 0x06ed, Mn),
    (0x06f0, 0x06f9, Nd),
    (0x07c0, 0x07c9, Nd),
    (0x07f4, 0x07f5, Lm),
    // Indic
    (0x0900, 0x0902, Mn),
    (0x0903, 0x0903, Mc),
    (0x093a, 0x093a, Mn),
    (0x093b, 0x093b, Mc),
    (0x093c, 0x093c, Mn),
    (0x093e, 0x0940, Mc),
    (0x0941, 0x0948, Mn),
    (0x0949, 0x094c, Mc),
    (0x094d, 0x094d, Mn),
    (0x094e, 0x094f, Mc),
    (0x0951, 0x0957, Mn),
    (0x0962, 0x0963, Mn),
    (0x0964, 0x0965, Po),
    (0x0966, 0x096f, Nd),
    (0x0970, 0x0970, Po),
    (0x0971, 0x0971, Lm),
    (0x09e6, 0x09ef, Nd),
    (0x09f2, 0x09f3, Sc),
    (0x09fb, 0x09fb, Sc),
    (0x0a66, 0x0a6f, Nd),
    (0x0ae6, 0x0aef, Nd),
    (0x0af1, 0x0af1, Sc),
    (0x0b66, 0x0b6f, Nd),
    (0x0be6, 0x0bef, Nd),
    (0x0bf9, 0x0bf9, Sc),
    (0x0c66, 0x0c6f, Nd),
    (0x0ce6, 0x0cef, Nd),
    (0x0d66, 0x0d6f, Nd),
    (0x0de6, 0x0def, Nd),
    // Thai, Lao, Tibetan, Myanmar
    (0x0e31, 0x0e31, Mn),
    (0x0e34, 0x0e3a, Mn),
    (0x0e3f, 0x0e3f, Sc),
    (0x0e46, 0x0e46, Lm),
    (0x0e47, 0x0e4e, Mn),
    (0x0e4f, 0x0e4f, Po),
    (0x0e50, 0x0e59, Nd),
    (0x0e5a, 0x0e5b, Po),
    (0x0ec6, 0x0ec6, Lm),
    (0x0ed0, 0x0ed9, Nd),
    (0x0f20, 0x0f29, Nd),
    (0x1040, 0x1049, Nd),
    (0x1090, 0x1099, Nd),
    (0x10fb, 0x10fb, Po),
    (0x10fc, 0x10fc, Lm),
    (0x1360, 0x1368, Po),
    (0x166e, 0x166e, Po),
    (0x1680, 0x1680, Zs),
    (0x16ee, 0x16f0, Nl),
    (0x17d7, 0x17d7, Lm),
    (0x17db, 0x17db, Sc),
    (0x17e0, 0x17e9, Nd),
    // Mongolian and other South-East Asian digits
    (0x1800, 0x1805, Po),
    (0x1806, 0x1806, Pd),
    (0x1807, 0x180a, Po),
    (0x180b, 0x180d, Mn),
    (0x180e, 0x180e, Cf),
    (0x1810, 0x1819, Nd),
    (0x1843, 0x1843, Lm),
    (0x1946, 0x194f, Nd),
    (0x19d0, 0x19d9, Nd),
    (0x1a80, 0x1a89, Nd),
    (0x1a90, 0x1a99, Nd),
    (0x1ab0, 0x1abd, Mn),
    (0x1abe, 0x1abe, Me),
    (0x1b50, 0x1b59, Nd),
    (0x1bb0, 0x1bb9, Nd),
    (0x1c40, 0x1c49, Nd),
    (0x1c50, 0x1c59, Nd),
    (0x1d2c, 0x1d6a, Lm),
    (0x1d78, 0x1d78, Lm),
    (0x1d9b, 0x1dbf, Lm),
    (0x1dc0, 0x1dff, Mn),
    // Greek Extended
    (0x1f88, 0x1f8f, Lt),
    (0x1f98, 0x1f9f, Lt),
    (0x1fa8, 0x1faf, Lt),
    (0x1fbc, 0x1fbc, Lt),
    (0x1fbd, 0x1fbd, Sk),
    (0x1fbf, 0x1fc1, Sk),
    (0x1fcc, 0x1fcc, Lt),
    (0x1fcd, 0x1fcf, Sk),
    (0x1fdd, 0x1fdf, Sk),
    (0x1fed, 0x1fef, Sk),
    (0x1ffc, 0x1ffc, Lt),
    (0x1ffd, 0x1ffe, Sk),
    // General Punctuation
    (0x2000, 0x200a, Zs),
    (0x200b, 0x200f, Cf),
    (0x2010, 0x2015, Pd),
    (0x2016, 0x2017, Po),
    (0x2018, 0x2018, Pi),
    (0x2019, 0x2019, Pf),
    (0x201a, 0x201a, Ps),
    (0x201b, 0x201c, Pi),
    (0x201d, 0x201d, Pf),
    (0x201e, 0x201e, Ps),
    (0x201f, 0x201f, Pi),
    (0x2020, 0x2027, Po),
    (0x2028, 0x2028, Zl),
    (0x2029, 0x2029, Zp),
    (0x202a, 0x202e, Cf),
    (0x202f, 0x202f, Zs),
    (0x2030, 0x2038, Po),
    (0x2039, 0x2039, Pi),
    (0x203a, 0x203a, Pf),
    (0x203b, 0x203e, Po),
    (0x203f, 0x2040, Pc),
    (0x2041, 0x2043, Po),
    (0x2044, 0x2044, Sm),
    (0x2045, 0x2045, Ps),
    (0x2046, 0x2046, Pe),
    (0x2047, 0x2051, Po),
    (0x2052, 0x2052, Sm),
    (0x2053, 0x2053, Po),
    (0x2054, 0x2054, Pc),
    (0x2055, 0x205e, Po),
    (0x205f, 0x205f, Zs),
    (0x2060, 0x2064, Cf),
    (0x2066, 0x206f, Cf),
    // Super/subscripts, currency, combining marks for symbols
    (0x2070, 0x2070, No),
    (0x2071, 0x2071, Lm),
    (0x2074, 0x2079, No),
    (0x207a, 0x207c, Sm),
    (0x207d, 0x207d, Ps),
    (0x207e, 0x207e, Pe),
    (0x207f, 0x207f, Lm),
    (0x2080, 0x2089, No),
    (0x208a, 0x208c, Sm),
    (0x208d, 0x208d, Ps),
    (0x208e, 0x208e, Pe),
    (0x2090, 0x209c, Lm),
    (0x20a0, 0x20c0, Sc),
    (0x20d0, 0x20dc, Mn),
    (0x20dd, 0x20e0, Me),
    (0x20e1, 0x20e1, Mn),
    (0x20e2, 0x20e4, Me),
    (0x20e5, 0x20f0, Mn),
    // Letterlike symbols (the letters fall through to the std predicates)
    (0x2100, 0x2101, So),
    (0x2103, 0x2106, So),
    (0x2108, 0x2109, So),
    (0x2114, 0x2114, So),
    (0x2116, 0x2117, So),
    (0x2118, 0x2118, Sm),
    (0x211e, 0x2123, So),
    (0x2125, 0x2125, So),
    (0x2127, 0x2127, So),
    (0x2129, 0x2129, So),
    (0x212e, 0x212e, So),
    (0x2135, 0x2138, Lo),
    (0x213a, 0x213b, So),
    (0x2140, 0x2144, Sm),
    (0x214a, 0x214a, So),
    (0x214b, 0x214b, Sm),
    (0x214c, 0x214d, So),
    (0x214f, 0x214f, So),
    // Number forms
    (0x2150, 0x215f, No),
    (0x2160, 0x2182, Nl),
    (0x2183, 0x2183, Lu),
    (0x2184, 0x2184, Ll),
    (0x2185, 0x2188, Nl),
    (0x2189, 0x2189, No),
    (0x218a, 0x218b, So),
    // Arrows and mathematical operators
    (0x2190, 0x2194, Sm),
    (0x2195, 0x2199, So),
    (0x219a, 0x219b, Sm),
    (0x219c, 0x219f, So),
    (0x21a0, 0x21a0, Sm),
    (0x21a1, 0x21a2, So),
    (0x21a3, 0x21a3, Sm),
    (0x21a4, 0x21a5, So),
    (0x21a6, 0x21a6, Sm),
    (0x21a7, 0x21ad, So),
    (0x21ae, 0x21ae, Sm),
    (0x21af, 0x21cd, So),
    (0x21ce, 0x21cf, Sm),
    (0x21d0, 0x21d1, So),
    (0x21d2, 0x21d2, Sm),
    (0x21d3, 0x21d3, So),
    (0x21d4, 0x21d4, Sm),
    (0x21d5, 0x21f3, So),
    (0x21f4, 0x22ff, Sm),
    // Miscellaneous technical
    (0x2300, 0x2307, So),
    (0x2308, 0x2308, Ps),
    (0x2309, 0x2309, Pe),
    (0x230a, 0x230a, Ps),
    (0x230b, 0x230b, Pe),
    (0x230c, 0x231f, So),
    (0x2320, 0x2321, Sm),
    (0x2322, 0x2328, So),
    (0x2329, 0x2329, Ps),
    (0x232a, 0x232a, Pe),
    (0x232b, 0x237b, So),
    (0x237c, 0x237c, Sm),
    (0x237d, 0x239a, So),
    (0x239b, 0x23b3, Sm),
    (0x23b4, 0x23db, So),
    (0x23dc, 0x23e1, Sm),
    (0x23e2, 0x2426, So),
    (0x2440, 0x244a, So),
    // Enclosed alphanumerics, box drawing, shapes, dingbats
    (0x2460, 0x249b, No),
    (0x249c, 0x24e9, So),
    (0x24ea, 0x24ff, No),
    (0x2500, 0x25b6, So),
    (0x25b7, 0x25b7, Sm),
    (0x25b8, 0x25c0, So),
    (0x25c1, 0x25c1, Sm),
    (0x25c2, 0x25f7, So),
    (0x25f8, 0x25ff, Sm),
    (0x2600, 0x266e, So),
    (0x266f, 0x266f, Sm),
    (0x2670, 0x2767, So),
    (0x2776, 0x2793, No),
    (0x2794, 0x27bf, So),
    (0x27c0, 0x27c4, Sm),
    (0x27c7, 0x27e5, Sm),
    (0x27f0, 0x27ff, Sm),
    (0x2800, 0x28ff, So),
    (0x2900, 0x2982, Sm),
    (0x2999, 0x29d7, Sm),
    (0x29dc, 0x29fb, Sm),
    (0x29fe, 0x2aff, Sm),
    (0x2b00, 0x2b2f, So),
    (0x2b30, 0x2b44, Sm),
    (0x2b45, 0x2b46, So),
    (0x2b47, 0x2b4c, Sm),
    (0x2b4d, 0x2bff, So),
    (0x2c7c, 0x2c7d, Lm),
    (0x2ce5, 0x2cea, So),
    (0x2cf9, 0x2cfc, Po),
    (0x2cfe, 0x2cff, Po),
    (0x2d6f, 0x2d6f, Lm),
    (0x2de0, 0x2dff, Mn),
    // Supplemental punctuation
    (0x2e00, 0x2e01, Po),
    (0x2e02, 0x2e02, Pi),
    (0x2e03, 0x2e03, Pf),
    (0x2e04, 0x2e04, Pi),
    (0x2e05, 0x2e05, Pf),
    (0x2e06, 0x2e08, Po),
    (0x2e09, 0x2e09, Pi),
    (0x2e0a, 0x2e0a, Pf),
    (0x2e0b, 0x2e0b, Po),
    (0x2e0c, 0x2e0c, Pi),
    (0x2e0d, 0x2e0d, Pf),
    (0x2e0e, 0x2e16, Po),
    (0x2e17, 0x2e17, Pd),
    (0x2e18, 0x2e19, Po),
    (0x2e1a, 0x2e1a, Pd),
    (0x2e1b, 0x2e1b, Po),
    (0x2e1c, 0x2e1c, Pi),
    (0x2e1d, 0x2e1d, Pf),
    (0x2e1e, 0x2e1f, Po),
    (0x2e20, 0x2e20, Pi),
    (0x2e21, 0x2e21, Pf),
    (0x2e2a, 0x2e2e, Po),
    (0x2e2f, 0x2e2f, Lm),
    (0x2e30, 0x2e39, Po),
    (0x2e3a, 0x2e3b, Pd),
    (0x2e3c, 0x2e3f, Po),
    (0x2e40, 0x2e40, Pd),
    (0x2e41, 0x2e41, Po),
    (0x2e42, 0x2e42, Ps),
    (0x2e43, 0x2e4f, Po),
    (0x2e50, 0x2e51, So),
    (0x2e52, 0x2e54, Po),
    (0x2e80, 0x2e99, So),
    (0x2e9b, 0x2ef3, So),
    (0x2f00, 0x2fd5, So),
    (0x2ff0, 0x2fff, So),
    // CJK symbols and punctuation
    (0x3000, 0x3000, Zs),
    (0x3001, 0x3003, Po),
    (0x3004, 0x3004, So),
    (0x3005, 0x3005, Lm),
    (0x3006, 0x3006, Lo),
    (0x3007, 0x3007, Nl),
    (0x3012, 0x3013, So),
    (0x301c, 0x301c, Pd),
    (0x301d, 0x301d, Ps),
    (0x301e, 0x301f, Pe),
    (0x3020, 0x3020, So),
    (0x3021, 0x3029, Nl),
    (0x302a, 0x302d, Mn),
    (0x302e, 0x302f, Mc),
    (0x3030, 0x3030, Pd),
    (0x3031, 0x3035, Lm),
    (0x3036, 0x3037, So),
    (0x3038, 0x303a, Nl),
    (0x303b, 0x303b, Lm),
    (0x303c, 0x303c, Lo),
    (0x303d, 0x303d, Po),
    (0x303e, 0x303f, So),
    (0x3099, 0x309a, Mn),
    (0x309b, 0x309c, Sk),
    (0x309d, 0x309e, Lm),
    (0x30a0, 0x30a0, Pd),
    (0x30fb, 0x30fb, Po),
    (0x30fc, 0x30fe, Lm),
    (0x3190, 0x3191, So),
    (0x3192, 0x3195, No),
    (0x3196, 0x319f, So),
    (0x31c0, 0x31e3, So),
    (0x3200, 0x321e, So),
    (0x3220, 0x3229, No),
    (0x322a, 0x3247, So),
    (0x3248, 0x324f, No),
    (0x3250, 0x3250, So),
    (0x3251, 0x325f, No),
    (0x3260, 0x327f, So),
    (0x3280, 0x3289, No),
    (0x328a, 0x32b0, So),
    (0x32b1, 0x32bf, No),
    (0x32c0, 0x33ff, So),
    (0x4dc0, 0x4dff, So),
    // Yi, Lisu, Vai and friends
    (0xa015, 0xa015, Lm),
    (0xa490, 0xa4c6, So),
    (0xa4f8, 0xa4fd, Lm),
    (0xa4fe, 0xa4ff, Po),
    (0xa620, 0xa629, Nd),
    (0xa67f, 0xa67f, Lm),
    (0xa6e6, 0xa6ef, Nl),
    (0xa700, 0xa716, Sk),
    (0xa717, 0xa71f, Lm),
    (0xa720, 0xa721, Sk),
    (0xa770, 0xa770, Lm),
    (0xa788, 0xa788, Lm),
    (0xa789, 0xa78a, Sk),
    (0xa838, 0xa838, Sc),
    (0xa8d0, 0xa8d9, Nd),
    (0xa900, 0xa909, Nd),
    (0xa9d0, 0xa9d9, Nd),
    (0xa9f0, 0xa9f9, Nd),
    (0xaa50, 0xaa59, Nd),
    (0xabf0, 0xabf9, Nd),
    // Surrogates and private use
    (0xd800, 0xdfff, Cs),
    (0xe000, 0xf8ff, Co),
    // Presentation forms, variation selectors, small and fullwidth forms
    (0xfb29, 0xfb29, Sm),
    (0xfd3e, 0xfd3e, Pe),
    (0xfd3f, 0xfd3f, Ps),
    (0xfdfc, 0xfdfc, Sc),
    (0xfdfd, 0xfdff, So),
    (0xfe00, 0xfe0f, Mn),
    (0xfe10, 0xfe16, Po),
    (0xfe17, 0xfe17, Ps),
    (0xfe18, 0xfe18, Pe),
    (0xfe19, 0xfe19, Po),
    (0xfe20, 0xfe2f, Mn),
    (0xfe30, 0xfe30, Po),
    (0xfe31, 0xfe32, Pd),
    (0xfe33, 0xfe34, Pc),
    (0xfe45, 0xfe46, Po),
    (0xfe47, 0xfe47, Ps),
    (0xfe48, 0xfe48, Pe),
    (0xfe49, 0xfe4c, Po),
    (0xfe4d, 0xfe4f, Pc),
    (0xfe50, 0xfe52, Po),
    (0xfe54, 0xfe57, Po),
    (0xfe58, 0xfe58, Pd),
    (0xfe5f, 0xfe61, Po),
    (0xfe62, 0xfe62, Sm),
    (0xfe63, 0xfe63, Pd),
    (0xfe64, 0xfe66, Sm),
    (0xfe68, 0xfe68, Po),
    (0xfe69, 0xfe69, Sc),
    (0xfe6a, 0xfe6b, Po),
    (0xfeff, 0xfeff, Cf),
    (0xff5f, 0xff5f, Ps),
    (0xff60, 0xff60, Pe),
    (0xff61, 0xff61, Po),
    (0xff62, 0xff62, Ps),
    (0xff63, 0xff63, Pe),
    (0xff64, 0xff65, Po),
    (0xff70, 0xff70, Lm),
    (0xff9e, 0xff9f, Lm),
    (0xffe0, 0xffe1, Sc),
    (0xffe2, 0xffe2, Sm),
    (0xffe3, 0xffe3, Sk),
    (0xffe4, 0xffe4, So),
    (0xffe5, 0xffe6, Sc),
    (0xffe8, 0xffe8, So),
    (0xffe9, 0xffec, Sm),
    (0xffed, 0xffee, So),
    (0xfff9, 0xfffb, Cf),
    (0xfffc, 0xfffd, So),
    // Supplementary planes
    (0x10140, 0x10174, Nl),
    (0x10341, 0x10341, Nl),
    (0x1034a, 0x1034a, Nl),
    (0x103d1, 0x103d5, Nl),
    (0x104a0, 0x104a9, Nd),
    (0x11066, 0x1106f, Nd),
    (0x12400, 0x1246e, Nl),
    (0x1d100, 0x1d164, So),
    (0x1d165, 0x1d166, Mc),
    (0x1d167, 0x1d169, Mn),
    (0x1d16a, 0x1d16c, So),
    (0x1d16d, 0x1d172, Mc),
    (0x1d173, 0x1d17a, Cf),
    (0x1d17b, 0x1d182, Mn),
    (0x1d183, 0x1d184, So),
    (0x1d185, 0x1d18b, Mn),
    (0x1d18c, 0x1d1a9, So),
    (0x1d1aa, 0x1d1ad, Mn),
    (0x1d1ae, 0x1d1ea, So),
    (0x1d6c1, 0x1d6c1, Sm),
    (0x1d6db, 0x1d6db, Sm),
    (0x1d6fb, 0x1d6fb, Sm),
    (0x1d715, 0x1d715, Sm),
    (0x1d735, 0x1d735, Sm),
    (0x1d74f, 0x1d74f, Sm),
    (0x1d76f, 0x1d76f, Sm),
    (0x1d789, 0x1d789, Sm),
    (0x1d7a9, 0x1d7a9, Sm),
    (0x1d7c3, 0x1d7c3, Sm),
    (0x1d7ce, 0x1d7ff, Nd),
    (0x1f000, 0x1f0ff, So),
    (0x1f100, 0x1f10c, No),
    (0x1f10d, 0x1f3fa, So),
    (0x1f3fb, 0x1f3ff, Sk),
    (0x1f400, 0x1faff, So),
    (0xe0001, 0xe0001, Cf),
    (0xe0020, 0xe007f, Cf),
    (0xe0100, 0xe01ef, Mn),
    (0xf0000, 0xffffd, Co),
    (0x100000, 0x10fffd, Co),
];

/// Runs of paired brackets: even offsets from the start are `Ps`, odd are `Pe`.
pub(super) static BRACKET_PAIRS: &[(CodePoint, CodePoint)] = &[
    (0x2768, 0x2775),
    (0x27c5, 0x27c6),
    (0x27e6, 0x27ef),
    (0x2983, 0x2998),
    (0x29d8, 0x29db),
    (0x29fc, 0x29fd),
    (0x2e22, 0x2e29),
    (0x3008, 0x3011),
    (0x3014, 0x301b),
    (0xfe35, 0xfe44),
    (0xfe59, 0xfe5e),
];

/// Blocks and script aliases, keyed by lower-cased name without separators.
pub(super) static BLOCKS: &[(&str, &[(CodePoint, CodePoint)])] = &[
    ("basiclatin", &[(0x0000, 0x007f)]),
    ("latin1supplement", &[(0x0080, 0x00ff)]),
    ("latinextendeda", &[(0x0100, 0x017f)]),
    ("latinextendedb", &[(0x0180, 0x024f)]),
    ("ipaextensions", &[(0x0250, 0x02af)]),
    ("spacingmodifierletters", &[(0x02b0, 0x02ff)]),
    ("combiningdiacriticalmarks", &[(0x0300, 0x036f)]),
    ("greekandcoptic", &[(0x0370, 0x03ff)]),
    ("greek", &[(0x0370, 0x03ff)]),
    ("cyrillic", &[(0x0400, 0x04ff)]),
    ("cyrillicsupplement", &[(0x0500, 0x052f)]),
    ("armenian", &[(0x0530, 0x058f)]),
    ("hebrew", &[(0x0590, 0x05ff)]),
    ("arabic", &[(0x0600, 0x06ff)]),
    ("syriac", &[(0x0700, 0x074f)]),
    ("thaana", &[(0x0780, 0x07bf)]),
    ("devanagari", &[(0x0900, 0x097f)]),
    ("bengali", &[(0x0980, 0x09ff)]),
    ("gurmukhi", &[(0x0a00, 0x0a7f)]),
    ("gujarati", &[(0x0a80, 0x0aff)]),
    ("oriya", &[(0x0b00, 0x0b7f)]),
    ("tamil", &[(0x0b80, 0x0bff)]),
    ("telugu", &[(0x0c00, 0x0c7f)]),
    ("kannada", &[(0x0c80, 0x0cff)]),
    ("malayalam", &[(0x0d00, 0x0d7f)]),
    ("sinhala", &[(0x0d80, 0x0dff)]),
    ("thai", &[(0x0e00, 0x0e7f)]),
    ("lao", &[(0x0e80, 0x0eff)]),
    ("tibetan", &[(0x0f00, 0x0fff)]),
    ("myanmar", &[(0x1000, 0x109f)]),
    ("georgian", &[(0x10a0, 0x10ff)]),
    ("hanguljamo", &[(0x1100, 0x11ff)]),
    ("ethiopic", &[(0x1200, 0x137f)]),
    ("cherokee", &[(0x13a0, 0x13ff)]),
    ("unifiedcanadianaboriginalsyllabics", &[(0x1400, 0x167f)]),
    ("ogham", &[(0x1680, 0x169f)]),
    ("runic", &[(0x16a0, 0x16ff)]),
    ("khmer", &[(0x1780, 0x17ff)]),
    ("mongolian", &[(0x1800, 0x18af)]),
    ("phoneticextensions", &[(0x1d00, 0x1d7f)]),
    ("latinextendedadditional", &[(0x1e00, 0x1eff)]),
    ("greekextended", &[(0x1f00, 0x1fff)]),
    ("generalpunctuation", &[(0x2000, 0x206f)]),
    ("superscriptsandsubscripts", &[(0x2070, 0x209f)]),
    ("currencysymbols", &[(0x20a0, 0x20cf)]),
    ("combiningdiacriticalmarksforsymbols", &[(0x20d0, 0x20ff)]),
    ("letterlikesymbols", &[(0x2100, 0x214f)]),
    ("numberforms", &[(0x2150, 0x218f)]),
    ("arrows", &[(0x2190, 0x21ff)]),
    ("mathematicaloperators", &[(0x2200, 0x22ff)]),
    ("miscellaneoustechnical", &[(0x2300, 0x23ff)]),
    ("controlpictures", &[(0x2400, 0x243f)]),
    ("opticalcharacterrecognition", &[(0x2440, 0x245f)]),
    ("enclosedalphanumerics", &[(0x2460, 0x24ff)]),
    ("boxdrawing", &[(0x2500, 0x257f)]),
    ("blockelements", &[(0x2580, 0x259f)]),
    ("geometricshapes", &[(0x25a0, 0x25ff)]),
    ("miscellaneoussymbols", &[(0x2600, 0x26ff)]),
    ("dingbats", &[(0x2700, 0x27bf)]),
    ("braillepatterns", &[(0x2800, 0x28ff)]),
    ("cjkradicalssupplement", &[(0x2e80, 0x2eff)]),
    ("kangxiradicals", &[(0x2f00, 0x2fdf)]),
    ("ideographicdescriptioncharacters", &[(0x2ff0, 0x2fff)]),
    ("cjksymbolsandpunctuation", &[(0x3000, 0x303f)]),
    ("hiragana", &[(0x3040, 0x309f)]),
    ("katakana", &[(0x30a0, 0x30ff)]),
    ("bopomofo", &[(0x3100, 0x312f)]),
    ("hangulcompatibilityjamo", &[(0x3130, 0x318f)]),
    ("kanbun", &[(0x3190, 0x319f)]),
    ("bopomofoextended", &[(0x31a0, 0x31bf)]),
    ("enclosedcjklettersandmonths", &[(0x3200, 0x32ff)]),
    ("cjkcompatibility", &[(0x3300, 0x33ff)]),
    ("cjkunifiedideographsextensiona", &[(0x3400, 0x4dbf)]),
    ("cjkunifiedideographs", &[(0x4e00, 0x9fff)]),
    ("yisyllables", &[(0xa000, 0xa48f)]),
    ("yiradicals", &[(0xa490, 0xa4cf)]),
    ("hangulsyllables", &[(0xac00, 0xd7af)]),
    ("highsurrogates", &[(0xd800, 0xdb7f)]),
    ("lowsurrogates", &[(0xdc00, 0xdfff)]),
    ("privateusearea", &[(0xe000, 0xf8ff)]),
    ("privateuse", &[(0xe000, 0xf8ff)]),
    ("cjkcompatibilityideographs", &[(0xf900, 0xfaff)]),
    ("alphabeticpresentationforms", &[(0xfb00, 0xfb4f)]),
    ("arabicpresentationformsa", &[(0xfb50, 0xfdff)]),
    ("combininghalfmarks", &[(0xfe20, 0xfe2f)]),
    ("cjkcompatibilityforms", &[(0xfe30, 0xfe4f)]),
    ("smallformvariants", &[(0xfe50, 0xfe6f)]),
    ("arabicpresentationformsb", &[(0xfe70, 0xfeff)]),
    ("halfwidthandfullwidthforms", &[(0xff00, 0xffef)]),
    ("specials", &[(0xfff0, 0xffff)]),
    ("olditalic", &[(0x10300, 0x1032f)]),
    ("gothic", &[(0x10330, 0x1034f)]),
    ("deseret", &[(0x10400, 0x1044f)]),
    ("byzantinemusicalsymbols", &[(0x1d000, 0x1d0ff)]),
    ("musicalsymbols", &[(0x1d100, 0x1d1ff)]),
    ("mathematicalalphanumericsymbols", &[(0x1d400, 0x1d7ff)]),
    ("cjkunifiedideographsextensionb", &[(0x20000, 0x2a6df)]),
    ("cjkcompatibilityideographssupplement", &[(0x2f800, 0x2fa1f)]),
    ("tags", &[(0xe0000, 0xe007f)]),
    ("supplementaryprivateuseareaa", &[(0xf0000, 0xfffff)]),
    ("supplementaryprivateuseareab", &[(0x100000, 0x10ffff)]),
    (
        "latin",
        &[
            (0x0041, 0x005a),
            (0x0061, 0x007a),
            (0x00aa, 0x00aa),
            (0x00ba, 0x00ba),
            (0x00c0, 0x00d6),
            (0x00d8, 0x00f6),
            (0x00f8, 0x024f),
            (0x1e00, 0x1eff),
            (0x2c60, 0x2c7f),
            (0xa720, 0xa7ff),
            (0xff21, 0xff3a),
            (0xff41, 0xff5a),
        ],
    ),
    (
        "han",
        &[
            (0x2e80, 0x2fdf),
            (0x3005, 0x3005),
            (0x3007, 0x3007),
            (0x3021, 0x3029),
            (0x3038, 0x303b),
            (0x3400, 0x4dbf),
            (0x4e00, 0x9fff),
            (0xf900, 0xfaff),
            (0x20000, 0x2fa1f),
        ],
    ),
];
