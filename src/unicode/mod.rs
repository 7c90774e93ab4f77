// unicode/mod.rs - Unicode general categories and named blocks.
//
// Classification uses the curated range table in `tables.rs` (exact for
// Latin-1, the punctuation/symbol blocks and the common digit and mark
// ranges) and falls back to the std `char` predicates for letters and
// anything the table does not list.

mod tables;

use bitflags::bitflags;

use crate::regenc::CodePoint;
use tables::{BLOCKS, BRACKET_PAIRS, CATEGORY_RANGES};

/// Unicode general category of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GeneralCategory {
    Lu,
    Ll,
    Lt,
    Lm,
    Lo,
    Mn,
    Mc,
    Me,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Ps,
    Pe,
    Pi,
    Pf,
    Po,
    Sm,
    Sc,
    Sk,
    So,
    Zs,
    Zl,
    Zp,
    Cc,
    Cf,
    Cs,
    Co,
    Cn,
}

impl GeneralCategory {
    #[inline]
    pub fn as_set(self) -> CategorySet {
        CategorySet::from_bits_retain(1 << (self as u32))
    }
}

bitflags! {
    /// A union of general categories, as named by `\p{..}`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategorySet: u32 {
        const LU = 1 << 0;
        const LL = 1 << 1;
        const LT = 1 << 2;
        const LM = 1 << 3;
        const LO = 1 << 4;
        const MN = 1 << 5;
        const MC = 1 << 6;
        const ME = 1 << 7;
        const ND = 1 << 8;
        const NL = 1 << 9;
        const NO = 1 << 10;
        const PC = 1 << 11;
        const PD = 1 << 12;
        const PS = 1 << 13;
        const PE = 1 << 14;
        const PI = 1 << 15;
        const PF = 1 << 16;
        const PO = 1 << 17;
        const SM = 1 << 18;
        const SC = 1 << 19;
        const SK = 1 << 20;
        const SO = 1 << 21;
        const ZS = 1 << 22;
        const ZL = 1 << 23;
        const ZP = 1 << 24;
        const CC = 1 << 25;
        const CF = 1 << 26;
        const CS = 1 << 27;
        const CO = 1 << 28;
        const CN = 1 << 29;

        const L = Self::LU.bits() | Self::LL.bits() | Self::LT.bits()
            | Self::LM.bits() | Self::LO.bits();
        const M = Self::MN.bits() | Self::MC.bits() | Self::ME.bits();
        const N = Self::ND.bits() | Self::NL.bits() | Self::NO.bits();
        const P = Self::PC.bits() | Self::PD.bits() | Self::PS.bits() | Self::PE.bits()
            | Self::PI.bits() | Self::PF.bits() | Self::PO.bits();
        const S = Self::SM.bits() | Self::SC.bits() | Self::SK.bits() | Self::SO.bits();
        const Z = Self::ZS.bits() | Self::ZL.bits() | Self::ZP.bits();
        const C = Self::CC.bits() | Self::CF.bits() | Self::CS.bits()
            | Self::CO.bits() | Self::CN.bits();
    }
}

impl CategorySet {
    /// Resolves a one- or two-letter category name (`L`, `Lu`, `Nd`, ...).
    pub fn from_property_name(name: &str) -> Option<CategorySet> {
        let set = match name {
            "C" => CategorySet::C,
            "Cc" => CategorySet::CC,
            "Cf" => CategorySet::CF,
            "Cn" => CategorySet::CN,
            "Co" => CategorySet::CO,
            "Cs" => CategorySet::CS,
            "L" => CategorySet::L,
            "L&" | "LC" => CategorySet::LU | CategorySet::LL | CategorySet::LT,
            "Ll" => CategorySet::LL,
            "Lm" => CategorySet::LM,
            "Lo" => CategorySet::LO,
            "Lt" => CategorySet::LT,
            "Lu" => CategorySet::LU,
            "M" => CategorySet::M,
            "Mc" => CategorySet::MC,
            "Me" => CategorySet::ME,
            "Mn" => CategorySet::MN,
            "N" => CategorySet::N,
            "Nd" => CategorySet::ND,
            "Nl" => CategorySet::NL,
            "No" => CategorySet::NO,
            "P" => CategorySet::P,
            "Pc" => CategorySet::PC,
            "Pd" => CategorySet::PD,
            "Pe" => CategorySet::PE,
            "Pf" => CategorySet::PF,
            "Pi" => CategorySet::PI,
            "Po" => CategorySet::PO,
            "Ps" => CategorySet::PS,
            "S" => CategorySet::S,
            "Sc" => CategorySet::SC,
            "Sk" => CategorySet::SK,
            "Sm" => CategorySet::SM,
            "So" => CategorySet::SO,
            "Z" => CategorySet::Z,
            "Zl" => CategorySet::ZL,
            "Zp" => CategorySet::ZP,
            "Zs" => CategorySet::ZS,
            _ => return None,
        };
        Some(set)
    }

    #[inline]
    pub fn matches(self, code: CodePoint) -> bool {
        self.intersects(general_category(code).as_set())
    }
}

/// General category of `code`. Values above U+10FFFF are unassigned.
pub fn general_category(code: CodePoint) -> GeneralCategory {
    if let Some(gc) = lookup_table(code) {
        return gc;
    }
    // fullwidth ASCII variants share the categories of their ASCII originals
    if (0xff01..=0xff5e).contains(&code) {
        if let Some(gc) = lookup_table(code - 0xfee0) {
            return gc;
        }
    }
    let Some(c) = char::from_u32(code) else {
        return GeneralCategory::Cn;
    };
    if c.is_uppercase() {
        GeneralCategory::Lu
    } else if c.is_lowercase() {
        GeneralCategory::Ll
    } else if c.is_alphabetic() {
        GeneralCategory::Lo
    } else if c.is_numeric() {
        GeneralCategory::No
    } else if c.is_whitespace() {
        GeneralCategory::Zs
    } else if c.is_control() {
        GeneralCategory::Cc
    } else {
        GeneralCategory::Cn
    }
}

fn lookup_table(code: CodePoint) -> Option<GeneralCategory> {
    if let Ok(i) = BRACKET_PAIRS.binary_search_by(|&(lo, hi)| range_cmp(lo, hi, code)) {
        let (lo, _) = BRACKET_PAIRS[i];
        return Some(if (code - lo) % 2 == 0 {
            GeneralCategory::Ps
        } else {
            GeneralCategory::Pe
        });
    }
    CATEGORY_RANGES
        .binary_search_by(|&(lo, hi, _)| range_cmp(lo, hi, code))
        .ok()
        .map(|i| CATEGORY_RANGES[i].2)
}

#[inline]
fn range_cmp(lo: CodePoint, hi: CodePoint, code: CodePoint) -> std::cmp::Ordering {
    if hi < code {
        std::cmp::Ordering::Less
    } else if lo > code {
        std::cmp::Ordering::Greater
    } else {
        std::cmp::Ordering::Equal
    }
}

/// Ranges of a named block or script alias (`Greek`, `CJKUnifiedIdeographs`,
/// `Basic Latin`, `IsCyrillic`, ...). Matching ignores case, spaces,
/// hyphens and underscores.
pub fn block_ranges(name: &str) -> Option<&'static [(CodePoint, CodePoint)]> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect();
    find_block(&key).or_else(|| {
        key.strip_prefix("is")
            .or_else(|| key.strip_prefix("in"))
            .and_then(find_block)
    })
}

fn find_block(key: &str) -> Option<&'static [(CodePoint, CodePoint)]> {
    BLOCKS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, ranges)| *ranges)
}
