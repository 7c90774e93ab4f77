// charset.rs - Character sets for bracket classes and shorthand escapes.
//
// ASCII membership is a 128-bit map; everything above 127 is an ordered
// list of disjoint, non-adjacent inclusive ranges. The range algebra
// (insert, complement, intersect) keeps that normal form so equality and
// lookups stay simple.

use smallvec::SmallVec;

use crate::error::CompileError;
use crate::regenc::{CodePoint, ASCII_LIMIT, MAX_CODE_POINT};

type RangeList = SmallVec<[(CodePoint, CodePoint); 4]>;

const MB_START: CodePoint = ASCII_LIMIT + 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    bits: u128,
    ranges: RangeList,
}

impl CharSet {
    pub fn new() -> Self {
        CharSet::default()
    }

    /// Set holding exactly the given ASCII bytes.
    pub fn from_ascii(bytes: &[u8]) -> Self {
        let mut set = CharSet::new();
        for &b in bytes {
            set.add_char(b as CodePoint);
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0 && self.ranges.is_empty()
    }

    /// True if no member is above 127.
    pub fn is_ascii_only(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ascii_bits(&self) -> u128 {
        self.bits
    }

    /// Ranges above 127, sorted and disjoint.
    pub fn ranges(&self) -> &[(CodePoint, CodePoint)] {
        &self.ranges
    }

    #[inline]
    pub fn contains(&self, code: CodePoint) -> bool {
        if code <= ASCII_LIMIT {
            return self.bits & (1u128 << code) != 0;
        }
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < code {
                    std::cmp::Ordering::Less
                } else if lo > code {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn add_char(&mut self, code: CodePoint) {
        self.insert_range(code, code);
    }

    /// Adds `from..=to`, rejecting a reversed range.
    pub fn add_range(&mut self, from: CodePoint, to: CodePoint) -> Result<(), CompileError> {
        if from > to {
            return Err(CompileError::BadRange { from, to });
        }
        self.insert_range(from, to);
        Ok(())
    }

    pub(crate) fn insert_range(&mut self, from: CodePoint, to: CodePoint) {
        debug_assert!(from <= to);
        if from <= ASCII_LIMIT {
            let hi = to.min(ASCII_LIMIT);
            self.bits |= ascii_mask(from, hi);
        }
        if to >= MB_START {
            add_code_range(&mut self.ranges, from.max(MB_START), to);
        }
    }

    /// In-place union (`mergeOr`).
    pub fn union(&mut self, other: &CharSet) {
        self.bits |= other.bits;
        for &(lo, hi) in &other.ranges {
            add_code_range(&mut self.ranges, lo, hi);
        }
    }

    /// In-place union with the complement of `other` (`mergeOrInv`).
    pub fn union_not(&mut self, other: &CharSet) {
        self.bits |= !other.bits;
        for (lo, hi) in not_code_ranges(&other.ranges) {
            add_code_range(&mut self.ranges, lo, hi);
        }
    }

    pub fn intersect(&self, other: &CharSet) -> CharSet {
        CharSet {
            bits: self.bits & other.bits,
            ranges: and_code_ranges(&self.ranges, &other.ranges),
        }
    }

    pub fn difference(&self, other: &CharSet) -> CharSet {
        CharSet {
            bits: self.bits & !other.bits,
            ranges: and_code_ranges(&self.ranges, &not_code_ranges(&other.ranges)),
        }
    }

    pub fn complement(&self) -> CharSet {
        CharSet {
            bits: !self.bits,
            ranges: not_code_ranges(&self.ranges),
        }
    }

    // === Predefined sets ===

    /// `\d`
    pub fn digit() -> CharSet {
        let mut set = CharSet::new();
        set.insert_range('0' as CodePoint, '9' as CodePoint);
        set
    }

    /// `\s`: space, tab, newline, vertical tab, form feed, carriage return.
    pub fn space() -> CharSet {
        CharSet::from_ascii(b" \t\n\x0b\x0c\r")
    }

    /// `\w`
    pub fn word() -> CharSet {
        let mut set = CharSet::new();
        set.insert_range('a' as CodePoint, 'z' as CodePoint);
        set.insert_range('A' as CodePoint, 'Z' as CodePoint);
        set.insert_range('0' as CodePoint, '9' as CodePoint);
        set.add_char('_' as CodePoint);
        set
    }

    /// Set behind `.` without the dot-all flag: everything except `\n`.
    pub fn dot() -> CharSet {
        CharSet::from_ascii(b"\n").complement()
    }

    /// `[:name:]` classes, ASCII only.
    pub fn posix(name: &str) -> Option<CharSet> {
        let mut set = CharSet::new();
        match name {
            "alnum" => {
                set.insert_range(b'a' as u32, b'z' as u32);
                set.insert_range(b'A' as u32, b'Z' as u32);
                set.insert_range(b'0' as u32, b'9' as u32);
            }
            "alpha" => {
                set.insert_range(b'a' as u32, b'z' as u32);
                set.insert_range(b'A' as u32, b'Z' as u32);
            }
            "ascii" => set.insert_range(0, 0x7f),
            "blank" => {
                set.add_char(b' ' as u32);
                set.add_char(b'\t' as u32);
            }
            "cntrl" => {
                set.insert_range(0, 0x1f);
                set.add_char(0x7f);
            }
            "digit" => set.insert_range(b'0' as u32, b'9' as u32),
            "graph" => set.insert_range(0x21, 0x7e),
            "lower" => set.insert_range(b'a' as u32, b'z' as u32),
            "print" => set.insert_range(0x20, 0x7e),
            "punct" => {
                set.insert_range(0x21, 0x2f);
                set.insert_range(0x3a, 0x40);
                set.insert_range(0x5b, 0x60);
                set.insert_range(0x7b, 0x7e);
            }
            "space" => set = CharSet::space(),
            "upper" => set.insert_range(b'A' as u32, b'Z' as u32),
            "word" => set = CharSet::word(),
            "xdigit" => {
                set.insert_range(b'0' as u32, b'9' as u32);
                set.insert_range(b'a' as u32, b'f' as u32);
                set.insert_range(b'A' as u32, b'F' as u32);
            }
            _ => return None,
        }
        Some(set)
    }
}

#[inline]
fn ascii_mask(from: CodePoint, to: CodePoint) -> u128 {
    let width = to - from + 1;
    let ones = if width >= 128 {
        u128::MAX
    } else {
        (1u128 << width) - 1
    };
    ones << from
}

// ============================================================================
// Range list algebra
// ============================================================================

/// Inserts `from..=to`, merging with overlapping or adjacent ranges.
fn add_code_range(ranges: &mut RangeList, from: CodePoint, to: CodePoint) {
    // first range that could touch [from, to]
    let low = ranges.partition_point(|&(_, hi)| hi < from.saturating_sub(1));
    let mut high = low;
    let mut new_from = from;
    let mut new_to = to;
    while high < ranges.len() {
        let (lo, hi) = ranges[high];
        if to != MAX_CODE_POINT && lo > to + 1 {
            break;
        }
        new_from = new_from.min(lo);
        new_to = new_to.max(hi);
        high += 1;
    }
    ranges.drain(low..high);
    ranges.insert(low, (new_from, new_to));
}

/// Complement within `128..=MAX_CODE_POINT`.
fn not_code_ranges(ranges: &[(CodePoint, CodePoint)]) -> RangeList {
    let mut result = RangeList::new();
    let mut pre = MB_START;
    for &(from, to) in ranges {
        if from > pre {
            result.push((pre, from - 1));
        }
        if to == MAX_CODE_POINT {
            return result;
        }
        pre = to + 1;
    }
    result.push((pre, MAX_CODE_POINT));
    result
}

fn and_code_ranges(a: &[(CodePoint, CodePoint)], b: &[(CodePoint, CodePoint)]) -> RangeList {
    let mut result = RangeList::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let lo = a[i].0.max(b[j].0);
        let hi = a[i].1.min(b[j].1);
        if lo <= hi {
            result.push((lo, hi));
        }
        if a[i].1 < b[j].1 {
            i += 1;
        } else {
            j += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_membership() {
        let s = CharSet::from_ascii(b"abc");
        assert!(s.contains('a' as u32));
        assert!(!s.contains('d' as u32));
        assert!(s.is_ascii_only());
    }

    #[test]
    fn range_straddles_ascii_boundary() {
        let mut s = CharSet::new();
        s.add_range(0x70, 0x200).unwrap();
        assert!(s.contains(0x7f));
        assert!(s.contains(0x80));
        assert!(s.contains(0x200));
        assert!(!s.contains(0x201));
        assert_eq!(s.ranges(), &[(0x80, 0x200)]);
    }

    #[test]
    fn reversed_range_rejected() {
        let mut s = CharSet::new();
        assert_eq!(
            s.add_range('z' as u32, 'a' as u32),
            Err(CompileError::BadRange {
                from: 'z' as u32,
                to: 'a' as u32
            })
        );
    }

    #[test]
    fn ranges_merge_when_adjacent() {
        let mut s = CharSet::new();
        s.add_range(0x300, 0x30f).unwrap();
        s.add_range(0x100, 0x1ff).unwrap();
        s.add_range(0x200, 0x2ff).unwrap();
        assert_eq!(s.ranges(), &[(0x100, 0x30f)]);
        s.add_range(0x400, 0x410).unwrap();
        assert_eq!(s.ranges(), &[(0x100, 0x30f), (0x400, 0x410)]);
    }

    #[test]
    fn union_not_covers_complement() {
        let mut s = CharSet::from_ascii(b"a");
        s.union_not(&CharSet::digit());
        assert!(s.contains('a' as u32));
        assert!(s.contains('x' as u32));
        assert!(!s.contains('5' as u32));
        assert!(s.contains(0x1234));
    }

    #[test]
    fn intersect_and_difference() {
        let mut a = CharSet::new();
        a.add_range('a' as u32, 'm' as u32).unwrap();
        a.add_range(0x100, 0x1ff).unwrap();
        let mut b = CharSet::new();
        b.add_range('k' as u32, 'z' as u32).unwrap();
        b.add_range(0x180, 0x2ff).unwrap();

        let i = a.intersect(&b);
        assert!(i.contains('k' as u32) && i.contains('m' as u32));
        assert!(!i.contains('a' as u32) && !i.contains('n' as u32));
        assert_eq!(i.ranges(), &[(0x180, 0x1ff)]);

        let d = a.difference(&b);
        assert!(d.contains('a' as u32));
        assert!(!d.contains('k' as u32));
        assert_eq!(d.ranges(), &[(0x100, 0x17f)]);
    }

    #[test]
    fn complement_twice_is_identity() {
        let mut s = CharSet::word();
        s.add_range(0x4e00, 0x9fff).unwrap();
        assert_eq!(s.complement().complement(), s);
        assert!(!s.complement().contains('_' as u32));
        assert!(s.complement().contains(MAX_CODE_POINT));
    }

    #[test]
    fn dot_excludes_newline_only() {
        let d = CharSet::dot();
        assert!(!d.contains('\n' as u32));
        assert!(d.contains('\r' as u32));
        assert!(d.contains(0xe9));
    }

    #[test]
    fn posix_classes() {
        assert!(CharSet::posix("xdigit").unwrap().contains('F' as u32));
        assert!(CharSet::posix("punct").unwrap().contains('~' as u32));
        assert!(!CharSet::posix("punct").unwrap().contains('a' as u32));
        assert!(CharSet::posix("blank").unwrap().contains('\t' as u32));
        assert!(CharSet::posix("bogus").is_none());
    }
}
