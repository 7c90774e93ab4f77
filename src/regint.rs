// regint.rs - Internal types: the node program, character classes,
// assertions and configuration constants.
//
// A compiled pattern is an arena of nodes addressed by `NodeId`. Every node
// that can be followed by something else carries a `next` link; composite
// constructs use a head/tail pair so the body can find its way back to the
// construct (`GroupHead`/`GroupTail`, `LoopHead`/`LoopTail`) or a shared
// join point after the branches (`Join`).

use std::fmt::Write as _;

use crate::charset::CharSet;
use crate::regenc::{code_eq_ignore_case, CodePoint, PatternEncoding};
use crate::unicode::CategorySet;

// === Config Constants ===
pub const DEFAULT_DEPTH_LIMIT: u32 = 4000;
pub const DEFAULT_BACKTRACK_LIMIT: u64 = 1_000_000;
/// Half of the 2 MiB stack Rust gives spawned threads.
pub const DEFAULT_STACK_LIMIT: usize = 1 << 20;
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
pub const DEFAULT_PARSE_DEPTH_LIMIT: u32 = 250;
pub const STATE_POOL_RETAIN: usize = 8;

// === Internal Constants ===
pub const CHAR_MAP_SIZE: usize = 256;
pub const REPEAT_INFINITE: usize = usize::MAX;
pub const REPEAT_MAX: usize = 65535;
pub const FIRST_SET_VISIT_LIMIT: usize = 4096;

#[inline]
pub fn is_infinite_repeat(n: usize) -> bool {
    n == REPEAT_INFINITE
}

pub type NodeId = usize;

/// Terminal node; reaching it means the match (or sub-match) succeeded.
pub const END_NODE: NodeId = 0;

// === Assertions ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assertion {
    /// `^` outside multiline mode: subject offset 0.
    Begin,
    /// `^` in multiline mode.
    BeginLine,
    /// Leading anchor added by the `A` flag: the exec offset.
    BeginRelative,
    /// `$`: end of subject, or before a final newline.
    End,
    /// `$` with the `D` flag.
    EndOnly,
    /// `$` in multiline mode.
    EndLine,
    /// `\A`
    StringBegin,
    /// `\z`
    StringEnd,
    /// `\Z`
    StringEndNewline,
    /// `\G`
    SearchStart,
    WordBoundary,
    NotWordBoundary,
}

// === Character Classes ===

/// Single-character predicate used by `Class` and `CharLoop` nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    Char(CodePoint),
    CharIgnoreCase(CodePoint),
    /// `.` in dot-all mode.
    Any,
    Set(CharSet),
    NotSet(CharSet),
    Property {
        categories: CategorySet,
        negated: bool,
    },
    Union(Vec<CharClass>),
    Not(Box<CharClass>),
}

impl CharClass {
    #[inline]
    pub fn matches(&self, enc: PatternEncoding, c: CodePoint) -> bool {
        match self {
            CharClass::Char(x) => c == *x,
            CharClass::CharIgnoreCase(x) => code_eq_ignore_case(enc, c, *x),
            CharClass::Any => true,
            CharClass::Set(set) => set.contains(c),
            CharClass::NotSet(set) => !set.contains(c),
            CharClass::Property {
                categories,
                negated,
            } => categories.matches(c) != *negated,
            CharClass::Union(parts) => parts.iter().any(|p| p.matches(enc, c)),
            CharClass::Not(inner) => !inner.matches(enc, c),
        }
    }

    /// Whether a member can lie above 127. Conservative for compound forms.
    fn may_match_non_ascii(&self) -> bool {
        match self {
            CharClass::Char(x) => *x > 127,
            CharClass::Set(set) => !set.is_ascii_only(),
            _ => true,
        }
    }

    /// Marks every subject byte that can begin a character this class
    /// accepts. In UTF-8 mode all bytes above 127 are marked as soon as any
    /// non-ASCII member is possible, since malformed input decodes byte-wise.
    pub(crate) fn mark_first_bytes(&self, map: &mut [bool; CHAR_MAP_SIZE], enc: PatternEncoding) {
        let utf8 = enc.is_unicode();
        let limit = if utf8 { 128 } else { CHAR_MAP_SIZE };
        for (b, slot) in map.iter_mut().enumerate().take(limit) {
            if !*slot && self.matches(enc, b as CodePoint) {
                *slot = true;
            }
        }
        if utf8 && self.may_match_non_ascii() {
            for slot in &mut map[128..] {
                *slot = true;
            }
        }
    }
}

// === Nodes ===

#[derive(Debug, Clone)]
pub enum Node {
    End,
    Literal {
        text: Box<[u8]>,
        chars: usize,
        ignore_case: bool,
        next: NodeId,
    },
    Class {
        class: CharClass,
        next: NodeId,
    },
    /// Repetition of a single-character class, matched without recursion
    /// per iteration.
    CharLoop {
        class: CharClass,
        min: usize,
        max: usize,
        greedy: bool,
        next: NodeId,
    },
    Assert {
        kind: Assertion,
        next: NodeId,
    },
    GroupHead {
        group: usize,
        body: NodeId,
    },
    GroupTail {
        group: usize,
        next: NodeId,
    },
    /// General loop. `index` selects the per-loop counter slot in the
    /// match state; `tail` is the `LoopTail` the body ends in.
    LoopHead {
        index: usize,
        min: usize,
        max: usize,
        greedy: bool,
        body: NodeId,
        tail: NodeId,
    },
    LoopTail {
        index: usize,
        head: NodeId,
        next: NodeId,
    },
    /// Possessive repetition; each iteration of `body` (ending at `End`) is
    /// atomic.
    Possessive {
        body: NodeId,
        min: usize,
        max: usize,
        next: NodeId,
    },
    Atomic {
        body: NodeId,
        next: NodeId,
    },
    /// Alternation; every branch continues to the shared join point itself.
    Or {
        branches: Vec<NodeId>,
    },
    Lookahead {
        body: NodeId,
        negated: bool,
        next: NodeId,
    },
    /// Each branch carries the fixed number of characters it consumes.
    Lookbehind {
        branches: Vec<(NodeId, usize)>,
        negated: bool,
        next: NodeId,
    },
    BackRef {
        group: usize,
        next: NodeId,
    },
    Conditional {
        group: usize,
        yes: NodeId,
        no: Option<NodeId>,
        tail: NodeId,
    },
    /// No-op continuation shared by the branches of a group.
    Join {
        next: NodeId,
    },
    /// Whole-pattern recursion. `target` is bound after parsing.
    Recurse {
        target: NodeId,
        next: NodeId,
    },
}

impl Node {
    fn next_mut(&mut self) -> Option<&mut NodeId> {
        match self {
            Node::Literal { next, .. }
            | Node::Class { next, .. }
            | Node::CharLoop { next, .. }
            | Node::Assert { next, .. }
            | Node::GroupTail { next, .. }
            | Node::LoopTail { next, .. }
            | Node::Possessive { next, .. }
            | Node::Atomic { next, .. }
            | Node::Lookahead { next, .. }
            | Node::Lookbehind { next, .. }
            | Node::BackRef { next, .. }
            | Node::Join { next }
            | Node::Recurse { next, .. } => Some(next),
            _ => None,
        }
    }
}

// === Program ===

/// Node arena of a compiled pattern. Slot 0 is always `Node::End`.
#[derive(Debug, Clone)]
pub struct Program {
    pub nodes: Vec<Node>,
    pub root: NodeId,
}

impl Default for Program {
    fn default() -> Self {
        Program {
            nodes: vec![Node::End],
            root: END_NODE,
        }
    }
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Links `id` to `next`. Nodes without a continuation are left alone.
    pub fn set_next(&mut self, id: NodeId, next: NodeId) {
        if id == END_NODE {
            return;
        }
        if let Some(slot) = self.nodes[id].next_mut() {
            *slot = next;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// One line per node, for trace logging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "root: #{}", self.root);
        for (id, node) in self.nodes.iter().enumerate().skip(1) {
            let _ = match node {
                Node::Literal { text, ignore_case, next, .. } => writeln!(
                    out,
                    "#{id}: literal {:?}{} -> #{next}",
                    String::from_utf8_lossy(text),
                    if *ignore_case { " (i)" } else { "" }
                ),
                other => writeln!(out, "#{id}: {:?}", other),
            };
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regenc::encoding_for;

    #[test]
    fn set_next_links_continuations() {
        let mut prog = Program::new();
        let a = prog.push(Node::Class {
            class: CharClass::Char('a' as u32),
            next: END_NODE,
        });
        let b = prog.push(Node::Join { next: END_NODE });
        prog.set_next(a, b);
        prog.set_next(END_NODE, a);
        assert!(matches!(prog.node(a), Node::Class { next, .. } if *next == b));
        assert!(matches!(prog.node(END_NODE), Node::End));
    }

    #[test]
    fn or_has_no_continuation() {
        let mut prog = Program::new();
        let or = prog.push(Node::Or { branches: vec![] });
        prog.set_next(or, 5);
        assert!(matches!(prog.node(or), Node::Or { branches } if branches.is_empty()));
    }

    #[test]
    fn class_first_bytes_byte_mode() {
        let enc = encoding_for(false);
        let mut map = [false; CHAR_MAP_SIZE];
        CharClass::CharIgnoreCase('k' as u32).mark_first_bytes(&mut map, enc);
        assert!(map[b'k' as usize] && map[b'K' as usize]);
        assert!(!map[b'j' as usize] && !map[0xc3]);
    }

    #[test]
    fn class_first_bytes_utf8_mode() {
        let enc = encoding_for(true);
        let mut map = [false; CHAR_MAP_SIZE];
        let mut set = CharSet::from_ascii(b"x");
        set.add_char(0xe9);
        CharClass::Set(set).mark_first_bytes(&mut map, enc);
        assert!(map[b'x' as usize] && map[0xc3] && map[0x80]);

        let mut map = [false; CHAR_MAP_SIZE];
        CharClass::Set(CharSet::digit()).mark_first_bytes(&mut map, enc);
        assert!(map[b'7' as usize]);
        assert!(!map[0xc3]);
    }

    #[test]
    fn property_and_negation() {
        let enc = encoding_for(true);
        let lu = CharClass::Property {
            categories: CategorySet::LU,
            negated: false,
        };
        assert!(lu.matches(enc, 'Q' as u32));
        assert!(!lu.matches(enc, 'q' as u32));
        let not = CharClass::Not(Box::new(CharClass::Union(vec![
            lu,
            CharClass::Char('1' as u32),
        ])));
        assert!(not.matches(enc, 'q' as u32));
        assert!(!not.matches(enc, '1' as u32));
    }
}
