// regparse.rs - Recursive-descent pattern parser.
//
// Builds the node program directly: every alternative is parsed into a chain
// of nodes whose last link points at the join node handed down by the
// enclosing construct, so no separate syntax tree is kept. The last parsed
// item of a sequence stays pending until the next item arrives, which is
// what a trailing quantifier applies to.

use std::collections::HashMap;

use crate::charset::CharSet;
use crate::error::CompileError;
use crate::options::PatternFlags;
use crate::regcomp::min_length;
use crate::regenc::{char_at, encoding_for, CodePoint, PatternEncoding};
use crate::regerror::*;
use crate::regint::*;
use crate::unicode::{block_ranges, CategorySet};

/// Output of a successful parse.
#[derive(Debug)]
pub(crate) struct ParsedPattern {
    pub program: Program,
    /// Number of capturing groups, not counting group 0.
    pub group_count: usize,
    pub loop_count: usize,
    /// Indexed by group number; entry 0 is always `None`.
    pub group_names: Vec<Option<String>>,
    pub name_table: HashMap<String, usize>,
    /// A Unicode block name was used; the caller re-parses in UTF-8 mode.
    pub needs_utf8: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FragKind {
    Loop,
    Other,
}

/// The pending item of a sequence.
#[derive(Debug)]
enum Atom {
    /// A run of literal characters, materialized once the run ends.
    Literal {
        chars: Vec<CodePoint>,
        ignore_case: bool,
    },
    Single(CharClass),
    Frag {
        head: NodeId,
        tail: NodeId,
        kind: FragKind,
    },
}

/// A chain under construction. `head == END_NODE` while empty.
struct Seq {
    head: NodeId,
    tail: NodeId,
    pending: Option<Atom>,
}

impl Seq {
    fn new() -> Self {
        Seq {
            head: END_NODE,
            tail: END_NODE,
            pending: None,
        }
    }

    fn link(&mut self, prog: &mut Program, head: NodeId, tail: NodeId) {
        if self.head == END_NODE {
            self.head = head;
        } else {
            prog.set_next(self.tail, head);
        }
        self.tail = tail;
    }
}

enum PropClass {
    Categories(CategorySet, bool),
    Block(CharSet, bool),
}

pub(crate) fn parse(
    src: &[u8],
    base: usize,
    flags: PatternFlags,
) -> Result<ParsedPattern, CompileError> {
    let mut p = Parser::new(src, base, flags);

    let mut branches = Vec::new();
    loop {
        branches.push(p.prs_branch(END_NODE, true)?);
        match p.peek() {
            Some(b'|') => p.pos += 1,
            Some(b')') => return Err(p.err(p.pos, ERR_UNMATCHED_CLOSE_PAREN)),
            _ => break,
        }
    }
    let root = p.alt_node(branches);
    p.prog.root = root;

    // (?R) re-enters the pattern body without its leading anchor
    let target = match p.prog.node(root) {
        Node::Assert {
            kind: Assertion::Begin | Assertion::BeginRelative,
            next,
        } => *next,
        _ => root,
    };
    for id in std::mem::take(&mut p.recursions) {
        if let Node::Recurse { target: t, .. } = p.prog.node_mut(id) {
            *t = target;
        }
    }

    Ok(ParsedPattern {
        program: p.prog,
        group_count: p.next_group - 1,
        loop_count: p.loop_count,
        group_names: p.group_names,
        name_table: p.name_table,
        needs_utf8: p.needs_utf8,
    })
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
    /// Offset of `src` within the full pattern text, for error positions.
    base: usize,
    enc: PatternEncoding,
    flags: PatternFlags,
    prog: Program,
    next_group: usize,
    loop_count: usize,
    group_names: Vec<Option<String>>,
    name_table: HashMap<String, usize>,
    recursions: Vec<NodeId>,
    depth: u32,
    needs_utf8: bool,
}

impl<'a> Parser<'a> {
    fn new(src: &'a [u8], base: usize, flags: PatternFlags) -> Self {
        Parser {
            src,
            pos: 0,
            base,
            enc: encoding_for(flags.contains(PatternFlags::UTF8)),
            flags,
            prog: Program::new(),
            next_group: 1,
            loop_count: 0,
            group_names: vec![None],
            name_table: HashMap::new(),
            recursions: Vec::new(),
            depth: 0,
            needs_utf8: false,
        }
    }

    // === Input ===

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, n: usize) -> Option<u8> {
        self.src.get(self.pos + n).copied()
    }

    #[inline]
    fn peek_is(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    fn fetch_byte(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Next pattern character, decoded in the pattern's encoding. The `char`
    /// is only for matching syntax; the code point is the literal value.
    fn fetch(&mut self) -> Option<(CodePoint, char)> {
        if self.pos >= self.src.len() {
            return None;
        }
        let (code, len) = char_at(self.enc, self.src, self.pos);
        self.pos += len;
        Some((
            code,
            char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
        ))
    }

    fn err(&self, pos: usize, msg: &str) -> CompileError {
        CompileError::syntax(self.base + pos, msg)
    }

    fn ignore_case(&self) -> bool {
        self.flags.contains(PatternFlags::IGNORE_CASE)
    }

    fn extended(&self) -> bool {
        self.flags.contains(PatternFlags::EXTENDED)
    }

    fn is_utf8(&self) -> bool {
        self.enc.is_unicode()
    }

    fn has_case(&self, c: CodePoint) -> bool {
        self.enc.to_lower(c) != c || self.enc.to_upper(c) != c
    }

    // === Sequences ===

    fn alt_node(&mut self, branches: Vec<NodeId>) -> NodeId {
        if branches.len() == 1 {
            branches[0]
        } else {
            self.prog.push(Node::Or { branches })
        }
    }

    fn flush(&mut self, seq: &mut Seq) -> Result<(), CompileError> {
        if let Some(atom) = seq.pending.take() {
            let (head, tail) = self.materialize(atom)?;
            seq.link(&mut self.prog, head, tail);
        }
        Ok(())
    }

    fn set_pending(&mut self, seq: &mut Seq, atom: Atom) -> Result<(), CompileError> {
        self.flush(seq)?;
        seq.pending = Some(atom);
        Ok(())
    }

    fn push_node(&mut self, seq: &mut Seq, node: Node) -> Result<(), CompileError> {
        let id = self.prog.push(node);
        self.set_pending(
            seq,
            Atom::Frag {
                head: id,
                tail: id,
                kind: FragKind::Other,
            },
        )
    }

    fn push_literal(&mut self, seq: &mut Seq, code: CodePoint) -> Result<(), CompileError> {
        let ic = self.ignore_case();
        if let Some(Atom::Literal { chars, ignore_case }) = &mut seq.pending {
            if *ignore_case == ic {
                chars.push(code);
                return Ok(());
            }
        }
        self.set_pending(
            seq,
            Atom::Literal {
                chars: vec![code],
                ignore_case: ic,
            },
        )
    }

    fn char_class(&self, code: CodePoint, ignore_case: bool) -> CharClass {
        if ignore_case && self.has_case(code) {
            CharClass::CharIgnoreCase(code)
        } else {
            CharClass::Char(code)
        }
    }

    fn materialize(&mut self, atom: Atom) -> Result<(NodeId, NodeId), CompileError> {
        let id = match atom {
            Atom::Frag { head, tail, .. } => return Ok((head, tail)),
            Atom::Single(class) => self.prog.push(Node::Class {
                class,
                next: END_NODE,
            }),
            Atom::Literal { chars, ignore_case } if chars.len() == 1 => {
                let class = self.char_class(chars[0], ignore_case);
                self.prog.push(Node::Class {
                    class,
                    next: END_NODE,
                })
            }
            Atom::Literal { chars, ignore_case } => {
                let mut text = Vec::with_capacity(chars.len());
                let mut buf = [0u8; 4];
                for &c in &chars {
                    let n = self
                        .enc
                        .code_to_mbc(c, &mut buf)
                        .ok_or_else(|| self.err(self.pos, ERR_CODE_POINT_TOO_BIG))?;
                    text.extend_from_slice(&buf[..n]);
                }
                let ignore_case = ignore_case && chars.iter().any(|&c| self.has_case(c));
                self.prog.push(Node::Literal {
                    text: text.into_boxed_slice(),
                    chars: chars.len(),
                    ignore_case,
                    next: END_NODE,
                })
            }
        };
        Ok((id, id))
    }

    // === Alternatives and branches ===

    /// Parses one alternative up to `|`, `)` or the end of input and links
    /// it to `join`. Returns the head of the chain (`join` when empty).
    fn prs_branch(&mut self, join: NodeId, top_level: bool) -> Result<NodeId, CompileError> {
        let mut seq = Seq::new();
        if top_level && self.flags.contains(PatternFlags::ANCHORED) {
            self.push_node(
                &mut seq,
                Node::Assert {
                    kind: Assertion::BeginRelative,
                    next: END_NODE,
                },
            )?;
        }
        while let Some(b) = self.peek() {
            if b == b'|' || b == b')' {
                break;
            }
            self.prs_exp(&mut seq)?;
        }
        self.flush(&mut seq)?;
        if seq.head == END_NODE {
            return Ok(join);
        }
        self.prog.set_next(seq.tail, join);
        Ok(seq.head)
    }

    /// Parses the alternatives of a group body and its closing `)`. Inline
    /// flags set inside the group are dropped when it closes.
    fn prs_group_branches(
        &mut self,
        join: NodeId,
        open_pos: usize,
    ) -> Result<Vec<NodeId>, CompileError> {
        let saved = self.flags;
        let mut branches = Vec::new();
        let closed = loop {
            branches.push(self.prs_branch(join, false)?);
            match self.fetch_byte() {
                Some(b'|') => {}
                Some(b')') => break true,
                _ => break false,
            }
        };
        self.flags = saved;
        if !closed {
            return Err(self.err(open_pos, ERR_UNMATCHED_OPEN_PAREN));
        }
        Ok(branches)
    }

    fn prs_exp(&mut self, seq: &mut Seq) -> Result<(), CompileError> {
        let start = self.pos;
        let Some((code, ch)) = self.fetch() else {
            return Ok(());
        };
        match ch {
            ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c' if self.extended() => Ok(()),
            '#' if self.extended() => {
                while let Some(b) = self.fetch_byte() {
                    if b == b'\n' {
                        break;
                    }
                }
                Ok(())
            }
            '(' => match self.prs_bag(start)? {
                Some(atom) => self.set_pending(seq, atom),
                None => Ok(()),
            },
            '[' => {
                let class = self.prs_cc(start)?;
                self.set_pending(seq, Atom::Single(class))
            }
            '.' => {
                let class = if self.flags.contains(PatternFlags::DOTALL) {
                    CharClass::Any
                } else {
                    CharClass::Set(CharSet::dot())
                };
                self.set_pending(seq, Atom::Single(class))
            }
            '^' => {
                let kind = if self.flags.contains(PatternFlags::MULTILINE) {
                    Assertion::BeginLine
                } else {
                    Assertion::Begin
                };
                self.push_node(seq, Node::Assert { kind, next: END_NODE })
            }
            '$' => {
                let kind = if self.flags.contains(PatternFlags::MULTILINE) {
                    Assertion::EndLine
                } else if self.flags.contains(PatternFlags::DOLLAR_END_ONLY) {
                    Assertion::EndOnly
                } else {
                    Assertion::End
                };
                self.push_node(seq, Node::Assert { kind, next: END_NODE })
            }
            '*' => self.prs_quantifier(seq, start, 0, REPEAT_INFINITE),
            '+' => self.prs_quantifier(seq, start, 1, REPEAT_INFINITE),
            '?' => self.prs_quantifier(seq, start, 0, 1),
            '{' if seq.pending.is_some() && matches!(self.peek(), Some(b'0'..=b'9')) => {
                let (min, max) = self.fetch_interval(start)?;
                self.prs_quantifier(seq, start, min, max)
            }
            '\\' => self.prs_escape(seq, start),
            _ => self.push_literal(seq, code),
        }
    }

    // === Quantifiers ===

    fn scan_number(&mut self, start: usize) -> Result<usize, CompileError> {
        let mut n: usize = 0;
        while let Some(b @ b'0'..=b'9') = self.peek() {
            self.pos += 1;
            n = n * 10 + (b - b'0') as usize;
            if n > REPEAT_MAX {
                return Err(self.err(start, ERR_REPEAT_TOO_BIG));
            }
        }
        Ok(n)
    }

    /// `{m}`, `{m,}` or `{m,n}`; the opening brace is consumed.
    fn fetch_interval(&mut self, start: usize) -> Result<(usize, usize), CompileError> {
        let low = self.scan_number(start)?;
        let up = if self.peek_is(b',') {
            self.pos += 1;
            if matches!(self.peek(), Some(b'0'..=b'9')) {
                self.scan_number(start)?
            } else {
                REPEAT_INFINITE
            }
        } else {
            low
        };
        if self.fetch_byte() != Some(b'}') {
            return Err(self.err(start, ERR_UNTERMINATED_REPEAT));
        }
        if low > up {
            return Err(self.err(start, ERR_REPEAT_RANGE_ORDER));
        }
        Ok((low, up))
    }

    fn prs_quantifier(
        &mut self,
        seq: &mut Seq,
        start: usize,
        min: usize,
        max: usize,
    ) -> Result<(), CompileError> {
        let Some(mut atom) = seq.pending.take() else {
            return Err(self.err(start, ERR_TARGET_OF_REPEAT));
        };
        // a quantifier after a literal run repeats its last character only
        if let Atom::Literal { chars, ignore_case } = &mut atom {
            if chars.len() > 1 {
                let ignore_case = *ignore_case;
                let last = chars.pop().unwrap_or_default();
                seq.pending = Some(atom);
                self.flush(seq)?;
                atom = Atom::Literal {
                    chars: vec![last],
                    ignore_case,
                };
            }
        }

        let mut greedy = !self.flags.contains(PatternFlags::UNGREEDY);
        let mut possessive = false;
        match self.peek() {
            Some(b'?') => {
                self.pos += 1;
                greedy = !greedy;
            }
            Some(b'+') => {
                self.pos += 1;
                possessive = true;
            }
            _ => {}
        }

        seq.pending = self.apply_repeat(atom, min, max, greedy, possessive)?;
        Ok(())
    }

    fn apply_repeat(
        &mut self,
        atom: Atom,
        min: usize,
        max: usize,
        greedy: bool,
        possessive: bool,
    ) -> Result<Option<Atom>, CompileError> {
        if max == 0 {
            // x{0} matches nothing at all
            return Ok(None);
        }
        if min == 1 && max == 1 && !possessive {
            return Ok(Some(atom));
        }

        let atom = match atom {
            Atom::Literal { chars, ignore_case } => {
                Atom::Single(self.char_class(chars[0], ignore_case))
            }
            other => other,
        };

        match atom {
            Atom::Single(class) if !possessive => {
                let id = self.prog.push(Node::CharLoop {
                    class,
                    min,
                    max,
                    greedy,
                    next: END_NODE,
                });
                Ok(Some(Atom::Frag {
                    head: id,
                    tail: id,
                    kind: FragKind::Loop,
                }))
            }
            Atom::Frag {
                head,
                tail,
                kind: FragKind::Loop,
            } if min == 0 && max == 1 && !possessive => {
                match self.prog.node_mut(head) {
                    Node::CharLoop { min, .. } | Node::LoopHead { min, .. } => *min = 0,
                    _ => {}
                }
                Ok(Some(Atom::Frag {
                    head,
                    tail,
                    kind: FragKind::Loop,
                }))
            }
            atom => {
                let (head, tail) = self.materialize(atom)?;
                if possessive {
                    let id = self.prog.push(Node::Possessive {
                        body: head,
                        min,
                        max,
                        next: END_NODE,
                    });
                    return Ok(Some(Atom::Frag {
                        head: id,
                        tail: id,
                        kind: FragKind::Other,
                    }));
                }
                let index = self.loop_count;
                self.loop_count += 1;
                let loop_tail = self.prog.push(Node::LoopTail {
                    index,
                    head: END_NODE,
                    next: END_NODE,
                });
                let loop_head = self.prog.push(Node::LoopHead {
                    index,
                    min,
                    max,
                    greedy,
                    body: head,
                    tail: loop_tail,
                });
                if let Node::LoopTail { head, .. } = self.prog.node_mut(loop_tail) {
                    *head = loop_head;
                }
                self.prog.set_next(tail, loop_tail);
                Ok(Some(Atom::Frag {
                    head: loop_head,
                    tail: loop_tail,
                    kind: FragKind::Loop,
                }))
            }
        }
    }

    // === Groups ===

    /// Parses everything after `(`. Returns `None` for constructs that
    /// produce no node (comments and bare inline flags).
    fn prs_bag(&mut self, open_pos: usize) -> Result<Option<Atom>, CompileError> {
        self.depth += 1;
        if self.depth > DEFAULT_PARSE_DEPTH_LIMIT {
            return Err(self.err(open_pos, ERR_NESTED_TOO_DEEP));
        }
        let r = self.prs_bag_inner(open_pos);
        self.depth -= 1;
        r
    }

    fn prs_bag_inner(&mut self, open_pos: usize) -> Result<Option<Atom>, CompileError> {
        if !self.peek_is(b'?') {
            return self.prs_capture(open_pos, None).map(Some);
        }
        self.pos += 1;
        let code_pos = self.pos;
        let Some(c) = self.fetch_byte() else {
            return Err(self.err(open_pos, ERR_UNMATCHED_OPEN_PAREN));
        };
        match c {
            b':' => self.prs_non_capture(open_pos).map(Some),
            b'#' => {
                while let Some(b) = self.fetch_byte() {
                    if b == b')' {
                        return Ok(None);
                    }
                }
                Err(self.err(open_pos, ERR_UNTERMINATED_COMMENT))
            }
            b'=' => self.prs_lookahead(open_pos, false).map(Some),
            b'!' => self.prs_lookahead(open_pos, true).map(Some),
            b'<' if self.peek_is(b'=') => {
                self.pos += 1;
                self.prs_lookbehind(open_pos, false).map(Some)
            }
            b'<' if self.peek_is(b'!') => {
                self.pos += 1;
                self.prs_lookbehind(open_pos, true).map(Some)
            }
            b'<' => {
                let name = self.scan_group_name(b'>')?;
                self.prs_capture(open_pos, Some(name)).map(Some)
            }
            b'\'' => {
                let name = self.scan_group_name(b'\'')?;
                self.prs_capture(open_pos, Some(name)).map(Some)
            }
            b'P' => match self.fetch_byte() {
                Some(b'<') => {
                    let name = self.scan_group_name(b'>')?;
                    self.prs_capture(open_pos, Some(name)).map(Some)
                }
                Some(b'=') => {
                    let name_pos = self.pos;
                    let name = self.scan_group_name(b')')?;
                    let group = self.lookup_name(&name, name_pos)?;
                    self.backref_atom(group).map(Some)
                }
                _ => Err(self.err(code_pos, ERR_UNKNOWN_GROUP_CODE)),
            },
            b'>' => {
                let branches = self.prs_group_branches(END_NODE, open_pos)?;
                let body = self.alt_node(branches);
                let id = self.prog.push(Node::Atomic {
                    body,
                    next: END_NODE,
                });
                Ok(Some(Atom::Frag {
                    head: id,
                    tail: id,
                    kind: FragKind::Other,
                }))
            }
            b'(' => self.prs_conditional(open_pos).map(Some),
            b'R' | b'0' => {
                if self.fetch_byte() != Some(b')') {
                    return Err(self.err(code_pos, ERR_RECURSION_SYNTAX));
                }
                let id = self.prog.push(Node::Recurse {
                    target: END_NODE,
                    next: END_NODE,
                });
                self.recursions.push(id);
                Ok(Some(Atom::Frag {
                    head: id,
                    tail: id,
                    kind: FragKind::Other,
                }))
            }
            _ => {
                self.pos = code_pos;
                self.prs_option_group(open_pos)
            }
        }
    }

    fn prs_capture(
        &mut self,
        open_pos: usize,
        name: Option<String>,
    ) -> Result<Atom, CompileError> {
        let group = self.next_group;
        self.next_group += 1;
        if let Some(name) = &name {
            if self.name_table.contains_key(name) {
                return Err(self.err(open_pos, ERR_DUPLICATE_GROUP_NAME));
            }
            self.name_table.insert(name.clone(), group);
        }
        self.group_names.push(name);

        let tail = self.prog.push(Node::GroupTail {
            group,
            next: END_NODE,
        });
        let branches = self.prs_group_branches(tail, open_pos)?;
        let body = self.alt_node(branches);
        let head = self.prog.push(Node::GroupHead { group, body });
        Ok(Atom::Frag {
            head,
            tail,
            kind: FragKind::Other,
        })
    }

    fn prs_non_capture(&mut self, open_pos: usize) -> Result<Atom, CompileError> {
        let join = self.prog.push(Node::Join { next: END_NODE });
        let branches = self.prs_group_branches(join, open_pos)?;
        let head = self.alt_node(branches);
        Ok(Atom::Frag {
            head,
            tail: join,
            kind: FragKind::Other,
        })
    }

    fn prs_lookahead(&mut self, open_pos: usize, negated: bool) -> Result<Atom, CompileError> {
        let branches = self.prs_group_branches(END_NODE, open_pos)?;
        let body = self.alt_node(branches);
        let id = self.prog.push(Node::Lookahead {
            body,
            negated,
            next: END_NODE,
        });
        Ok(Atom::Frag {
            head: id,
            tail: id,
            kind: FragKind::Other,
        })
    }

    /// Each alternative steps back by its own minimum length.
    fn prs_lookbehind(&mut self, open_pos: usize, negated: bool) -> Result<Atom, CompileError> {
        let branches = self
            .prs_group_branches(END_NODE, open_pos)?
            .into_iter()
            .map(|b| (b, min_length(&self.prog, b)))
            .collect();
        let id = self.prog.push(Node::Lookbehind {
            branches,
            negated,
            next: END_NODE,
        });
        Ok(Atom::Frag {
            head: id,
            tail: id,
            kind: FragKind::Other,
        })
    }

    fn prs_conditional(&mut self, open_pos: usize) -> Result<Atom, CompileError> {
        let cond_pos = self.pos;
        let group = match self.peek() {
            Some(b'1'..=b'9') => {
                let n = self.scan_number(cond_pos)?;
                if self.fetch_byte() != Some(b')') {
                    return Err(self.err(cond_pos, ERR_CONDITION_GROUP));
                }
                if n >= self.next_group {
                    return Err(self.err(cond_pos, ERR_NON_EXISTENT_GROUP));
                }
                n
            }
            Some(b'<') | Some(b'\'') => {
                let close = if self.peek_is(b'<') { b'>' } else { b'\'' };
                self.pos += 1;
                let name = self.scan_group_name(close)?;
                if self.fetch_byte() != Some(b')') {
                    return Err(self.err(cond_pos, ERR_CONDITION_GROUP));
                }
                self.lookup_name(&name, cond_pos)?
            }
            Some(b) if b == b'_' || b.is_ascii_alphabetic() => {
                let name = self.scan_group_name(b')')?;
                self.lookup_name(&name, cond_pos)?
            }
            _ => return Err(self.err(cond_pos, ERR_CONDITION_GROUP)),
        };

        let join = self.prog.push(Node::Join { next: END_NODE });
        let branches = self.prs_group_branches(join, open_pos)?;
        if branches.len() > 2 {
            return Err(self.err(open_pos, ERR_CONDITION_BRANCHES));
        }
        let id = self.prog.push(Node::Conditional {
            group,
            yes: branches[0],
            no: branches.get(1).copied(),
            tail: join,
        });
        Ok(Atom::Frag {
            head: id,
            tail: join,
            kind: FragKind::Other,
        })
    }

    /// `(?imsxUX-imsxUX)` or `(?imsxUX-imsxUX:...)`.
    fn prs_option_group(&mut self, open_pos: usize) -> Result<Option<Atom>, CompileError> {
        let mut on = PatternFlags::empty();
        let mut off = PatternFlags::empty();
        let mut negative = false;
        loop {
            let at = self.pos;
            match self.fetch_byte() {
                Some(b'-') => negative = true,
                Some(b')') => {
                    self.flags = (self.flags | on) - off;
                    return Ok(None);
                }
                Some(b':') => {
                    let saved = self.flags;
                    self.flags = (self.flags | on) - off;
                    let atom = self.prs_non_capture(open_pos);
                    self.flags = saved;
                    return atom.map(Some);
                }
                Some(b) => {
                    let Some(flag) = PatternFlags::from_inline_letter(b as u32) else {
                        return Err(self.err(at, ERR_UNKNOWN_GROUP_CODE));
                    };
                    if negative {
                        off |= flag;
                    } else {
                        on |= flag;
                    }
                }
                None => return Err(self.err(open_pos, ERR_UNMATCHED_OPEN_PAREN)),
            }
        }
    }

    /// Reads a group name up to `close` (consumed) and validates it.
    fn scan_group_name(&mut self, close: u8) -> Result<String, CompileError> {
        let start = self.pos;
        loop {
            match self.fetch_byte() {
                Some(b) if b == close => break,
                Some(_) => {}
                None => return Err(self.err(start, ERR_UNTERMINATED_NAME)),
            }
        }
        let raw = &self.src[start..self.pos - 1];
        match raw.first() {
            None => return Err(self.err(start, ERR_EMPTY_GROUP_NAME)),
            Some(b) if b.is_ascii_digit() => {
                return Err(self.err(start, ERR_INVALID_GROUP_NAME))
            }
            _ => {}
        }
        if !raw.iter().all(|&b| b == b'_' || b.is_ascii_alphanumeric()) {
            return Err(self.err(start, ERR_INVALID_GROUP_NAME));
        }
        Ok(String::from_utf8_lossy(raw).into_owned())
    }

    fn lookup_name(&self, name: &str, pos: usize) -> Result<usize, CompileError> {
        self.name_table
            .get(name)
            .copied()
            .ok_or_else(|| self.err(pos, ERR_UNKNOWN_GROUP_NAME))
    }

    fn backref_atom(&mut self, group: usize) -> Result<Atom, CompileError> {
        let id = self.prog.push(Node::BackRef {
            group,
            next: END_NODE,
        });
        Ok(Atom::Frag {
            head: id,
            tail: id,
            kind: FragKind::Other,
        })
    }

    // === Escapes ===

    fn prs_escape(&mut self, seq: &mut Seq, start: usize) -> Result<(), CompileError> {
        let in_run = matches!(seq.pending, Some(Atom::Literal { .. }));
        let esc_pos = self.pos;
        let Some((code, ch)) = self.fetch() else {
            return Err(self.err(start, ERR_END_AT_ESCAPE));
        };
        match ch {
            'd' => self.set_pending(seq, Atom::Single(CharClass::Set(CharSet::digit()))),
            'D' => self.set_pending(seq, Atom::Single(CharClass::NotSet(CharSet::digit()))),
            's' => self.set_pending(seq, Atom::Single(CharClass::Set(CharSet::space()))),
            'S' => self.set_pending(seq, Atom::Single(CharClass::NotSet(CharSet::space()))),
            'w' => self.set_pending(seq, Atom::Single(CharClass::Set(CharSet::word()))),
            'W' => self.set_pending(seq, Atom::Single(CharClass::NotSet(CharSet::word()))),
            'b' | 'B' | 'A' | 'z' | 'Z' | 'G' => {
                let kind = match ch {
                    'b' => Assertion::WordBoundary,
                    'B' => Assertion::NotWordBoundary,
                    'A' => Assertion::StringBegin,
                    'z' => Assertion::StringEnd,
                    'Z' => Assertion::StringEndNewline,
                    _ => Assertion::SearchStart,
                };
                self.push_node(seq, Node::Assert { kind, next: END_NODE })
            }
            'p' | 'P' => {
                let class = match self.prs_char_property(ch == 'P', start)? {
                    PropClass::Categories(categories, negated) => CharClass::Property {
                        categories,
                        negated,
                    },
                    PropClass::Block(set, false) => CharClass::Set(set),
                    PropClass::Block(set, true) => CharClass::NotSet(set),
                };
                self.set_pending(seq, Atom::Single(class))
            }
            'Q' => {
                while self.pos < self.src.len() {
                    if self.peek_is(b'\\') && self.peek_at(1) == Some(b'E') {
                        self.pos += 2;
                        break;
                    }
                    if let Some((c, _)) = self.fetch() {
                        self.push_literal(seq, c)?;
                    }
                }
                Ok(())
            }
            'E' => Ok(()),
            'k' => {
                let close = match self.fetch_byte() {
                    Some(b'<') => b'>',
                    Some(b'\'') => b'\'',
                    Some(b'{') => b'}',
                    _ => return Err(self.err(start, ERR_BACKREF_SYNTAX)),
                };
                let name_pos = self.pos;
                let name = self.scan_group_name(close)?;
                let group = self.lookup_name(&name, name_pos)?;
                let atom = self.backref_atom(group)?;
                self.set_pending(seq, atom)
            }
            'g' => {
                let group = self.prs_g_reference(start)?;
                let atom = self.backref_atom(group)?;
                self.set_pending(seq, atom)
            }
            '0' => {
                let c = self.scan_octal_number(0, start)?;
                self.push_literal(seq, c)
            }
            '1'..='9' => {
                let d = code - '0' as CodePoint;
                if in_run && d as usize > self.next_group {
                    // inside a literal run only octal digits may follow
                    if d >= 8 {
                        return Err(self.err(start, ERR_EXPECTED_OCTAL));
                    }
                    let c = self.scan_octal_number(d, start)?;
                    return self.push_literal(seq, c);
                }
                self.prs_backref_or_octal(seq, esc_pos, d, start)
            }
            'x' => {
                let c = self.scan_hexadecimal_number(start)?;
                self.push_literal(seq, c)
            }
            'c' => {
                let c = self.fetch_control(start)?;
                self.push_literal(seq, c)
            }
            'a' => self.push_literal(seq, 0x07),
            'e' => self.push_literal(seq, 0x1b),
            'f' => self.push_literal(seq, 0x0c),
            'n' => self.push_literal(seq, 0x0a),
            'r' => self.push_literal(seq, 0x0d),
            't' => self.push_literal(seq, 0x09),
            c if c.is_ascii_alphanumeric() && self.flags.contains(PatternFlags::STRICT) => {
                Err(self.err(start, ERR_UNRECOGNIZED_ESCAPE))
            }
            _ => self.push_literal(seq, code),
        }
    }

    /// `\N` / `\NN` outside a literal run: backreference when the number
    /// can name a group, otherwise an octal escape or a NUL byte.
    fn prs_backref_or_octal(
        &mut self,
        seq: &mut Seq,
        digit_pos: usize,
        d: CodePoint,
        start: usize,
    ) -> Result<(), CompileError> {
        let mut value = d as usize;
        let c2 = self.peek();
        if let Some(b @ b'0'..=b'9') = c2 {
            self.pos += 1;
            value = value * 10 + (b - b'0') as usize;
        }
        let c3 = self.peek();
        let is_octal = |c: Option<u8>| matches!(c, Some(b'0'..=b'7'));

        if value < 10 || (value <= self.next_group && !is_octal(c3)) {
            let atom = self.backref_atom(value)?;
            return self.set_pending(seq, atom);
        }
        if !is_octal(c2) && !is_octal(c3) {
            return Err(self.err(start, ERR_NON_EXISTENT_GROUP));
        }

        // `\10` keeps its zero as the second octal digit
        self.pos -= 1;
        let too_big = match c3 {
            Some(b @ b'0'..=b'9') => value * 10 + (b - b'0') as usize > 0xff,
            _ => false,
        };
        if d >= 8 || too_big {
            // not an octal escape: NUL, then the digits as plain text
            self.pos = digit_pos;
            return self.push_literal(seq, 0);
        }
        let c = self.scan_octal_number(d, start)?;
        self.push_literal(seq, c)
    }

    /// Up to two further octal digits after `first`.
    fn scan_octal_number(&mut self, first: CodePoint, start: usize) -> Result<CodePoint, CompileError> {
        let mut n = first;
        for _ in 0..2 {
            match self.peek() {
                Some(b @ b'0'..=b'7') => {
                    self.pos += 1;
                    n = n * 8 + (b - b'0') as CodePoint;
                }
                _ => break,
            }
        }
        self.check_code_point(n, start)
    }

    /// `\xHH` (exactly two digits) or `\x{H...}`.
    fn scan_hexadecimal_number(&mut self, start: usize) -> Result<CodePoint, CompileError> {
        let mut n: u64 = 0;
        if self.peek_is(b'{') {
            self.pos += 1;
            loop {
                match self.fetch_byte() {
                    Some(b'}') => break,
                    Some(b) => {
                        let v = (b as char)
                            .to_digit(16)
                            .ok_or_else(|| self.err(self.pos - 1, ERR_EXPECTED_HEX))?;
                        n = n * 16 + v as u64;
                        if n > u32::MAX as u64 {
                            return Err(self.err(start, ERR_CODE_POINT_TOO_BIG));
                        }
                    }
                    None => return Err(self.err(start, ERR_EXPECTED_HEX)),
                }
            }
        } else {
            for _ in 0..2 {
                let v = self
                    .fetch_byte()
                    .and_then(|b| (b as char).to_digit(16))
                    .ok_or_else(|| self.err(self.pos.saturating_sub(1), ERR_EXPECTED_HEX))?;
                n = n * 16 + v as u64;
            }
        }
        self.check_code_point(n as CodePoint, start)
    }

    fn check_code_point(&self, code: CodePoint, start: usize) -> Result<CodePoint, CompileError> {
        let max = if self.is_utf8() { 0x10_ffff } else { 0xff };
        if code > max {
            return Err(self.err(start, ERR_CODE_POINT_TOO_BIG));
        }
        Ok(code)
    }

    /// `\cX`: upper-cased X with bit 6 flipped.
    fn fetch_control(&mut self, start: usize) -> Result<CodePoint, CompileError> {
        match self.fetch_byte() {
            Some(b) => Ok((b.to_ascii_uppercase() ^ 0x40) as CodePoint),
            None => Err(self.err(start, ERR_CONTROL_ESCAPE)),
        }
    }

    /// `\g{n}`, `\g{-n}`, `\g{name}`, `\gn`, `\g-n`.
    fn prs_g_reference(&mut self, start: usize) -> Result<usize, CompileError> {
        let braced = self.peek_is(b'{');
        if braced {
            self.pos += 1;
        }
        let relative = self.peek_is(b'-');
        if relative {
            self.pos += 1;
        }
        if !matches!(self.peek(), Some(b'0'..=b'9')) {
            if braced && !relative {
                let name_pos = self.pos;
                let name = self.scan_group_name(b'}')?;
                return self.lookup_name(&name, name_pos);
            }
            return Err(self.err(start, ERR_BACKREF_SYNTAX));
        }
        let n = self.scan_number(start)?;
        if braced && self.fetch_byte() != Some(b'}') {
            return Err(self.err(start, ERR_BACKREF_SYNTAX));
        }
        let group = if relative {
            if n == 0 || n >= self.next_group {
                return Err(self.err(start, ERR_NON_EXISTENT_GROUP));
            }
            self.next_group - n
        } else {
            n
        };
        if group == 0 {
            return Err(self.err(start, ERR_BACKREF_SYNTAX));
        }
        Ok(group)
    }

    /// `\p` / `\P` after the letter: `{Name}`, `{^Name}` or a single letter.
    fn prs_char_property(&mut self, negated: bool, start: usize) -> Result<PropClass, CompileError> {
        let name = match self.fetch_byte() {
            Some(b'{') => {
                let name_start = self.pos;
                loop {
                    match self.fetch_byte() {
                        Some(b'}') => break,
                        Some(_) => {}
                        None => return Err(self.err(start, ERR_PROPERTY_SYNTAX)),
                    }
                }
                String::from_utf8_lossy(&self.src[name_start..self.pos - 1]).into_owned()
            }
            Some(b) if b.is_ascii_alphabetic() => (b as char).to_string(),
            _ => return Err(self.err(start, ERR_PROPERTY_SYNTAX)),
        };
        let (negated, name) = match name.strip_prefix('^') {
            Some(rest) => (!negated, rest.to_string()),
            None => (negated, name),
        };
        if name == "Any" {
            return Ok(PropClass::Categories(CategorySet::all(), negated));
        }
        if let Some(categories) = CategorySet::from_property_name(&name) {
            return Ok(PropClass::Categories(categories, negated));
        }
        if let Some(ranges) = block_ranges(&name) {
            if !self.is_utf8() {
                self.needs_utf8 = true;
            }
            let mut set = CharSet::new();
            for &(lo, hi) in ranges {
                set.insert_range(lo, hi);
            }
            return Ok(PropClass::Block(set, negated));
        }
        Err(CompileError::UnknownProperty(name))
    }

    // === Bracket classes ===

    /// Parses a bracket class; the `[` is consumed.
    fn prs_cc(&mut self, open_pos: usize) -> Result<CharClass, CompileError> {
        let negated = self.peek_is(b'^');
        if negated {
            self.pos += 1;
        }
        let mut set = CharSet::new();
        let mut extras: Vec<CharClass> = Vec::new();
        let mut first = true;
        let mut last: Option<CodePoint> = None;
        let mut last_dash: Option<CodePoint> = None;

        loop {
            let Some((code, ch)) = self.fetch() else {
                return Err(self.err(open_pos, ERR_MISSING_BRACKET));
            };
            if ch == ']' && !first {
                break;
            }
            first = false;

            let mut value = Some(code);
            let is_dash = ch == '-';
            if ch == '\\' {
                let Some((e, ech)) = self.fetch() else {
                    return Err(self.err(open_pos, ERR_MISSING_BRACKET));
                };
                let esc_start = self.pos;
                value = match ech {
                    'd' => {
                        set.union(&CharSet::digit());
                        None
                    }
                    'D' => {
                        set.union_not(&CharSet::digit());
                        None
                    }
                    's' => {
                        set.union(&CharSet::space());
                        None
                    }
                    'S' => {
                        set.union_not(&CharSet::space());
                        None
                    }
                    'w' => {
                        set.union(&CharSet::word());
                        None
                    }
                    'W' => {
                        set.union_not(&CharSet::word());
                        None
                    }
                    'p' | 'P' => {
                        match self.prs_char_property(ech == 'P', esc_start)? {
                            PropClass::Categories(categories, negated) => {
                                extras.push(CharClass::Property {
                                    categories,
                                    negated,
                                })
                            }
                            PropClass::Block(block, false) => set.union(&block),
                            PropClass::Block(block, true) => set.union_not(&block),
                        }
                        None
                    }
                    'b' => Some(0x08),
                    'a' => Some(0x07),
                    'e' => Some(0x1b),
                    'f' => Some(0x0c),
                    'n' => Some(0x0a),
                    'r' => Some(0x0d),
                    't' => Some(0x09),
                    'c' => Some(self.fetch_control(esc_start)?),
                    'x' => Some(self.scan_hexadecimal_number(esc_start)?),
                    '0'..='7' => {
                        Some(self.scan_octal_number(e - '0' as CodePoint, esc_start)?)
                    }
                    c if c.is_ascii_alphanumeric()
                        && self.flags.contains(PatternFlags::STRICT) =>
                    {
                        return Err(self.err(esc_start - 1, ERR_UNRECOGNIZED_ESCAPE));
                    }
                    _ => Some(e),
                };
            } else if ch == '[' && self.peek_is(b':') {
                if let Some(posix) = self.prs_posix_bracket()? {
                    set.union(&posix);
                    value = None;
                }
            }

            // range state: `last` is a char that may start a range,
            // `last_dash` one that already saw its `-`
            match (value, last_dash) {
                (Some(_), None) if is_dash && last.is_some() => {
                    last_dash = last;
                }
                (Some(c), Some(lo)) => {
                    self.cc_add_range(&mut set, lo, c)?;
                    last = None;
                    last_dash = None;
                }
                (None, Some(lo)) => {
                    self.cc_add_range(&mut set, lo, lo)?;
                    set.add_char('-' as CodePoint);
                    last = None;
                    last_dash = None;
                }
                (value, None) => {
                    if let Some(l) = last {
                        self.cc_add_range(&mut set, l, l)?;
                    }
                    last = value;
                }
            }
        }
        if let Some(lo) = last_dash {
            self.cc_add_range(&mut set, lo, lo)?;
            set.add_char('-' as CodePoint);
        } else if let Some(l) = last {
            self.cc_add_range(&mut set, l, l)?;
        }

        if extras.is_empty() {
            return Ok(if negated {
                CharClass::NotSet(set)
            } else {
                CharClass::Set(set)
            });
        }
        let mut parts = Vec::with_capacity(extras.len() + 1);
        if !set.is_empty() {
            parts.push(CharClass::Set(set));
        }
        parts.extend(extras);
        let union = if parts.len() == 1 {
            parts.pop().unwrap_or(CharClass::Union(Vec::new()))
        } else {
            CharClass::Union(parts)
        };
        Ok(if negated {
            CharClass::Not(Box::new(union))
        } else {
            union
        })
    }

    /// `[:name:]` or `[:^name:]`, positioned at the `:`. Returns `None` and
    /// leaves the input untouched when the text is not a POSIX bracket.
    fn prs_posix_bracket(&mut self) -> Result<Option<CharSet>, CompileError> {
        let start = self.pos;
        let mut p = start + 1;
        let negated = self.src.get(p) == Some(&b'^');
        if negated {
            p += 1;
        }
        let name_start = p;
        while p < self.src.len() && self.src[p].is_ascii_alphabetic() {
            p += 1;
        }
        if p == name_start || self.src.get(p..p + 2) != Some(&b":]"[..]) {
            return Ok(None);
        }
        let name = String::from_utf8_lossy(&self.src[name_start..p]).into_owned();
        let Some(class) = CharSet::posix(&name) else {
            return Err(CompileError::UnknownClass(name));
        };
        self.pos = p + 2;
        Ok(Some(if negated { class.complement() } else { class }))
    }

    /// Adds `lo..=hi`; under ignore-case a range whose ends share a case
    /// also adds the other case's range.
    fn cc_add_range(
        &self,
        set: &mut CharSet,
        lo: CodePoint,
        hi: CodePoint,
    ) -> Result<(), CompileError> {
        set.add_range(lo, hi)?;
        if !self.ignore_case() {
            return Ok(());
        }
        let enc = self.enc;
        let is_lower = |c: CodePoint| enc.to_upper(c) != c;
        let is_upper = |c: CodePoint| enc.to_lower(c) != c;
        let mirrored = if is_lower(lo) && is_lower(hi) {
            Some((enc.to_upper(lo), enc.to_upper(hi)))
        } else if is_upper(lo) && is_upper(hi) {
            Some((enc.to_lower(lo), enc.to_lower(hi)))
        } else {
            None
        };
        if let Some((a, b)) = mirrored {
            if a <= b {
                set.insert_range(a, b);
            }
        }
        Ok(())
    }
}
