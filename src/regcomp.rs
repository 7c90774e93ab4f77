// regcomp.rs - Pattern compilation: delimiter and flag handling, parsing,
// and the search optimization info derived from the node program.

use std::ops::Range;

use crate::error::CompileError;
use crate::options::PatternFlags;
use crate::pattern::Pattern;
use crate::regenc::{char_at, encoding_for, PatternEncoding};
use crate::regerror::*;
use crate::regint::*;
use crate::regparse::parse;

/// Search hints computed once per pattern.
#[derive(Debug, Clone, Default)]
pub(crate) struct OptimizeInfo {
    /// Minimum number of characters any match consumes.
    pub min_length: usize,
    /// Bytes a match can start with; `None` when unknown or unrestricted.
    pub map: Option<Box<[bool; CHAR_MAP_SIZE]>>,
    /// The only byte a match can start with.
    pub first_byte: Option<u8>,
    /// Literal every match starts with (two bytes or more).
    pub exact: Option<Box<[u8]>>,
    /// Every match starts at subject offset 0.
    pub anchored_at_start: bool,
}

// ============================================================================
// Distance helpers
// ============================================================================

#[inline]
fn distance_add(d1: usize, d2: usize) -> usize {
    d1.saturating_add(d2)
}

#[inline]
fn distance_multiply(d: usize, m: usize) -> usize {
    if is_infinite_repeat(m) {
        return if d == 0 { 0 } else { usize::MAX };
    }
    d.saturating_mul(m)
}

// ============================================================================
// Front end
// ============================================================================

/// Compiles a delimited pattern such as `/ab+c/i`.
///
/// `flags` are OR'ed with the flag letters after the closing delimiter.
pub fn compile(text: &[u8], flags: PatternFlags) -> Result<Pattern, CompileError> {
    let result = split_delimiters(text).and_then(|(body, flag_start)| {
        let letters = PatternFlags::parse(&text[flag_start..]).map_err(|(i, ch)| {
            CompileError::syntax(
                flag_start + i,
                format!("{} '{}'", ERR_UNKNOWN_MODIFIER, ch as char),
            )
        })?;
        compile_program(text, &text[body.clone()], body.start, flags | letters)
    });
    if let Err(e) = &result {
        log::debug!("compile of {:?} failed: {}", String::from_utf8_lossy(text), e);
    }
    result
}

/// Compiles a bare pattern body with no delimiters. `source` is what the
/// resulting pattern reports as its text.
pub(crate) fn compile_body(
    source: &[u8],
    body: &[u8],
    flags: PatternFlags,
) -> Result<Pattern, CompileError> {
    let result = compile_program(source, body, 0, flags);
    if let Err(e) = &result {
        log::debug!("compile of {:?} failed: {}", String::from_utf8_lossy(source), e);
    }
    result
}

/// Locates the pattern body and the start of the flag letters.
fn split_delimiters(text: &[u8]) -> Result<(Range<usize>, usize), CompileError> {
    if text.len() < 2 {
        return Err(CompileError::syntax(0, ERR_PATTERN_TOO_SHORT));
    }
    let open_pos = text
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or_else(|| CompileError::syntax(0, ERR_PATTERN_TOO_SHORT))?;
    let open = text[open_pos];
    if open.is_ascii_alphanumeric() || open == b'\\' {
        return Err(CompileError::syntax(open_pos, ERR_DELIMITER_ALNUM));
    }
    let close = match open {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        b'<' => b'>',
        c => c,
    };
    let body_start = open_pos + 1;
    let end = text[body_start..]
        .iter()
        .rposition(|&b| b == close)
        .map(|i| body_start + i)
        .ok_or_else(|| CompileError::syntax(open_pos, ERR_NO_END_DELIMITER))?;
    Ok((body_start..end, end + 1))
}

fn compile_program(
    source: &[u8],
    body: &[u8],
    base: usize,
    mut flags: PatternFlags,
) -> Result<Pattern, CompileError> {
    let is_utf8_text = std::str::from_utf8(body).is_ok();
    if flags.contains(PatternFlags::UTF8) && !is_utf8_text {
        return Err(CompileError::syntax(base, ERR_INVALID_UTF8_PATTERN));
    }
    let mut parsed = parse(body, base, flags)?;
    if parsed.needs_utf8 {
        // block properties only make sense over code points
        if !is_utf8_text {
            return Err(CompileError::syntax(base, ERR_INVALID_UTF8_PATTERN));
        }
        flags |= PatternFlags::UTF8;
        parsed = parse(body, base, flags)?;
    }

    let enc = encoding_for(flags.contains(PatternFlags::UTF8));
    let optimize = set_optimize_info(&parsed.program, enc);
    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "compiled {:?} (min length {}, anchored {}):\n{}",
            String::from_utf8_lossy(source),
            optimize.min_length,
            optimize.anchored_at_start,
            parsed.program.dump()
        );
    }
    Ok(Pattern::from_parsed(source, flags, enc, parsed, optimize))
}

// ============================================================================
// Optimization info
// ============================================================================

pub(crate) fn set_optimize_info(prog: &Program, enc: PatternEncoding) -> OptimizeInfo {
    let mut info = OptimizeInfo {
        min_length: min_length(prog, prog.root),
        anchored_at_start: is_anchored_at_start(prog, prog.root),
        exact: exact_prefix(prog, prog.root).map(Box::from),
        ..OptimizeInfo::default()
    };

    let mut collector = FirstMap {
        prog,
        enc,
        map: [false; CHAR_MAP_SIZE],
        visits: 0,
    };
    if collector.collect(prog.root) {
        let count = collector.map.iter().filter(|&&b| b).count();
        if count == 1 {
            info.first_byte = collector.map.iter().position(|&b| b).map(|b| b as u8);
        }
        if count < CHAR_MAP_SIZE {
            info.map = Some(Box::new(collector.map));
        }
    }
    info
}

/// Minimum number of characters consumed from `id` to the end of its chain.
pub(crate) fn min_length(prog: &Program, id: NodeId) -> usize {
    let mut memo = vec![None; prog.len()];
    node_min_len(prog, id, &mut memo)
}

fn node_min_len(prog: &Program, id: NodeId, memo: &mut Vec<Option<usize>>) -> usize {
    if let Some(len) = memo[id] {
        return len;
    }
    let len = match prog.node(id) {
        Node::End | Node::LoopTail { .. } => 0,
        Node::Literal { chars, next, .. } => distance_add(*chars, node_min_len(prog, *next, memo)),
        Node::Class { next, .. } => distance_add(1, node_min_len(prog, *next, memo)),
        Node::CharLoop { min, next, .. } => distance_add(*min, node_min_len(prog, *next, memo)),
        Node::Assert { next, .. }
        | Node::GroupTail { next, .. }
        | Node::Join { next }
        | Node::Lookahead { next, .. }
        | Node::Lookbehind { next, .. }
        | Node::BackRef { next, .. }
        | Node::Recurse { next, .. } => node_min_len(prog, *next, memo),
        Node::GroupHead { body, .. } => node_min_len(prog, *body, memo),
        Node::LoopHead { min, body, tail, .. } => {
            let body_len = node_min_len(prog, *body, memo);
            let after = match prog.node(*tail) {
                Node::LoopTail { next, .. } => node_min_len(prog, *next, memo),
                _ => 0,
            };
            distance_add(distance_multiply(body_len, *min), after)
        }
        Node::Possessive {
            body, min, next, ..
        } => {
            let body_len = node_min_len(prog, *body, memo);
            distance_add(distance_multiply(body_len, *min), node_min_len(prog, *next, memo))
        }
        Node::Atomic { body, next } => distance_add(
            node_min_len(prog, *body, memo),
            node_min_len(prog, *next, memo),
        ),
        Node::Or { branches } => branches
            .iter()
            .map(|&b| node_min_len(prog, b, memo))
            .min()
            .unwrap_or(0),
        Node::Conditional { yes, no, tail, .. } => {
            let yes_len = node_min_len(prog, *yes, memo);
            let no_len = node_min_len(prog, no.unwrap_or(*tail), memo);
            yes_len.min(no_len)
        }
    };
    memo[id] = Some(len);
    len
}

fn is_anchored_at_start(prog: &Program, id: NodeId) -> bool {
    match prog.node(id) {
        Node::Assert {
            kind: Assertion::Begin,
            ..
        } => true,
        Node::GroupHead { body, .. } => is_anchored_at_start(prog, *body),
        Node::Or { branches } => branches.iter().all(|&b| is_anchored_at_start(prog, b)),
        _ => false,
    }
}

fn exact_prefix(prog: &Program, id: NodeId) -> Option<&[u8]> {
    match prog.node(id) {
        Node::Literal {
            text,
            ignore_case: false,
            ..
        } => Some(&text[..]),
        Node::GroupHead { body, .. } => exact_prefix(prog, *body),
        _ => None,
    }
}

/// Collects the bytes a match can start with.
struct FirstMap<'a> {
    prog: &'a Program,
    enc: PatternEncoding,
    map: [bool; CHAR_MAP_SIZE],
    visits: usize,
}

impl FirstMap<'_> {
    /// Returns false when the set cannot be bounded (the chain may match
    /// empty, or starts with something this analysis does not look into).
    fn collect(&mut self, id: NodeId) -> bool {
        self.visits += 1;
        if self.visits > FIRST_SET_VISIT_LIMIT {
            return false;
        }
        let prog = self.prog;
        match prog.node(id) {
            Node::End => false,
            Node::Literal {
                text,
                ignore_case,
                ..
            } => {
                if *ignore_case {
                    let (c, _) = char_at(self.enc, text, 0);
                    CharClass::CharIgnoreCase(c).mark_first_bytes(&mut self.map, self.enc);
                } else {
                    self.map[text[0] as usize] = true;
                }
                true
            }
            Node::Class { class, .. } => {
                class.mark_first_bytes(&mut self.map, self.enc);
                true
            }
            Node::CharLoop {
                class, min, next, ..
            } => {
                class.mark_first_bytes(&mut self.map, self.enc);
                *min > 0 || self.collect(*next)
            }
            Node::Assert { next, .. }
            | Node::GroupTail { next, .. }
            | Node::Join { next }
            | Node::LoopTail { next, .. } => self.collect(*next),
            Node::GroupHead { body, .. } => self.collect(*body),
            Node::LoopHead { min, body, tail, .. } => {
                if !self.collect(*body) {
                    return false;
                }
                if *min > 0 {
                    return true;
                }
                match prog.node(*tail) {
                    Node::LoopTail { next, .. } => self.collect(*next),
                    _ => false,
                }
            }
            Node::Possessive {
                body, min, next, ..
            } => self.collect(*body) && (*min > 0 || self.collect(*next)),
            Node::Atomic { body, .. } => self.collect(*body),
            Node::Or { branches } => branches.iter().all(|&b| self.collect(b)),
            Node::Lookahead { .. }
            | Node::Lookbehind { .. }
            | Node::BackRef { .. }
            | Node::Conditional { .. }
            | Node::Recurse { .. } => false,
        }
    }
}
