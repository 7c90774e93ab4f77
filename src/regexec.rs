// regexec.rs - Backtracking matcher and forward search.
//
// Matching is continuation-passing over the node program: matching a node
// also matches everything linked after it, and a node returns the end offset
// of the whole match or `None`. Nodes that only consume input or test a
// position advance in a loop; nodes with alternatives recurse so failure can
// fall back to the next choice. Every recursive entry is counted against the
// depth limit and checked against the native stack grown since the search
// began; every visited node is counted against the backtrack limit.

use std::sync::atomic::{AtomicU32, AtomicU64, AtomicUsize, Ordering};

use memchr::{memchr, memmem};

use crate::error::MatchError;
use crate::options::{MatchLimits, PatternFlags};
use crate::pattern::Pattern;
use crate::regenc::*;
use crate::regint::*;
use crate::regstate::MatchState;

static DEPTH_LIMIT: AtomicU32 = AtomicU32::new(DEFAULT_DEPTH_LIMIT);
static BACKTRACK_LIMIT: AtomicU64 = AtomicU64::new(DEFAULT_BACKTRACK_LIMIT);
static STACK_LIMIT: AtomicUsize = AtomicUsize::new(DEFAULT_STACK_LIMIT);

/// Process-wide default for `MatchLimits::depth_limit`, read when a pattern
/// is compiled.
pub fn set_default_depth_limit(n: u32) {
    DEPTH_LIMIT.store(n, Ordering::Relaxed);
}
pub fn get_default_depth_limit() -> u32 {
    DEPTH_LIMIT.load(Ordering::Relaxed)
}
pub fn set_default_backtrack_limit(n: u64) {
    BACKTRACK_LIMIT.store(n, Ordering::Relaxed);
}
pub fn get_default_backtrack_limit() -> u64 {
    BACKTRACK_LIMIT.load(Ordering::Relaxed)
}
pub fn set_default_stack_limit(bytes: usize) {
    STACK_LIMIT.store(bytes, Ordering::Relaxed);
}
pub fn get_default_stack_limit() -> usize {
    STACK_LIMIT.load(Ordering::Relaxed)
}

/// Address of a local in the caller's frame.
#[inline(always)]
fn stack_position() -> usize {
    let marker = 0u8;
    std::hint::black_box(&marker) as *const u8 as usize
}

type MatchResult = Result<Option<usize>, MatchError>;

#[derive(Clone, Copy)]
enum Lookaround<'p> {
    Ahead(NodeId),
    Behind(&'p [(NodeId, usize)]),
}

struct MatchCtx<'a> {
    prog: &'a Program,
    subject: &'a [u8],
    enc: PatternEncoding,
    limits: MatchLimits,
    stack_base: usize,
}

impl<'a> MatchCtx<'a> {
    fn new(pattern: &'a Pattern, subject: &'a [u8], stack_base: usize) -> Self {
        MatchCtx {
            prog: &pattern.program,
            subject,
            enc: pattern.enc,
            limits: pattern.limits,
            stack_base,
        }
    }

    #[inline]
    fn stack_exhausted(&self) -> bool {
        let limit = self.limits.stack_limit;
        limit != 0 && self.stack_base.abs_diff(stack_position()) > limit
    }

    /// Recursive entry: matches `id` and its continuation at `offset`.
    fn match_at(&self, st: &mut MatchState, id: NodeId, offset: usize) -> MatchResult {
        if st.depth >= self.limits.depth_limit || self.stack_exhausted() {
            return Err(MatchError::TooComplex {
                depth_limit: self.limits.depth_limit,
            });
        }
        st.depth += 1;
        let r = self.match_chain(st, id, offset);
        st.depth -= 1;
        r
    }

    #[inline]
    fn step(&self, st: &mut MatchState) -> Result<(), MatchError> {
        st.steps += 1;
        let limit = self.limits.backtrack_limit;
        if limit != 0 && st.steps > limit {
            return Err(MatchError::BacktrackLimit { limit });
        }
        Ok(())
    }

    fn match_chain(&self, st: &mut MatchState, mut id: NodeId, mut offset: usize) -> MatchResult {
        let s = self.subject;
        let enc = self.enc;
        loop {
            self.step(st)?;
            match self.prog.node(id) {
                Node::End => return Ok(Some(offset)),

                Node::Literal {
                    text,
                    ignore_case,
                    next,
                    ..
                } => {
                    let end = if *ignore_case {
                        self.string_cmp_ic(text, offset)
                    } else if s[offset..].starts_with(text) {
                        Some(offset + text.len())
                    } else {
                        None
                    };
                    match end {
                        Some(e) => {
                            offset = e;
                            id = *next;
                        }
                        None => return Ok(None),
                    }
                }

                Node::Class { class, next } => {
                    if offset >= s.len() {
                        return Ok(None);
                    }
                    let (c, len) = char_at(enc, s, offset);
                    if !class.matches(enc, c) {
                        return Ok(None);
                    }
                    offset += len;
                    id = *next;
                }

                Node::Assert { kind, next } => {
                    if !self.check_assertion(st, *kind, offset) {
                        return Ok(None);
                    }
                    id = *next;
                }

                Node::Join { next } => id = *next,

                Node::CharLoop {
                    class,
                    min,
                    max,
                    greedy,
                    next,
                } => return self.match_char_loop(st, class, *min, *max, *greedy, *next, offset),

                Node::GroupHead { group, body } => {
                    let saved = st.group_begin[*group];
                    st.group_begin[*group] = Some(offset);
                    let r = self.match_at(st, *body, offset)?;
                    if r.is_none() {
                        st.group_begin[*group] = saved;
                    }
                    return Ok(r);
                }

                Node::GroupTail { group, next } => {
                    let saved_end = st.group_end[*group];
                    let saved_length = st.group_length;
                    st.group_end[*group] = Some(offset);
                    if *group > st.group_length {
                        st.group_length = *group;
                    }
                    let r = self.match_at(st, *next, offset)?;
                    if r.is_none() {
                        st.group_end[*group] = saved_end;
                        st.group_length = saved_length;
                    }
                    return Ok(r);
                }

                Node::LoopHead {
                    index,
                    min,
                    max,
                    greedy,
                    body,
                    tail,
                } => {
                    let i = *index;
                    let saved = (st.loop_count[i], st.loop_offset[i]);
                    st.loop_count[i] = 0;
                    st.loop_offset[i] = offset;
                    let r = if *min > 0 {
                        self.match_at(st, *body, offset)
                    } else {
                        let exit = self.loop_exit(*tail);
                        if *max == 0 {
                            self.match_at(st, exit, offset)
                        } else if *greedy {
                            match self.match_at(st, *body, offset)? {
                                Some(e) => Ok(Some(e)),
                                None => self.match_at(st, exit, offset),
                            }
                        } else {
                            match self.match_at(st, exit, offset)? {
                                Some(e) => Ok(Some(e)),
                                None => self.match_at(st, *body, offset),
                            }
                        }
                    };
                    st.loop_count[i] = saved.0;
                    st.loop_offset[i] = saved.1;
                    return r;
                }

                Node::LoopTail { index, head, next } => {
                    return self.match_loop_tail(st, *index, *head, *next, offset);
                }

                Node::Possessive {
                    body,
                    min,
                    max,
                    next,
                } => return self.match_possessive(st, *body, *min, *max, *next, offset),

                Node::Atomic { body, next } => return self.match_atomic(st, *body, *next, offset),

                Node::Or { branches } => {
                    for &b in branches {
                        if let Some(e) = self.match_at(st, b, offset)? {
                            return Ok(Some(e));
                        }
                    }
                    return Ok(None);
                }

                Node::Lookahead {
                    body,
                    negated,
                    next,
                } => {
                    if *negated {
                        if self.lookahead_found(st, *body, offset)? {
                            return Ok(None);
                        }
                        id = *next;
                    } else {
                        return self.match_lookaround(st, Lookaround::Ahead(*body), *next, offset);
                    }
                }

                Node::Lookbehind {
                    branches,
                    negated,
                    next,
                } => {
                    if *negated {
                        if self.lookbehind_blocks(st, branches, offset)? {
                            return Ok(None);
                        }
                        id = *next;
                    } else {
                        return self.match_lookaround(st, Lookaround::Behind(branches), *next, offset);
                    }
                }

                Node::BackRef { group, next } => {
                    let Some((b, e)) = st.group_span(*group) else {
                        return Ok(None);
                    };
                    let captured = &s[b..e];
                    if !s[offset..].starts_with(captured) {
                        return Ok(None);
                    }
                    offset += captured.len();
                    id = *next;
                }

                Node::Conditional {
                    group,
                    yes,
                    no,
                    tail,
                } => {
                    let is_set = *group <= st.group_length && st.group_span(*group).is_some();
                    id = if is_set { *yes } else { no.unwrap_or(*tail) };
                }

                Node::Recurse { target, next } => match self.match_recursion(st, *target, offset)? {
                    Some(e) => {
                        offset = e;
                        id = *next;
                    }
                    None => return Ok(None),
                },
            }
        }
    }

    // Constructs that snapshot the capture slots live out of line so the
    // `SmallVec` buffers stay off the `match_chain` frame.

    #[inline(never)]
    fn match_possessive(
        &self,
        st: &mut MatchState,
        body: NodeId,
        min: usize,
        max: usize,
        next: NodeId,
        offset: usize,
    ) -> MatchResult {
        let snapshot = st.save_groups();
        let mut pos = offset;
        let mut count = 0;
        while count < max {
            match self.match_at(st, body, pos)? {
                Some(e) if e != pos => {
                    pos = e;
                    count += 1;
                }
                // an empty iteration satisfies any remaining minimum
                Some(_) => {
                    count = count.max(min);
                    break;
                }
                None => break,
            }
        }
        if count < min {
            st.restore_groups(&snapshot);
            return Ok(None);
        }
        let r = self.match_at(st, next, pos)?;
        if r.is_none() {
            st.restore_groups(&snapshot);
        }
        Ok(r)
    }

    #[inline(never)]
    fn match_atomic(&self, st: &mut MatchState, body: NodeId, next: NodeId, offset: usize) -> MatchResult {
        let snapshot = st.save_groups();
        let Some(e) = self.match_at(st, body, offset)? else {
            st.restore_groups(&snapshot);
            return Ok(None);
        };
        let r = self.match_at(st, next, e)?;
        if r.is_none() {
            st.restore_groups(&snapshot);
        }
        Ok(r)
    }

    /// Positive lookaround: captures made inside are kept while the
    /// continuation succeeds.
    #[inline(never)]
    fn match_lookaround(
        &self,
        st: &mut MatchState,
        look: Lookaround<'_>,
        next: NodeId,
        offset: usize,
    ) -> MatchResult {
        let snapshot = st.save_groups();
        let found = match look {
            Lookaround::Ahead(body) => self.match_at(st, body, offset)?.is_some(),
            Lookaround::Behind(branches) => self.any_lookbehind_branch(st, branches, offset)?,
        };
        if !found {
            st.restore_groups(&snapshot);
            return Ok(None);
        }
        let r = self.match_at(st, next, offset)?;
        if r.is_none() {
            st.restore_groups(&snapshot);
        }
        Ok(r)
    }

    /// Negative lookahead body test. Captures never survive it.
    #[inline(never)]
    fn lookahead_found(&self, st: &mut MatchState, body: NodeId, offset: usize) -> Result<bool, MatchError> {
        let snapshot = st.save_groups();
        let found = self.match_at(st, body, offset)?.is_some();
        st.restore_groups(&snapshot);
        Ok(found)
    }

    /// Negative lookbehind: each alternative is its own negative assertion
    /// and they are tried in turn, so `(?<!a|b)` fails only where every
    /// alternative matches behind `offset`.
    #[inline(never)]
    fn lookbehind_blocks(
        &self,
        st: &mut MatchState,
        branches: &[(NodeId, usize)],
        offset: usize,
    ) -> Result<bool, MatchError> {
        let snapshot = st.save_groups();
        let mut blocked = !branches.is_empty();
        for &(b, back) in branches {
            let matched = match step_back(self.enc, 0, offset, back, self.subject) {
                Some(p) => self.match_at(st, b, p)?.is_some(),
                None => false,
            };
            if !matched {
                blocked = false;
                break;
            }
        }
        st.restore_groups(&snapshot);
        Ok(blocked)
    }

    /// Tries each branch from `offset` stepped back by its minimum length.
    fn any_lookbehind_branch(
        &self,
        st: &mut MatchState,
        branches: &[(NodeId, usize)],
        offset: usize,
    ) -> Result<bool, MatchError> {
        for &(b, back) in branches {
            let Some(p) = step_back(self.enc, 0, offset, back, self.subject) else {
                continue;
            };
            if self.match_at(st, b, p)?.is_some() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Matches the whole pattern at `offset`; captures made inside the
    /// recursion are not kept.
    #[inline(never)]
    fn match_recursion(&self, st: &mut MatchState, target: NodeId, offset: usize) -> MatchResult {
        let snapshot = st.save_groups();
        let r = self.match_at(st, target, offset)?;
        st.restore_groups(&snapshot);
        Ok(r)
    }

    fn loop_exit(&self, tail: NodeId) -> NodeId {
        match self.prog.node(tail) {
            Node::LoopTail { next, .. } => *next,
            _ => END_NODE,
        }
    }

    /// One iteration of a generic loop has ended at `offset`.
    fn match_loop_tail(
        &self,
        st: &mut MatchState,
        i: usize,
        head: NodeId,
        next: NodeId,
        offset: usize,
    ) -> MatchResult {
        let Node::LoopHead {
            min,
            max,
            greedy,
            body,
            ..
        } = self.prog.node(head)
        else {
            return self.match_at(st, next, offset);
        };
        let (min, max, greedy, body) = (*min, *max, *greedy, *body);
        let saved = (st.loop_count[i], st.loop_offset[i]);
        let count = saved.0 + 1;
        let empty = offset == saved.1;

        let iterate = |ctx: &Self, st: &mut MatchState| -> MatchResult {
            st.loop_count[i] = count;
            st.loop_offset[i] = offset;
            let r = ctx.match_at(st, body, offset);
            st.loop_count[i] = saved.0;
            st.loop_offset[i] = saved.1;
            r
        };

        if count < min && !empty {
            return iterate(self, st);
        }
        // an empty iteration ends the loop
        let can_iterate = count < max && !empty;
        if !can_iterate {
            return self.match_at(st, next, offset);
        }
        if greedy {
            if let Some(e) = iterate(self, st)? {
                return Ok(Some(e));
            }
            self.match_at(st, next, offset)
        } else {
            if let Some(e) = self.match_at(st, next, offset)? {
                return Ok(Some(e));
            }
            iterate(self, st)
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn match_char_loop(
        &self,
        st: &mut MatchState,
        class: &CharClass,
        min: usize,
        max: usize,
        greedy: bool,
        next: NodeId,
        offset: usize,
    ) -> MatchResult {
        let s = self.subject;
        let enc = self.enc;
        let mut pos = offset;
        let mut count = 0;
        while count < min {
            if pos >= s.len() {
                return Ok(None);
            }
            let (c, len) = char_at(enc, s, pos);
            if !class.matches(enc, c) {
                return Ok(None);
            }
            pos += len;
            count += 1;
        }

        let need = self.leading_byte(next);
        let can_continue = |p: usize| need.map_or(true, |b| s.get(p) == Some(&b));

        if greedy {
            let base = pos;
            while count < max && pos < s.len() {
                let (c, len) = char_at(enc, s, pos);
                if !class.matches(enc, c) {
                    break;
                }
                pos += len;
                count += 1;
            }
            loop {
                if can_continue(pos) {
                    if let Some(e) = self.match_at(st, next, pos)? {
                        return Ok(Some(e));
                    }
                }
                if pos <= base {
                    return Ok(None);
                }
                pos = prev_char_head(enc, base, pos, s).unwrap_or(base);
                self.step(st)?;
            }
        } else {
            loop {
                if can_continue(pos) {
                    if let Some(e) = self.match_at(st, next, pos)? {
                        return Ok(Some(e));
                    }
                }
                if count >= max || pos >= s.len() {
                    return Ok(None);
                }
                let (c, len) = char_at(enc, s, pos);
                if !class.matches(enc, c) {
                    return Ok(None);
                }
                pos += len;
                count += 1;
                self.step(st)?;
            }
        }
    }

    /// The byte the continuation must start with, when it is a plain literal.
    fn leading_byte(&self, id: NodeId) -> Option<u8> {
        match self.prog.node(id) {
            Node::Literal {
                text,
                ignore_case: false,
                ..
            } => text.first().copied(),
            Node::Class {
                class: CharClass::Char(c),
                ..
            } if is_code_ascii(*c) => Some(*c as u8),
            _ => None,
        }
    }

    fn string_cmp_ic(&self, text: &[u8], offset: usize) -> Option<usize> {
        let s = self.subject;
        let mut p = 0;
        let mut q = offset;
        while p < text.len() {
            if q >= s.len() {
                return None;
            }
            let (a, la) = char_at(self.enc, text, p);
            let (b, lb) = char_at(self.enc, s, q);
            if !code_eq_ignore_case(self.enc, a, b) {
                return None;
            }
            p += la;
            q += lb;
        }
        Some(q)
    }

    fn check_assertion(&self, st: &MatchState, kind: Assertion, offset: usize) -> bool {
        let s = self.subject;
        let len = s.len();
        match kind {
            Assertion::Begin => offset == 0,
            Assertion::BeginLine => offset == 0 || s[offset - 1] == b'\n',
            Assertion::BeginRelative | Assertion::SearchStart => offset == st.first,
            Assertion::StringBegin => offset == st.start,
            Assertion::End | Assertion::StringEndNewline => {
                offset == len || (offset + 1 == len && s[offset] == b'\n')
            }
            Assertion::EndOnly | Assertion::StringEnd => offset == len,
            Assertion::EndLine => offset == len || s[offset] == b'\n',
            Assertion::WordBoundary => self.is_word_boundary(st, offset),
            Assertion::NotWordBoundary => !self.is_word_boundary(st, offset),
        }
    }

    fn is_word_boundary(&self, st: &MatchState, offset: usize) -> bool {
        let s = self.subject;
        let before = st.start < offset
            && prev_char_head(self.enc, st.start, offset, s)
                .is_some_and(|p| is_code_word(char_at(self.enc, s, p).0));
        let after = offset < s.len() && is_code_word(char_at(self.enc, s, offset).0);
        before != after
    }
}

// ============================================================================
// Search
// ============================================================================

/// Offset just past the character at `pos`, or past the end.
fn next_char_pos(enc: PatternEncoding, s: &[u8], pos: usize) -> usize {
    if pos >= s.len() {
        s.len() + 1
    } else {
        pos + enc.mbc_enc_len(&s[pos..]).max(1)
    }
}

fn map_search(
    enc: PatternEncoding,
    map: &[bool; CHAR_MAP_SIZE],
    s: &[u8],
    start: usize,
) -> Option<usize> {
    let mut p = start;
    while p < s.len() {
        if map[s[p] as usize] {
            return Some(p);
        }
        p += enc.mbc_enc_len(&s[p..]).max(1);
    }
    None
}

/// Next position at or after `pos` where a match could start.
fn forward_search(pattern: &Pattern, s: &[u8], pos: usize) -> Option<usize> {
    let opt = &pattern.optimize;
    if let Some(exact) = &opt.exact {
        memmem::find(&s[pos..], exact).map(|i| pos + i)
    } else if let Some(b) = opt.first_byte {
        memchr(b, &s[pos..]).map(|i| pos + i)
    } else if let Some(map) = &opt.map {
        map_search(pattern.enc, map, s, pos)
    } else {
        Some(pos)
    }
}

/// Finds the next match at or after `st.first`. On success group 0 is set
/// and `st.first` moves past the match (by one character for an empty one).
pub(crate) fn search(
    pattern: &Pattern,
    subject: &[u8],
    st: &mut MatchState,
) -> Result<bool, MatchError> {
    let len = subject.len();
    let origin = st.first;
    if origin > len {
        return Ok(false);
    }
    let ctx = MatchCtx::new(pattern, subject, stack_position());
    let opt = &pattern.optimize;
    let anchored = pattern.flags.contains(PatternFlags::ANCHORED);
    let root = pattern.program.root;

    let mut pos = origin;
    loop {
        if (opt.anchored_at_start && pos > 0) || (anchored && pos != origin) {
            break;
        }
        match forward_search(pattern, subject, pos) {
            Some(p) => pos = p,
            None => break,
        }
        if len - pos < opt.min_length {
            break;
        }

        st.clear_groups();
        st.depth = 0;
        st.steps = 0;
        match ctx.match_at(st, root, pos) {
            Ok(Some(end)) => {
                st.group_begin[0] = Some(pos);
                st.group_end[0] = Some(end);
                st.first = if end > pos {
                    end
                } else {
                    next_char_pos(pattern.enc, subject, pos)
                };
                return Ok(true);
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!(
                    "match of {:?} aborted at offset {}: {}",
                    String::from_utf8_lossy(pattern.source()),
                    pos,
                    e
                );
                st.clear_groups();
                st.depth = 0;
                return Err(e);
            }
        }

        if pos >= len {
            break;
        }
        pos = next_char_pos(pattern.enc, subject, pos);
    }
    st.first = len + 1;
    Ok(false)
}

/// Resets `st` to `offset` and runs one search. Returns the match start.
pub(crate) fn exec(
    pattern: &Pattern,
    subject: &[u8],
    st: &mut MatchState,
    offset: usize,
) -> Result<Option<usize>, MatchError> {
    st.reset(subject.len(), offset);
    if search(pattern, subject, st)? {
        Ok(st.group_begin[0])
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regcomp::compile;

    fn find_all(pattern: &str, subject: &str) -> Vec<(usize, usize)> {
        let p = compile(pattern.as_bytes(), PatternFlags::empty()).unwrap();
        let mut st = MatchState::new(p.group_count(), p.loop_count());
        st.reset(subject.len(), 0);
        let mut out = Vec::new();
        while search(&p, subject.as_bytes(), &mut st).unwrap() {
            out.push((st.group_begin[0].unwrap(), st.group_end[0].unwrap()));
        }
        out
    }

    #[test]
    fn empty_matches_advance() {
        assert_eq!(find_all("/x*/", "xax"), vec![(0, 1), (1, 1), (2, 3), (3, 3)]);
    }

    #[test]
    fn utf8_empty_matches_step_by_char() {
        assert_eq!(find_all("/x*/u", "é"), vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn anchored_flag_chains_adjacent_matches() {
        assert_eq!(find_all("/a/A", "aab"), vec![(0, 1), (1, 2)]);
        assert_eq!(find_all("/a/A", "ba"), vec![]);
    }

    #[test]
    fn exec_at_offset() {
        let p = compile(b"/\\d+/", PatternFlags::empty()).unwrap();
        let mut st = MatchState::new(0, 0);
        assert_eq!(exec(&p, b"a1b22", &mut st, 2).unwrap(), Some(3));
        assert_eq!(st.group_end[0], Some(5));
        assert_eq!(exec(&p, b"a1b22", &mut st, 6).unwrap(), None);
    }

    #[test]
    fn step_limit() {
        let p = compile(b"/(a+)+b/", PatternFlags::empty())
            .unwrap()
            .with_limits(MatchLimits {
                depth_limit: 10_000,
                backtrack_limit: 5_000,
                stack_limit: DEFAULT_STACK_LIMIT,
            });
        let mut st = MatchState::new(p.group_count(), p.loop_count());
        let r = exec(&p, b"aaaaaaaaaaaaaaaaaaaaaaaac", &mut st, 0);
        assert_eq!(r, Err(MatchError::BacktrackLimit { limit: 5_000 }));
        assert_eq!(st.group_span(1), None);
    }

    #[test]
    fn depth_limit() {
        let p = compile(b"/(?:a)*b/", PatternFlags::empty())
            .unwrap()
            .with_limits(MatchLimits {
                depth_limit: 20,
                backtrack_limit: 0,
                stack_limit: DEFAULT_STACK_LIMIT,
            });
        let mut st = MatchState::new(p.group_count(), p.loop_count());
        let r = exec(&p, "a".repeat(50).as_bytes(), &mut st, 0);
        assert_eq!(r, Err(MatchError::TooComplex { depth_limit: 20 }));
        assert_eq!(st.depth, 0);
    }

    #[test]
    fn stack_limit() {
        let p = compile(b"/(?:a)*b/", PatternFlags::empty())
            .unwrap()
            .with_limits(MatchLimits {
                depth_limit: u32::MAX,
                backtrack_limit: 0,
                stack_limit: 16 << 10,
            });
        let mut st = MatchState::new(p.group_count(), p.loop_count());
        let r = exec(&p, "a".repeat(100_000).as_bytes(), &mut st, 0);
        assert_eq!(r, Err(MatchError::TooComplex { depth_limit: u32::MAX }));
        assert_eq!(st.depth, 0);

        // the same subject fits once the bound is lifted far enough
        let p = p.with_limits(MatchLimits {
            depth_limit: u32::MAX,
            backtrack_limit: 0,
            stack_limit: 0,
        });
        let mut st = MatchState::new(p.group_count(), p.loop_count());
        assert_eq!(exec(&p, b"aaab", &mut st, 0).unwrap(), Some(0));
    }
}
