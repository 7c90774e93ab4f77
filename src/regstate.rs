// regstate.rs - Per-match mutable state and the per-pattern state pool.
//
// A `MatchState` holds capture offsets, loop bookkeeping and the search
// cursor for one subject. Patterns keep a small pool of them so repeated
// matching does not reallocate; a `PooledState` guard hands one out and
// returns it on drop.

use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;
use smallvec::SmallVec;

use crate::regint::STATE_POOL_RETAIN;

/// Saved capture slots, restored when a zero-width or atomic construct
/// fails or must not leak its captures.
pub(crate) struct GroupSnapshot {
    begin: SmallVec<[Option<usize>; 8]>,
    end: SmallVec<[Option<usize>; 8]>,
    group_length: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MatchState {
    pub(crate) group_begin: Vec<Option<usize>>,
    pub(crate) group_end: Vec<Option<usize>>,
    /// Highest group number that has completed, the high-water mark used by
    /// conditionals and `matched_group_count`.
    pub(crate) group_length: usize,
    pub(crate) loop_count: Vec<usize>,
    pub(crate) loop_offset: Vec<usize>,
    pub(crate) subject_length: usize,
    /// Where the next search begins.
    pub(crate) first: usize,
    /// The offset passed to `exec`/`reset`.
    pub(crate) start: usize,
    pub(crate) depth: u32,
    pub(crate) steps: u64,
}

impl MatchState {
    /// State for a pattern with `group_count` capturing groups (group 0 is
    /// extra) and `loop_count` generic loops.
    pub fn new(group_count: usize, loop_count: usize) -> Self {
        MatchState {
            group_begin: vec![None; group_count + 1],
            group_end: vec![None; group_count + 1],
            group_length: 0,
            loop_count: vec![0; loop_count],
            loop_offset: vec![0; loop_count],
            subject_length: 0,
            first: 0,
            start: 0,
            depth: 0,
            steps: 0,
        }
    }

    /// Prepares for a new subject, searching from `start`.
    pub(crate) fn reset(&mut self, subject_length: usize, start: usize) {
        self.clear_groups();
        self.loop_count.fill(0);
        self.loop_offset.fill(0);
        self.subject_length = subject_length;
        self.first = start;
        self.start = start;
        self.depth = 0;
        self.steps = 0;
    }

    pub(crate) fn clear_groups(&mut self) {
        self.group_begin.fill(None);
        self.group_end.fill(None);
        self.group_length = 0;
    }

    pub(crate) fn save_groups(&self) -> GroupSnapshot {
        GroupSnapshot {
            begin: SmallVec::from_slice(&self.group_begin),
            end: SmallVec::from_slice(&self.group_end),
            group_length: self.group_length,
        }
    }

    pub(crate) fn restore_groups(&mut self, snapshot: &GroupSnapshot) {
        self.group_begin.copy_from_slice(&snapshot.begin);
        self.group_end.copy_from_slice(&snapshot.end);
        self.group_length = snapshot.group_length;
    }

    /// Offsets of group `i` when both ends are recorded and in order.
    pub fn group_span(&self, i: usize) -> Option<(usize, usize)> {
        match (self.group_begin.get(i)?, self.group_end.get(i)?) {
            (Some(b), Some(e)) if b <= e => Some((*b, *e)),
            _ => None,
        }
    }

    pub fn group_length(&self) -> usize {
        self.group_length
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn subject_length(&self) -> usize {
        self.subject_length
    }
}

// ============================================================================
// Pool
// ============================================================================

#[derive(Debug)]
pub(crate) struct StatePool {
    free: Mutex<Vec<MatchState>>,
    group_count: usize,
    loop_count: usize,
}

impl StatePool {
    pub(crate) fn new(group_count: usize, loop_count: usize) -> Self {
        StatePool {
            free: Mutex::new(Vec::new()),
            group_count,
            loop_count,
        }
    }

    /// Takes a state from the pool, or allocates one sized for the pattern.
    pub(crate) fn acquire(&self) -> PooledState<'_> {
        let state = self
            .free
            .lock()
            .pop()
            .unwrap_or_else(|| MatchState::new(self.group_count, self.loop_count));
        PooledState { pool: self, state }
    }

    fn release(&self, state: MatchState) {
        let mut free = self.free.lock();
        if free.len() < STATE_POOL_RETAIN {
            free.push(state);
        }
    }

    #[cfg(test)]
    pub(crate) fn idle(&self) -> usize {
        self.free.lock().len()
    }
}

/// A pooled state; goes back to its pool when dropped.
pub(crate) struct PooledState<'p> {
    pool: &'p StatePool,
    state: MatchState,
}

impl Deref for PooledState<'_> {
    type Target = MatchState;

    fn deref(&self) -> &MatchState {
        &self.state
    }
}

impl DerefMut for PooledState<'_> {
    fn deref_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }
}

impl Drop for PooledState<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.state));
    }
}

impl std::fmt::Debug for PooledState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.state.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_everything() {
        let mut st = MatchState::new(2, 1);
        st.group_begin[1] = Some(3);
        st.group_end[1] = Some(5);
        st.group_length = 1;
        st.loop_count[0] = 4;
        st.reset(10, 2);
        assert_eq!(st.group_span(1), None);
        assert_eq!(st.group_length(), 0);
        assert_eq!(st.loop_count[0], 0);
        assert_eq!((st.first(), st.start(), st.subject_length()), (2, 2, 10));
    }

    #[test]
    fn snapshot_restore() {
        let mut st = MatchState::new(1, 0);
        st.group_begin[1] = Some(1);
        st.group_end[1] = Some(2);
        st.group_length = 1;
        let snap = st.save_groups();
        st.clear_groups();
        st.group_begin[1] = Some(7);
        st.restore_groups(&snap);
        assert_eq!(st.group_span(1), Some((1, 2)));
        assert_eq!(st.group_length(), 1);
    }

    #[test]
    fn reversed_span_is_unset() {
        let mut st = MatchState::new(1, 0);
        st.group_begin[1] = Some(4);
        st.group_end[1] = Some(2);
        assert_eq!(st.group_span(1), None);
    }

    #[test]
    fn pool_reuses_and_caps() {
        let pool = StatePool::new(1, 0);
        {
            let _a = pool.acquire();
            let _b = pool.acquire();
            assert_eq!(pool.idle(), 0);
        }
        assert_eq!(pool.idle(), 2);
        let guards: Vec<_> = (0..STATE_POOL_RETAIN + 3).map(|_| pool.acquire()).collect();
        assert_eq!(guards[0].group_begin.len(), 2);
        drop(guards);
        assert_eq!(pool.idle(), STATE_POOL_RETAIN);
    }
}
