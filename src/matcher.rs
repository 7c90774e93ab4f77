// matcher.rs - A pattern bound to one subject.
//
// `Matcher` owns a pooled `MatchState` for the duration of its life and
// exposes the iterative `find` loop, the single-shot `exec`, and capture
// accessors over the most recent successful match.

use crate::error::MatchError;
use crate::pattern::Pattern;
use crate::regexec::{exec, search};
use crate::regstate::{MatchState, PooledState};

#[derive(Debug)]
pub struct Matcher<'p, 's> {
    pattern: &'p Pattern,
    subject: &'s [u8],
    state: PooledState<'p>,
    matched: bool,
}

impl<'p, 's> Matcher<'p, 's> {
    pub(crate) fn new(pattern: &'p Pattern, subject: &'s [u8], mut state: PooledState<'p>) -> Self {
        state.reset(subject.len(), 0);
        Matcher {
            pattern,
            subject,
            state,
            matched: false,
        }
    }

    /// Advances to the next match. Successive calls walk the subject left to
    /// right; an empty match moves the cursor one character forward so the
    /// loop always terminates.
    pub fn find(&mut self) -> Result<bool, MatchError> {
        let r = search(self.pattern, self.subject, &mut self.state);
        self.matched = matches!(r, Ok(true));
        r
    }

    /// Resets to `offset` and searches once. Returns the match start.
    pub fn exec(&mut self, offset: usize) -> Result<Option<usize>, MatchError> {
        let r = exec(self.pattern, self.subject, &mut self.state, offset);
        self.matched = matches!(r, Ok(Some(_)));
        r
    }

    /// Restarts searching at `offset`, discarding the previous match.
    pub fn reset(&mut self, offset: usize) {
        self.state.reset(self.subject.len(), offset);
        self.matched = false;
    }

    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    pub fn subject(&self) -> &'s [u8] {
        self.subject
    }

    /// Start of the last match.
    pub fn start(&self) -> Option<usize> {
        self.group_start(0)
    }

    /// End of the last match.
    pub fn end(&self) -> Option<usize> {
        self.group_end(0)
    }

    pub fn group_start(&self, i: usize) -> Option<usize> {
        self.span(i).map(|(b, _)| b)
    }

    pub fn group_end(&self, i: usize) -> Option<usize> {
        self.span(i).map(|(_, e)| e)
    }

    /// Bytes captured by group `i`, `None` when it did not participate.
    pub fn group(&self, i: usize) -> Option<&'s [u8]> {
        self.span(i).map(|(b, e)| &self.subject[b..e])
    }

    /// Group `i` as text, `None` when unset or not valid UTF-8.
    pub fn group_str(&self, i: usize) -> Option<&'s str> {
        self.group(i).and_then(|g| std::str::from_utf8(g).ok())
    }

    pub fn group_name(&self, i: usize) -> Option<&'p str> {
        self.pattern.group_name(i)
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.pattern.group_index(name)
    }

    pub fn is_matched_group(&self, i: usize) -> bool {
        self.span(i).is_some()
    }

    /// Number of leading groups a PHP match array would carry: group 0 plus
    /// every group up to the highest one that completed. Zero without a
    /// match.
    pub fn matched_group_count(&self) -> usize {
        if self.matched {
            self.state.group_length() + 1
        } else {
            0
        }
    }

    pub fn group_count(&self) -> usize {
        self.pattern.group_count()
    }

    /// Subject bytes in `from..to`, clamped to the subject.
    pub fn substring(&self, from: usize, to: usize) -> &'s [u8] {
        let to = to.min(self.subject.len());
        let from = from.min(to);
        &self.subject[from..to]
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    fn span(&self, i: usize) -> Option<(usize, usize)> {
        if !self.matched {
            return None;
        }
        self.state.group_span(i)
    }
}

#[cfg(test)]
mod tests {
    use crate::pattern::Pattern;

    #[test]
    fn find_walks_matches() {
        let p = Pattern::new(r"/(\w)(\d)?/").unwrap();
        let mut m = p.matcher(b"a1 b c2");
        let mut seen = Vec::new();
        while m.find().unwrap() {
            seen.push((m.start().unwrap(), m.end().unwrap(), m.matched_group_count()));
        }
        assert_eq!(seen, vec![(0, 2, 3), (3, 4, 2), (5, 7, 3)]);
        assert_eq!(m.start(), None);
    }

    #[test]
    fn captures_and_names() {
        let p = Pattern::new(r"/(?<k>\w+)=(?<v>\w*)/").unwrap();
        let mut m = p.matcher(b"x key=val");
        assert!(m.find().unwrap());
        assert_eq!(m.group(1), Some(&b"key"[..]));
        assert_eq!(m.group_str(2), Some("val"));
        assert_eq!(m.group_name(2), Some("v"));
        assert_eq!(m.group_index("k"), Some(1));
        assert_eq!(m.group_count(), 2);
        assert!(m.is_matched_group(2));
        assert!(!m.is_matched_group(3));
        assert_eq!(m.substring(2, 100), b"key=val");
        assert_eq!(m.substring(5, 2), b"");
    }

    #[test]
    fn unset_group_is_none() {
        let p = Pattern::new("/(a)|(b)/").unwrap();
        let mut m = p.matcher(b"b");
        assert!(m.find().unwrap());
        assert_eq!(m.group(1), None);
        assert_eq!(m.group(2), Some(&b"b"[..]));
        assert_eq!(m.matched_group_count(), 3);
    }

    #[test]
    fn exec_and_reset() {
        let p = Pattern::new("/o/").unwrap();
        let mut m = p.matcher(b"foo boo");
        assert_eq!(m.exec(3).unwrap(), Some(5));
        assert_eq!(m.exec(7).unwrap(), None);
        assert_eq!(m.start(), None);
        m.reset(2);
        assert!(m.find().unwrap());
        assert_eq!(m.start(), Some(2));
        assert_eq!(m.state().start(), 2);
    }
}
