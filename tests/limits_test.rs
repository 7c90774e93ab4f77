// limits_test.rs - Integration tests for match limits on small thread stacks.

use std::thread;

use pregex::error::MatchError;
use pregex::options::MatchLimits;
use pregex::pattern::Pattern;

/// Stack size Rust gives spawned threads by default.
const SMALL_STACK: usize = 2 << 20;

fn run_on_small_stack(pattern: &'static str, subject: String) -> Result<bool, MatchError> {
    thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(move || {
            let p = Pattern::new(pattern).unwrap();
            assert_eq!(p.limits(), MatchLimits::default());
            p.is_match(subject.as_bytes())
        })
        .unwrap()
        .join()
        .unwrap_or_else(|_| panic!("matching {:?} panicked", pattern))
}

fn assert_bounded(pattern: &'static str, subject: String) {
    let r = run_on_small_stack(pattern, subject);
    assert!(
        matches!(r, Ok(_) | Err(MatchError::TooComplex { .. })),
        "{:?}: unexpected {:?}",
        pattern,
        r
    );
}

#[test]
fn default_limits_fit_small_stack() {
    let cases: &[(&str, String)] = &[
        ("/(?:ab)*c/", "ab".repeat(20_000)),
        ("/(a)*b/", "a".repeat(40_000)),
        ("/(?:(?=a)a)*b/", "a".repeat(40_000)),
        ("/(?>a)*b/", "a".repeat(40_000)),
        ("/(?:ab)*c/", format!("{}c", "ab".repeat(20_000))),
        ("/(?:a|b)*?c/", "ab".repeat(20_000)),
    ];
    for (pattern, subject) in cases {
        assert_bounded(pattern, subject.clone());
    }
}

#[test]
fn short_subjects_still_match() {
    let r = run_on_small_stack("/(?:(?=a)a)*b/", format!("{}b", "a".repeat(100)));
    assert_eq!(r, Ok(true));
    let r = run_on_small_stack("/(?>a)*b/", "a".repeat(100));
    assert_eq!(r, Ok(false));
}

#[test]
fn stack_bound_reports_too_complex() {
    let p = Pattern::new("/(a)*b/").unwrap().with_limits(MatchLimits {
        depth_limit: u32::MAX,
        backtrack_limit: 0,
        stack_limit: 32 << 10,
    });
    let subject = "a".repeat(200_000);
    assert_eq!(
        p.is_match(subject.as_bytes()),
        Err(MatchError::TooComplex {
            depth_limit: u32::MAX
        })
    );
}
