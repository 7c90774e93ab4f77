// cache_test.rs - Integration tests for memoized pattern compilation.

use std::sync::Arc;
use std::thread;

use pregex::cache::PatternCache;
use pregex::error::CompileError;

#[test]
fn compile_once_across_threads() {
    let cache = Arc::new(PatternCache::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let p = cache.get_or_compile(r"/(\w+)@(\w+)\.com/i").unwrap();
                {
                    let mut m = p.matcher(b"mail BOB@example.com");
                    assert!(m.find().unwrap());
                    assert_eq!(m.group_str(1), Some("BOB"));
                }
                p
            })
        })
        .collect();

    let patterns: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for p in &patterns[1..] {
        assert!(Arc::ptr_eq(&patterns[0], p));
    }
    let stats = cache.stats();
    assert_eq!(stats.compiles, 1);
    assert_eq!(stats.hits + stats.misses, 8);
    assert_eq!(stats.entries, 1);
}

#[test]
fn shared_pattern_matches_concurrently() {
    let cache = PatternCache::new();
    let pattern = cache.get_or_compile(r"/\d+/").unwrap();
    thread::scope(|s| {
        for i in 0..4 {
            let pattern = &pattern;
            s.spawn(move || {
                let text = format!("item {} of many", i * 111);
                let mut m = pattern.matcher(text.as_bytes());
                assert!(m.find().unwrap());
                assert_eq!(m.group_str(0), Some((i * 111).to_string().as_str()));
            });
        }
    });
}

#[test]
fn failures_are_cached() {
    let cache = PatternCache::new();
    let first = cache.get_or_compile("/(a/").unwrap_err();
    let second = cache.get_or_compile("/(a/").unwrap_err();
    assert_eq!(first, second);
    assert!(matches!(first, CompileError::Syntax { .. }));
    assert_eq!(cache.stats().compiles, 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn posix_and_preg_keys_are_distinct() {
    let cache = PatternCache::new();
    let preg = cache.get_or_compile("/a/").unwrap();
    let ereg = cache.get_or_compile_posix("/a/", false).unwrap();
    assert!(!Arc::ptr_eq(&preg, &ereg));
    // as an ereg pattern the slashes are literal
    assert!(!ereg.is_match(b"a").unwrap());
    assert!(ereg.is_match(b"/a/").unwrap());

    let eregi = cache.get_or_compile_posix("/a/", true).unwrap();
    assert!(!Arc::ptr_eq(&ereg, &eregi));
    assert!(eregi.is_match(b"/A/").unwrap());
    assert_eq!(cache.len(), 3);
}

#[test]
fn lru_eviction() {
    let cache = PatternCache::with_capacity(2);
    let a = cache.get_or_compile("/a/").unwrap();
    cache.get_or_compile("/b/").unwrap();
    cache.get_or_compile("/a/").unwrap();
    cache.get_or_compile("/c/").unwrap();
    assert_eq!(cache.len(), 2);

    // "/b/" was least recently used
    let a2 = cache.get_or_compile("/a/").unwrap();
    assert!(Arc::ptr_eq(&a, &a2));
    let before = cache.stats().compiles;
    cache.get_or_compile("/b/").unwrap();
    assert_eq!(cache.stats().compiles, before + 1);
}

#[test]
fn evicted_patterns_stay_usable() {
    let cache = PatternCache::with_capacity(1);
    let a = cache.get_or_compile("/a+/").unwrap();
    cache.get_or_compile("/b+/").unwrap();
    cache.clear();
    assert!(cache.is_empty());
    let mut m = a.matcher(b"xaa");
    assert!(m.find().unwrap());
    assert_eq!((m.start(), m.end()), (Some(1), Some(3)));
}

#[test]
fn global_cache() {
    let a = PatternCache::global().get_or_compile("/global-cache-test/").unwrap();
    let b = PatternCache::global().get_or_compile("/global-cache-test/").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}
