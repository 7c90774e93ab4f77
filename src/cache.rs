// cache.rs - Memoized pattern compilation.
//
// Every distinct pattern text is compiled at most once per cache generation.
// Lookups take the map's read lock; a miss takes the write lock only long
// enough to insert an empty slot, and the compile itself runs inside the
// slot's `OnceLock` so concurrent callers for the same text wait for one
// result instead of compiling it twice. Failures are cached like successes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::error::CompileError;
use crate::options::PatternFlags;
use crate::pattern::Pattern;
use crate::posix::compile_posix;
use crate::regcomp::compile;
use crate::regint::DEFAULT_CACHE_CAPACITY;

pub type CompileResult = Result<Arc<Pattern>, CompileError>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Dialect {
    Preg,
    Posix { ignore_case: bool },
}

type CacheKey = (Dialect, Box<[u8]>);

#[derive(Debug)]
struct Slot {
    result: OnceLock<CompileResult>,
    last_used: AtomicU64,
}

/// Counters reported by [`PatternCache::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub compiles: u64,
    pub entries: usize,
}

#[derive(Debug)]
pub struct PatternCache {
    slots: RwLock<HashMap<CacheKey, Arc<Slot>>>,
    capacity: AtomicUsize,
    clock: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    compiles: AtomicU64,
}

static GLOBAL: OnceLock<PatternCache> = OnceLock::new();

impl Default for PatternCache {
    fn default() -> Self {
        PatternCache::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl PatternCache {
    pub fn new() -> Self {
        PatternCache::default()
    }

    /// A cache holding at most `capacity` patterns (at least one); the
    /// least recently used entry is evicted first.
    pub fn with_capacity(capacity: usize) -> Self {
        PatternCache {
            slots: RwLock::new(HashMap::new()),
            capacity: AtomicUsize::new(capacity.max(1)),
            clock: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            compiles: AtomicU64::new(0),
        }
    }

    /// The process-wide cache.
    pub fn global() -> &'static PatternCache {
        GLOBAL.get_or_init(PatternCache::default)
    }

    /// Compiled form of the delimited pattern `text`.
    pub fn get_or_compile(&self, text: impl AsRef<[u8]>) -> CompileResult {
        let text = text.as_ref();
        self.lookup((Dialect::Preg, Box::from(text)), || {
            compile(text, PatternFlags::empty())
        })
    }

    /// Compiled form of the POSIX `ereg` pattern `text`.
    pub fn get_or_compile_posix(&self, text: impl AsRef<[u8]>, ignore_case: bool) -> CompileResult {
        let text = text.as_ref();
        self.lookup((Dialect::Posix { ignore_case }, Box::from(text)), || {
            compile_posix(text, ignore_case)
        })
    }

    fn lookup<F>(&self, key: CacheKey, compile_fn: F) -> CompileResult
    where
        F: FnOnce() -> Result<Pattern, CompileError>,
    {
        let tick = self.clock.fetch_add(1, Ordering::Relaxed);
        let found = self.slots.read().get(&key).cloned();
        let slot = match found {
            Some(slot) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                log::trace!("pattern cache hit for {:?}", String::from_utf8_lossy(&key.1));
                slot
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let mut slots = self.slots.write();
                let slot = Arc::clone(slots.entry(key).or_insert_with(|| {
                    Arc::new(Slot {
                        result: OnceLock::new(),
                        last_used: AtomicU64::new(tick),
                    })
                }));
                self.evict(&mut slots);
                slot
            }
        };
        slot.last_used.store(tick, Ordering::Relaxed);
        slot.result
            .get_or_init(|| {
                self.compiles.fetch_add(1, Ordering::Relaxed);
                compile_fn().map(Arc::new)
            })
            .clone()
    }

    fn evict(&self, slots: &mut HashMap<CacheKey, Arc<Slot>>) {
        let capacity = self.capacity.load(Ordering::Relaxed);
        while slots.len() > capacity {
            let oldest = slots
                .iter()
                .min_by_key(|(_, slot)| slot.last_used.load(Ordering::Relaxed))
                .map(|(key, _)| key.clone());
            let Some(key) = oldest else { break };
            log::debug!("pattern cache evicting {:?}", String::from_utf8_lossy(&key.1));
            slots.remove(&key);
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.load(Ordering::Relaxed)
    }

    /// Changes the capacity, evicting down to it right away.
    pub fn set_capacity(&self, capacity: usize) {
        self.capacity.store(capacity.max(1), Ordering::Relaxed);
        self.evict(&mut self.slots.write());
    }

    /// Drops every entry. Patterns already handed out stay valid.
    pub fn clear(&self) {
        let mut slots = self.slots.write();
        log::debug!("pattern cache cleared ({} entries)", slots.len());
        slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            compiles: self.compiles.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_same_pattern() {
        let cache = PatternCache::new();
        let a = cache.get_or_compile("/a+/").unwrap();
        let b = cache.get_or_compile("/a+/").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.compiles), (1, 1, 1));
    }

    #[test]
    fn dialects_do_not_collide() {
        let cache = PatternCache::new();
        let preg = cache.get_or_compile("a").unwrap_err();
        assert!(matches!(preg, CompileError::Syntax { .. }));
        let posix = cache.get_or_compile_posix("a", false).unwrap();
        let posix_i = cache.get_or_compile_posix("a", true).unwrap();
        assert!(!Arc::ptr_eq(&posix, &posix_i));
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
        assert!(Arc::ptr_eq(&a, &cache.get_or_compile("/a/").unwrap()));
        assert_eq!(cache.stats().compiles, 3);
        cache.get_or_compile("/b/").unwrap();
        assert_eq!(cache.stats().compiles, 4);
    }

    #[test]
    fn set_capacity_shrinks() {
        let cache = PatternCache::new();
        for p in ["/a/", "/b/", "/c/"] {
            cache.get_or_compile(p).unwrap();
        }
        cache.set_capacity(1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn clear_starts_over() {
        let cache = PatternCache::new();
        let a = cache.get_or_compile("/a/").unwrap();
        cache.clear();
        assert!(cache.is_empty());
        let b = cache.get_or_compile("/a/").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(a.is_match(b"a").unwrap());
    }
}
