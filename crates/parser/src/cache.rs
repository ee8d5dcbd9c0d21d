// Memoization cache
//
// Unbounded maps from post-macro input text to parse results. Every read
// hands out a clone, so callers can never observe each other's mutations.

use crate::ast::{Signature, TypeDescriptor};
use crate::error::ParseResult;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// A single memo table.
#[derive(Debug)]
pub struct Memo<T> {
    entries: Mutex<HashMap<String, T>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<T: Clone> Memo<T> {
    pub fn new() -> Self {
        Memo {
            entries: Mutex::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Return a copy of the cached value for `key`, building and storing it
    /// first if absent. Failed builds are not cached.
    pub fn get_or_try_insert<F>(&self, key: &str, build: F) -> ParseResult<T>
    where
        F: FnOnce() -> ParseResult<T>,
    {
        if let Some(found) = self.lock().get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key, "cache hit");
            return Ok(found.clone());
        }

        // Built without the lock held: a signature build re-enters the type memo
        let value = build()?;
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(key, "cache miss");
        self.lock().insert(key.to_string(), value.clone());

        Ok(value)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, T>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Hit / miss counters of both memo tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub type_hits: usize,
    pub type_misses: usize,
    pub signature_hits: usize,
    pub signature_misses: usize,
}

/// Type and signature memo tables of one parser.
#[derive(Debug)]
pub struct ParseCache {
    pub types: Memo<TypeDescriptor>,
    pub signatures: Memo<Signature>,
}

impl Default for ParseCache {
    fn default() -> Self {
        ParseCache {
            types: Memo::new(),
            signatures: Memo::new(),
        }
    }
}

impl ParseCache {
    pub fn clear(&self) {
        self.types.clear();
        self.signatures.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            type_hits: self.types.hits(),
            type_misses: self.types.misses(),
            signature_hits: self.signatures.hits(),
            signature_misses: self.signatures.misses(),
        }
    }
}
