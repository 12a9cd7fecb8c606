//! Single-entry evaluation cache
//!
//! Holds the most recent ranked result keyed by the canonical form of its
//! input. A new key replaces the previous entry. The lock is held only to
//! read or replace the entry, never while matching; two threads missing at
//! the same time both compute, and the later write wins. Since evaluation
//! is pure, both results are identical.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use insight_types::InsightMatch;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Hit/miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
struct CacheEntry {
    key: String,
    matches: Arc<Vec<InsightMatch>>,
}

#[derive(Debug, Default)]
pub struct EvaluationCache {
    entry: Mutex<Option<CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EvaluationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`, counting a hit or a miss.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<InsightMatch>>> {
        let cached = self
            .entry
            .lock()
            .as_ref()
            .filter(|entry| entry.key == key)
            .map(|entry| Arc::clone(&entry.matches));

        match cached {
            Some(matches) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(matches = matches.len(), "Evaluation cache hit");
                Some(matches)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                trace!("Evaluation cache miss");
                None
            }
        }
    }

    /// Replace the cached entry.
    pub fn put(&self, key: String, matches: Arc<Vec<InsightMatch>>) {
        *self.entry.lock() = Some(CacheEntry { key, matches });
    }

    pub fn clear(&self) {
        *self.entry.lock() = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.lock().is_none()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
