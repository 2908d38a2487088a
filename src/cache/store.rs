//! In-memory expiring key-value store
//!
//! Entries expire lazily: a stale entry is dropped the next time it is read.
//! There is no background sweeper and no size bound.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

/// A single cached value with its insertion time and lifetime
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// An entry is readable while `now - inserted_at <= ttl`
    fn is_stale(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) > self.ttl
    }
}

/// Snapshot of the store's contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}

/// Expiring in-memory store keyed by derived cache keys
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any existing entry and restarting its TTL
    pub fn set(&mut self, key: &str, value: Vec<u8>, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Get a value if present and fresh. Stale entries are removed.
    pub fn get(&mut self, key: &str) -> Option<&[u8]> {
        let now = Instant::now();

        if self.entries.get(key)?.is_stale(now) {
            self.entries.remove(key);
            return None;
        }

        self.entries.get(key).map(|entry| entry.value.as_slice())
    }

    /// Remove a single entry. Returns whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove every entry whose key starts with `prefix`
    pub fn delete_by_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    /// Remove everything
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Current size and keys, sorted. Stale entries not yet read are still listed.
    pub fn stats(&self) -> CacheStats {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            size: keys.len(),
            keys,
        }
    }
}
