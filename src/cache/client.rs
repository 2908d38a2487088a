//! Cached wrapper for the marketplace API client
//!
//! Provides transparent caching for read endpoints and scoped invalidation
//! after mutations. The trait implementations live in one file per resource.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

use crate::cache::{CacheStats, MemoryCache};
use crate::client::MarketApi;
use crate::error::Result;

/// Cached wrapper for any MarketApi implementation.
///
/// Cache can be disabled via the `enabled` flag (for `--no-cache`).
/// The cache is wrapped in a Mutex that is never held across an await.
pub struct CachedMarketClient<C: MarketApi> {
    pub(super) inner: Arc<C>,
    cache: Option<Mutex<MemoryCache>>,
}

impl<C: MarketApi> CachedMarketClient<C> {
    /// Create a new cached client wrapper.
    ///
    /// # Arguments
    /// * `inner` - The underlying API client to wrap
    /// * `enabled` - Whether caching is enabled (false for --no-cache)
    pub fn new(inner: C, enabled: bool) -> Self {
        let cache = enabled.then(|| Mutex::new(MemoryCache::new()));
        Self {
            inner: Arc::new(inner),
            cache,
        }
    }

    /// Get the inner client
    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Try to get cached data. Entries that no longer deserialize count as misses.
    pub(super) fn get_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cache = self.cache.as_ref()?;
        let mut guard = cache.lock().ok()?;
        guard
            .get(key)
            .and_then(|data| serde_json::from_slice(data).ok())
    }

    /// Store data in cache
    pub(super) fn set_cached<T: Serialize>(&self, key: &str, data: &T, ttl: Duration) {
        if let Some(ref cache) = self.cache
            && let Ok(mut guard) = cache.lock()
            && let Ok(json) = serde_json::to_vec(data)
        {
            guard.set(key, json, ttl);
        }
    }

    /// Serve from cache, or fetch and remember the result for `ttl`
    pub(super) async fn read_through<T, F, Fut>(&self, key: &str, ttl: Duration, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(cached) = self.get_cached(key) {
            log::debug!("Cache hit: {}", key);
            return Ok(cached);
        }

        log::debug!("Cache miss: {}", key);
        let result = fetch().await?;
        self.set_cached(key, &result, ttl);
        Ok(result)
    }

    pub(super) fn invalidate(&self, key: &str) {
        if let Some(ref cache) = self.cache
            && let Ok(mut guard) = cache.lock()
            && guard.delete(key)
        {
            log::debug!("Cache invalidated: {}", key);
        }
    }

    pub(super) fn invalidate_prefix(&self, prefix: &str) {
        if let Some(ref cache) = self.cache
            && let Ok(mut guard) = cache.lock()
        {
            let removed = guard.delete_by_prefix(prefix);
            log::debug!("Cache invalidated {} entries with prefix {}", removed, prefix);
        }
    }

    /// Drop every entry. Returns how many were removed.
    pub fn clear(&self) -> usize {
        match self.cache.as_ref().and_then(|c| c.lock().ok()) {
            Some(mut guard) => guard.clear(),
            None => 0,
        }
    }

    pub fn stats(&self) -> CacheStats {
        match self.cache.as_ref().and_then(|c| c.lock().ok()) {
            Some(guard) => guard.stats(),
            None => CacheStats::default(),
        }
    }
}
