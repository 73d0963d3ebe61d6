// SPDX-License-Identifier: MPL-2.0
//! Data-fetching cache handle.
//!
//! This module provides an LRU-bounded cache over HTTP GET responses, handed
//! to the view tree through the provider bundle.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used responses are evicted first
//! - **URL-keyed**: responses indexed by the request URL
//! - **Explicit invalidation**: callers drop entries they know are stale;
//!   no expiry runs behind their back

use crate::error::Result;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Default number of cached responses.
pub const DEFAULT_CACHE_ENTRIES: usize = 64;

/// Cloneable handle over the shared response cache.
#[derive(Clone)]
pub struct QueryCache {
    client: reqwest::Client,
    entries: Arc<Mutex<LruCache<String, String>>>,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.entries.lock().map(|e| e.len()).unwrap_or(0);
        f.debug_struct("QueryCache").field("entries", &len).finish()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_ENTRIES)
    }
}

impl QueryCache {
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            client: reqwest::Client::new(),
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Returns the cached body for `url` without touching the network.
    #[must_use]
    pub fn cached(&self, url: &str) -> Option<String> {
        self.entries.lock().ok()?.get(url).cloned()
    }

    /// Returns the cached body for `url`, fetching and storing it on a miss.
    pub async fn get_or_fetch(&self, url: &str) -> Result<String> {
        if let Some(body) = self.cached(url) {
            return Ok(body);
        }

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if let Ok(mut entries) = self.entries.lock() {
            entries.put(url.to_string(), body.clone());
        }
        Ok(body)
    }

    /// Seeds the cache without a network round-trip. Used by tests and by
    /// transports that already hold a response.
    pub fn insert(&self, url: &str, body: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.put(url.to_string(), body);
        }
    }

    /// Drops the cached body for `url`, if any.
    pub fn invalidate(&self, url: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.pop(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_or_fetch_serves_cache_hits_without_network() {
        let cache = QueryCache::new(4);
        cache.insert("http://invalid.test/status", "ok".to_string());

        // The URL is unreachable; a hit must never try to fetch it.
        let body = cache
            .get_or_fetch("http://invalid.test/status")
            .await
            .expect("cache hit should not fail");
        assert_eq!(body, "ok");
    }

    #[test]
    fn invalidate_forgets_entries() {
        let cache = QueryCache::new(4);
        cache.insert("http://invalid.test/a", "a".to_string());
        cache.invalidate("http://invalid.test/a");
        assert_eq!(cache.cached("http://invalid.test/a"), None);
    }

    #[test]
    fn cache_evicts_least_recently_used_entry() {
        let cache = QueryCache::new(1);
        cache.insert("http://invalid.test/a", "a".to_string());
        cache.insert("http://invalid.test/b", "b".to_string());

        assert_eq!(cache.cached("http://invalid.test/a"), None);
        assert_eq!(cache.cached("http://invalid.test/b"), Some("b".to_string()));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let cache = QueryCache::new(0);
        cache.insert("http://invalid.test/a", "a".to_string());
        assert_eq!(cache.cached("http://invalid.test/a"), Some("a".to_string()));
    }
}
