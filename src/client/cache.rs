//! Time-boxed memoization of GET responses.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::Client;
use crate::error::ApiResult;
use crate::request::RequestConfig;

/// How long a cached GET response stays fresh.
pub const CACHE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    data: Value,
    cached_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, timeout: Duration) -> bool {
        self.cached_at.elapsed() < timeout
    }
}

/// Decorator that serves repeated GETs from an in-memory cache.
///
/// Only `get` is cached; every other method passes straight through. Stale
/// entries are skipped at read time but stay in the map until overwritten or
/// explicitly invalidated. The map is unbounded on purpose: entries are keyed
/// by endpoint string and expected to be few.
pub struct CachingClient<C> {
    inner: C,
    cache: Mutex<HashMap<String, CacheEntry>>,
    timeout: Duration,
}

impl<C> CachingClient<C> {
    /// Wraps `inner` with the default 5-minute freshness window.
    pub fn new(inner: C) -> Self {
        Self::with_timeout(inner, CACHE_TIMEOUT)
    }

    /// Wraps `inner` with a custom freshness window.
    pub fn with_timeout(inner: C, timeout: Duration) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
            timeout,
        }
    }

    /// Removes every cache entry whose endpoint contains `pattern`.
    pub fn invalidate_cache(&self, pattern: &str) {
        let mut cache = self.lock_cache();
        cache.retain(|endpoint, _| !endpoint.contains(pattern));
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A poisoned lock only means another task panicked mid-update; the
        // map itself is still usable.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<C: Client> Client for CachingClient<C> {
    async fn request(&self, endpoint: &str, config: RequestConfig) -> ApiResult<Value> {
        self.inner.request(endpoint, config).await
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        {
            let cache = self.lock_cache();
            if let Some(entry) = cache.get(endpoint) {
                if entry.is_fresh(self.timeout) {
                    debug!("Cache hit for {}", endpoint);
                    return Ok(entry.data.clone());
                }
                debug!("Cache entry for {} is stale", endpoint);
            }
        }

        // Lock released before suspending on the network call.
        let data = self.inner.get(endpoint).await?;

        let mut cache = self.lock_cache();
        cache.insert(
            endpoint.to_string(),
            CacheEntry {
                data: data.clone(),
                cached_at: Instant::now(),
            },
        );

        Ok(data)
    }
}
