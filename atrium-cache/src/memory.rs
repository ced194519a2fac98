//! In-memory cache backend.

use crate::error::CacheResult;
use crate::traits::CacheStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// In-memory `CacheStore`. Expiry is lazy: expired entries are dropped when
/// read, not on a background sweep.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|e| !e.is_expired()).count()
    }

    /// Whether the cache holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get_json(&self, key: &str) -> CacheResult<Option<String>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                None => return Ok(None),
                Some(_) => {}
            }
        }
        // Expired: drop the entry under the write lock.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| e.is_expired()) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set_json(&self, key: &str, value: String, ttl: Option<Duration>) -> CacheResult<()> {
        let entry = Entry {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        Ok(self.get_json(key).await?.is_some())
    }

    async fn clear(&self) -> CacheResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn ttl(&self, key: &str) -> CacheResult<Option<Duration>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).and_then(|entry| {
            entry
                .expires_at
                .and_then(|at| at.checked_duration_since(Instant::now()))
        }))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<()> {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = Some(Instant::now() + ttl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = MemoryCache::new();
        cache
            .set_json("k", "\"v\"".to_string(), None)
            .await
            .unwrap();
        assert_eq!(cache.get_json("k").await.unwrap(), Some("\"v\"".to_string()));
        assert!(cache.exists("k").await.unwrap());

        cache.delete("k").await.unwrap();
        assert_eq!(cache.get_json("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expiry_on_read() {
        let cache = MemoryCache::new();
        cache
            .set_json("k", "\"v\"".to_string(), Some(Duration::from_millis(10)))
            .await
            .unwrap();
        assert!(cache.exists("k").await.unwrap());

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.get_json("k").await.unwrap(), None);
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_ttl_reports_remaining() {
        let cache = MemoryCache::new();
        cache
            .set_json("k", "\"v\"".to_string(), Some(Duration::from_secs(60)))
            .await
            .unwrap();
        let remaining = cache.ttl("k").await.unwrap().unwrap();
        assert!(remaining <= Duration::from_secs(60));
        assert!(remaining > Duration::from_secs(50));

        assert_eq!(cache.ttl("missing").await.unwrap(), None);
    }
}
