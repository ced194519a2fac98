//! Tag-based cache invalidation.
//!
//! Tags group cache entries so a write path can drop exactly the entries a
//! mutation made stale. Tag strings are an exact-match contract: the reader
//! attaching a tag and the writer invalidating it must agree byte for byte.

use crate::error::{CacheError, CacheResult};
use crate::traits::CacheStore;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Default TTL for tagged entries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(900);

/// Cache with tag-based invalidation support.
pub struct TaggedCache<C: CacheStore> {
    /// Underlying cache store
    cache: Arc<C>,

    /// Tag to keys mapping
    tags: Arc<RwLock<HashMap<String, HashSet<String>>>>,

    /// Key to tags mapping
    key_tags: Arc<RwLock<HashMap<String, HashSet<String>>>>,
}

impl<C: CacheStore> TaggedCache<C> {
    /// Create new tagged cache over a backend.
    pub fn new(cache: Arc<C>) -> Self {
        Self {
            cache,
            tags: Arc::new(RwLock::new(HashMap::new())),
            key_tags: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Set a value with tags.
    pub async fn set_with_tags(
        &self,
        key: &str,
        value: String,
        tags: &[&str],
        ttl: Option<Duration>,
    ) -> CacheResult<()> {
        self.cache.set_json(key, value, ttl).await?;

        let mut tags_map = self.tags.write().await;
        let mut key_tags_map = self.key_tags.write().await;

        for tag in tags {
            tags_map
                .entry(tag.to_string())
                .or_default()
                .insert(key.to_string());
        }

        let tag_set: HashSet<String> = tags.iter().map(|t| t.to_string()).collect();
        key_tags_map.insert(key.to_string(), tag_set);

        Ok(())
    }

    /// Get value from cache.
    pub async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.cache.get_json(key).await
    }

    /// Delete a specific key.
    pub async fn delete(&self, key: &str) -> CacheResult<()> {
        self.cache.delete(key).await?;

        let mut tags_map = self.tags.write().await;
        let mut key_tags_map = self.key_tags.write().await;

        if let Some(tag_set) = key_tags_map.remove(key) {
            for tag in tag_set {
                if let Some(keys) = tags_map.get_mut(&tag) {
                    keys.remove(key);
                    if keys.is_empty() {
                        tags_map.remove(&tag);
                    }
                }
            }
        }

        Ok(())
    }

    /// Invalidate all keys carrying a specific tag.
    ///
    /// A tag with no live entries is a no-op, never an error.
    pub async fn invalidate_tag(&self, tag: &str) -> CacheResult<()> {
        let mut tags_map = self.tags.write().await;
        let mut key_tags_map = self.key_tags.write().await;

        if let Some(keys) = tags_map.remove(tag) {
            atrium_log::debug!(target: "cache", "invalidating tag {} ({} keys)", tag, keys.len());
            let key_refs: Vec<&str> = keys.iter().map(|s| s.as_str()).collect();
            self.cache.delete_many(&key_refs).await?;

            for key in keys {
                if let Some(tag_set) = key_tags_map.get_mut(&key) {
                    tag_set.remove(tag);
                    if tag_set.is_empty() {
                        key_tags_map.remove(&key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Invalidate all keys carrying any of the specified tags.
    pub async fn invalidate_tags(&self, tags: &[&str]) -> CacheResult<()> {
        for tag in tags {
            self.invalidate_tag(tag).await?;
        }
        Ok(())
    }

    /// Fetch-or-compute with tags.
    ///
    /// Returns the cached value when the key is live; otherwise runs the
    /// factory, stores the result under the given tags with the TTL
    /// (`DEFAULT_TTL` when `None`), and returns it. A factory error is
    /// propagated and nothing is cached.
    pub async fn remember_with_tags<T, F, Fut>(
        &self,
        key: &str,
        tags: &[&str],
        ttl: Option<Duration>,
        factory: F,
    ) -> CacheResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = CacheResult<T>>,
    {
        if let Some(json) = self.get(key).await? {
            let value: T = serde_json::from_str(&json)
                .map_err(|e| CacheError::Deserialization(e.to_string()))?;
            return Ok(value);
        }

        let value = factory().await?;
        let json =
            serde_json::to_string(&value).map_err(|e| CacheError::Serialization(e.to_string()))?;
        self.set_with_tags(key, json, tags, Some(ttl.unwrap_or(DEFAULT_TTL)))
            .await?;
        Ok(value)
    }

    /// Get all keys with a specific tag.
    pub async fn get_keys_by_tag(&self, tag: &str) -> Vec<String> {
        let tags_map = self.tags.read().await;
        tags_map
            .get(tag)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get all tags for a specific key.
    pub async fn get_tags_for_key(&self, key: &str) -> Vec<String> {
        let key_tags_map = self.key_tags.read().await;
        key_tags_map
            .get(key)
            .map(|tags| tags.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get all registered tags.
    pub async fn list_tags(&self) -> Vec<String> {
        let tags_map = self.tags.read().await;
        tags_map.keys().cloned().collect()
    }
}

impl<C: CacheStore> Clone for TaggedCache<C> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            tags: self.tags.clone(),
            key_tags: self.key_tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCache;

    fn tagged() -> TaggedCache<MemoryCache> {
        TaggedCache::new(Arc::new(MemoryCache::new()))
    }

    #[tokio::test]
    async fn test_invalidate_tag_drops_only_tagged_keys() {
        let cache = tagged();
        cache
            .set_with_tags("acme.io-hello", "\"a\"".to_string(), &["acme.io-hello"], None)
            .await
            .unwrap();
        cache
            .set_with_tags("acme.io-posts", "\"b\"".to_string(), &["acme.io-posts"], None)
            .await
            .unwrap();

        cache.invalidate_tag("acme.io-hello").await.unwrap();

        assert_eq!(cache.get("acme.io-hello").await.unwrap(), None);
        assert_eq!(
            cache.get("acme.io-posts").await.unwrap(),
            Some("\"b\"".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalidate_unknown_tag_is_noop() {
        let cache = tagged();
        cache
            .set_with_tags("k", "\"v\"".to_string(), &["t"], None)
            .await
            .unwrap();
        cache.invalidate_tag("other").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some("\"v\"".to_string()));
    }

    #[tokio::test]
    async fn test_remember_with_tags_caches_and_reuses() {
        let cache = tagged();
        let mut calls = 0;

        let v: u32 = cache
            .remember_with_tags("k", &["t"], None, || {
                calls += 1;
                async { Ok(41 + 1) }
            })
            .await
            .unwrap();
        assert_eq!(v, 42);
        assert_eq!(calls, 1);

        let v: u32 = cache
            .remember_with_tags("k", &["t"], None, || {
                calls += 1;
                async { Ok(0) }
            })
            .await
            .unwrap();
        assert_eq!(v, 42);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_remember_factory_error_caches_nothing() {
        let cache = tagged();
        let result: CacheResult<u32> = cache
            .remember_with_tags("k", &["t"], None, || async {
                Err(CacheError::Source("boom".to_string()))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(cache.get("k").await.unwrap(), None);
        assert!(cache.get_keys_by_tag("t").await.is_empty());
    }

    #[tokio::test]
    async fn test_key_under_multiple_tags() {
        let cache = tagged();
        cache
            .set_with_tags("k", "\"v\"".to_string(), &["t1", "t2"], None)
            .await
            .unwrap();

        let mut tags = cache.get_tags_for_key("k").await;
        tags.sort();
        assert_eq!(tags, vec!["t1".to_string(), "t2".to_string()]);

        cache.invalidate_tag("t1").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }
}
