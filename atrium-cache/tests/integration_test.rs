//! Integration tests for atrium-cache

use atrium_cache::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_memory_cache_set_get_delete() {
    let cache = MemoryCache::new();

    cache
        .set_json("test_key", "\"test_value\"".to_string(), None)
        .await
        .unwrap();
    let value = cache.get_json("test_key").await.unwrap();
    assert_eq!(value, Some("\"test_value\"".to_string()));

    cache.delete("test_key").await.unwrap();
    assert_eq!(cache.get_json("test_key").await.unwrap(), None);
}

#[tokio::test]
async fn test_tagged_cache_invalidation_is_precise() {
    let tagged = TaggedCache::new(Arc::new(MemoryCache::new()));

    // Two hosts that share nothing.
    tagged
        .set_with_tags(
            "acme.example.com-posts",
            "[]".to_string(),
            &["acme.example.com-posts"],
            None,
        )
        .await
        .unwrap();
    tagged
        .set_with_tags(
            "umbrella.example.com-posts",
            "[]".to_string(),
            &["umbrella.example.com-posts"],
            None,
        )
        .await
        .unwrap();

    tagged
        .invalidate_tag("acme.example.com-posts")
        .await
        .unwrap();

    assert_eq!(tagged.get("acme.example.com-posts").await.unwrap(), None);
    assert_eq!(
        tagged.get("umbrella.example.com-posts").await.unwrap(),
        Some("[]".to_string())
    );
}

#[tokio::test]
async fn test_remember_recomputes_after_invalidation() {
    let tagged = TaggedCache::new(Arc::new(MemoryCache::new()));

    let v: u32 = tagged
        .remember_with_tags("k", &["t"], None, || async { Ok(1) })
        .await
        .unwrap();
    assert_eq!(v, 1);

    tagged.invalidate_tag("t").await.unwrap();

    let v: u32 = tagged
        .remember_with_tags("k", &["t"], None, || async { Ok(2) })
        .await
        .unwrap();
    assert_eq!(v, 2);
}

#[tokio::test]
async fn test_entry_expires_after_ttl() {
    let cache = MemoryCache::new();
    cache
        .set_json("k", "\"v\"".to_string(), Some(Duration::from_millis(20)))
        .await
        .unwrap();
    assert!(cache.exists("k").await.unwrap());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!cache.exists("k").await.unwrap());
}

#[test]
fn test_cache_error_display() {
    let err = CacheError::Deserialization("bad json".to_string());
    let display = format!("{}", err);
    assert!(display.contains("bad json"));
}
