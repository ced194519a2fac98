//! Integration tests for tenant isolation on the read path

use atrium_cache::{MemoryCache, TaggedCache};
use atrium_content::{ContentService, MarkdownRenderer};
use atrium_core::{CreateAgencyRequest, InMemoryPlatformStore, PlatformStore, Post};
use atrium_tenancy::HostResolver;
use std::sync::Arc;

async fn service_with_two_tenants() -> (Arc<InMemoryPlatformStore>, ContentService<MemoryCache>) {
    let store = Arc::new(InMemoryPlatformStore::new());

    let acme = store
        .create_agency(CreateAgencyRequest::new("acme"), "user-1")
        .await
        .unwrap();
    let umbrella = store
        .create_agency(CreateAgencyRequest::new("umbrella"), "user-2")
        .await
        .unwrap();

    // Both tenants publish a post under the same slug.
    store
        .create_post(
            Post::new(&acme.id, "user-1")
                .with_slug("hello")
                .with_title("Acme hello")
                .with_published(true),
        )
        .await
        .unwrap();
    store
        .create_post(
            Post::new(&umbrella.id, "user-2")
                .with_slug("hello")
                .with_title("Umbrella hello")
                .with_published(true),
        )
        .await
        .unwrap();

    let service = ContentService::new(
        store.clone(),
        HostResolver::new(store.clone(), "example.com"),
        TaggedCache::new(Arc::new(MemoryCache::new())),
        Arc::new(MarkdownRenderer::new()),
    );
    (store, service)
}

#[tokio::test]
async fn test_same_slug_resolves_per_tenant() {
    let (_, service) = service_with_two_tenants().await;

    let acme_post = service
        .post_by_slug("acme.example.com", "hello")
        .await
        .unwrap()
        .unwrap();
    let umbrella_post = service
        .post_by_slug("umbrella.example.com", "hello")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(acme_post.post.title.as_deref(), Some("Acme hello"));
    assert_eq!(umbrella_post.post.title.as_deref(), Some("Umbrella hello"));
    assert_ne!(acme_post.post.id, umbrella_post.post.id);
}

#[tokio::test]
async fn test_listings_never_cross_tenants() {
    let (_, service) = service_with_two_tenants().await;

    let acme_posts = service
        .published_posts("acme.example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(acme_posts.len(), 1);
    assert_eq!(acme_posts[0].title.as_deref(), Some("Acme hello"));
}

#[tokio::test]
async fn test_slug_under_wrong_host_is_none() {
    let (store, service) = service_with_two_tenants().await;

    // A slug only one tenant has.
    let acme = store.agency_by_subdomain("acme").await.unwrap().unwrap();
    store
        .create_post(
            Post::new(&acme.id, "user-1")
                .with_slug("acme-only")
                .with_published(true),
        )
        .await
        .unwrap();

    assert!(service
        .post_by_slug("umbrella.example.com", "acme-only")
        .await
        .unwrap()
        .is_none());
}
