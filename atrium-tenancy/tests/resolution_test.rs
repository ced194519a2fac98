//! Integration tests for host-to-tenant resolution

use atrium_core::{Agency, CreateAgencyRequest, InMemoryPlatformStore, PlatformStore};
use atrium_tenancy::HostResolver;
use std::sync::Arc;

async fn seed() -> (Arc<InMemoryPlatformStore>, HostResolver) {
    let store = Arc::new(InMemoryPlatformStore::new());

    let acme = store
        .create_agency(CreateAgencyRequest::new("acme"), "user-1")
        .await
        .unwrap();
    store
        .update_agency(&Agency {
            custom_domain: Some("acme.io".to_string()),
            ..acme
        })
        .await
        .unwrap();

    store
        .create_agency(CreateAgencyRequest::new("umbrella"), "user-2")
        .await
        .unwrap();

    let resolver = HostResolver::new(store.clone(), "example.com");
    (store, resolver)
}

#[tokio::test]
async fn test_both_hosts_reach_the_same_tenant() {
    let (_, resolver) = seed().await;

    let via_subdomain = resolver.resolve("acme.example.com").await.unwrap().unwrap();
    let via_custom = resolver.resolve("acme.io").await.unwrap().unwrap();
    assert_eq!(via_subdomain.id, via_custom.id);
}

#[tokio::test]
async fn test_same_label_under_other_domain_is_not_found() {
    let (_, resolver) = seed().await;
    assert!(resolver.resolve("acme.other.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_tenants_do_not_bleed_across_subdomains() {
    let (_, resolver) = seed().await;

    let acme = resolver.resolve("acme.example.com").await.unwrap().unwrap();
    let umbrella = resolver
        .resolve("umbrella.example.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(acme.id, umbrella.id);
}
