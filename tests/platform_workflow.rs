//! Whole-platform workflow through the facade crate.

use atrium::prelude::*;
use atrium_cache::TaggedCache;
use atrium_content::ContentService;
use atrium_core::{FileUpload, PostUpdate, User};
use atrium_domains::NoOpDomainProvider;
use std::sync::Arc;

#[tokio::test]
async fn test_signup_publish_and_read() {
    let store = Arc::new(InMemoryPlatformStore::new());
    let cache = TaggedCache::new(Arc::new(MemoryCache::new()));

    let actions = ActionService::new(
        store.clone(),
        cache.clone(),
        PlatformConfig::new("example.com"),
        Arc::new(InMemoryBlobStore::new()),
        DomainManager::new(Arc::new(NoOpDomainProvider)),
    );
    let content = ContentService::new(
        store.clone(),
        HostResolver::new(store.clone(), "example.com"),
        cache,
        Arc::new(MarkdownRenderer::new()),
    );

    let user = store
        .create_user(User::new("founder@studio.io"))
        .await
        .unwrap();
    let session = Session::new(&user.id);

    let agency = actions
        .create_agency(
            Some(&session),
            CreateAgencyRequest::new("studio").with_name("Studio"),
        )
        .await
        .unwrap();

    let post = actions
        .create_post(Some(&session), &agency.id)
        .await
        .unwrap();
    actions
        .update_post(Some(&session), &post.id, PostUpdate::Slug("launch".into()))
        .await
        .unwrap();
    actions
        .update_post_content(
            Some(&session),
            atrium_core::PostContentUpdate {
                id: post.id.clone(),
                title: Some("We are live".into()),
                description: None,
                content: Some("Read more at <https://studio.io>.".into()),
            },
        )
        .await
        .unwrap();
    actions
        .update_post(Some(&session), &post.id, PostUpdate::Published(true))
        .await
        .unwrap();

    let detail = content
        .post_by_slug("studio.example.com", "launch")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.post.title.as_deref(), Some("We are live"));
    assert!(detail.body_html.contains("<a href=\"https://studio.io\""));

    // Branding upload round-trips through the blob store.
    let agency = actions
        .update_agency(
            Some(&session),
            &agency.id,
            AgencyUpdate::Logo(FileUpload::new("image/png", vec![1, 2, 3])),
        )
        .await
        .unwrap();
    assert!(agency.logo.unwrap().starts_with("https://blobs.local/"));
}
