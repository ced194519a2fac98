//! Tenant-scoped cached read fetchers.
//!
//! Every fetcher resolves the inbound host to its agency, reads through the
//! tagged cache, and attaches the exact tags the mutation pipeline
//! invalidates. Tag strings come from `atrium_core::tags`; nothing here
//! formats its own.

use crate::error::ContentError;
use crate::render::MarkupRenderer;
use atrium_cache::{CacheError, CacheStore, TaggedCache};
use atrium_core::{
    Agency, AgencyWithOwner, PlatformStore, Post, PostSummary, Project, User, tags,
};
use atrium_tenancy::HostResolver;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// A post served on the public site: the row, its rendered body, and the
/// tenant's other published posts for adjacent navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDetail {
    /// The post row.
    pub post: Post,
    /// `content` rendered to HTML.
    pub body_html: String,
    /// Published posts of the same agency excluding this one, newest first.
    /// Callers derive prev/next positionally; boundaries yield fewer
    /// neighbors, never a wraparound.
    pub adjacent: Vec<PostSummary>,
}

/// A project served on the public site, joined with its agency and owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetail {
    /// The project row.
    pub project: Project,
    /// The owning agency.
    pub agency: Agency,
    /// The agency's owner, when the row still exists.
    pub owner: Option<User>,
}

/// Cached, tenant-scoped reads for the public site.
///
/// Every entry carries two tags: its kind tag (the cache key itself) and the
/// bare host tag, so a released host binding can drop the host's whole
/// footprint in one invalidation.
pub struct ContentService<C: CacheStore> {
    store: Arc<dyn PlatformStore>,
    resolver: HostResolver,
    cache: TaggedCache<C>,
    renderer: Arc<dyn MarkupRenderer>,
    ttl: Option<Duration>,
}

impl<C: CacheStore> ContentService<C> {
    /// Create a service over a store, resolver, cache, and renderer.
    ///
    /// Entries default to the cache's `DEFAULT_TTL`.
    pub fn new(
        store: Arc<dyn PlatformStore>,
        resolver: HostResolver,
        cache: TaggedCache<C>,
        renderer: Arc<dyn MarkupRenderer>,
    ) -> Self {
        Self {
            store,
            resolver,
            cache,
            renderer,
            ttl: None,
        }
    }

    /// Override the TTL applied to cached entries, typically from
    /// `PlatformConfig::cache_ttl`.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    async fn resolve(&self, host: &str) -> Result<Option<(Agency, String)>, ContentError> {
        let normalized = atrium_tenancy::normalize_host(host);
        let agency = self.resolver.resolve(&normalized).await?;
        Ok(agency.map(|agency| (agency, normalized)))
    }

    /// Tenant metadata for a host: the agency joined with its owner.
    ///
    /// Cached under the `{host}-metadata` tag.
    pub async fn agency_metadata(
        &self,
        host: &str,
    ) -> Result<Option<AgencyWithOwner>, ContentError> {
        let Some((agency, host)) = self.resolve(host).await? else {
            return Ok(None);
        };

        let key = tags::metadata(&host);
        let host_tag = tags::host(&host);
        let store = self.store.clone();
        let value = self
            .cache
            .remember_with_tags(&key, &[key.as_str(), host_tag.as_str()], self.ttl, move || async move {
                let owner = store
                    .user_by_id(&agency.user_id)
                    .await
                    .map_err(|e| CacheError::Source(e.to_string()))?;
                Ok(AgencyWithOwner { agency, owner })
            })
            .await?;
        Ok(Some(value))
    }

    /// Published post summaries for a host, newest first.
    ///
    /// Cached under the `{host}-posts` tag.
    pub async fn published_posts(&self, host: &str) -> Result<Option<Vec<PostSummary>>, ContentError> {
        let Some((agency, host)) = self.resolve(host).await? else {
            return Ok(None);
        };

        let key = tags::posts(&host);
        let host_tag = tags::host(&host);
        let store = self.store.clone();
        let summaries = self
            .cache
            .remember_with_tags(&key, &[key.as_str(), host_tag.as_str()], self.ttl, move || async move {
                let posts = store
                    .published_posts(&agency.id)
                    .await
                    .map_err(|e| CacheError::Source(e.to_string()))?;
                Ok(posts.iter().map(Post::summary).collect::<Vec<_>>())
            })
            .await?;
        Ok(Some(summaries))
    }

    /// A single published post for a host, rendered, with adjacent posts.
    ///
    /// Cached under the `{host}-{slug}` tag. An unpublished or missing slug
    /// is `Ok(None)`.
    pub async fn post_by_slug(
        &self,
        host: &str,
        slug: &str,
    ) -> Result<Option<PostDetail>, ContentError> {
        let Some((agency, host)) = self.resolve(host).await? else {
            return Ok(None);
        };

        let key = tags::post_item(&host, slug);
        let host_tag = tags::host(&host);
        let store = self.store.clone();
        let renderer = self.renderer.clone();
        let slug = slug.to_string();
        let detail: Option<PostDetail> = self
            .cache
            .remember_with_tags(&key, &[key.as_str(), host_tag.as_str()], self.ttl, move || async move {
                let post = store
                    .post_by_slug(&agency.id, &slug)
                    .await
                    .map_err(|e| CacheError::Source(e.to_string()))?;
                let Some(post) = post.filter(|p| p.published) else {
                    return Ok(None);
                };

                let body_html = renderer.render(post.content.as_deref().unwrap_or(""));

                let adjacent = store
                    .published_posts(&agency.id)
                    .await
                    .map_err(|e| CacheError::Source(e.to_string()))?
                    .iter()
                    .filter(|p| p.id != post.id)
                    .map(Post::summary)
                    .collect();

                Ok(Some(PostDetail {
                    post,
                    body_html,
                    adjacent,
                }))
            })
            .await?;
        Ok(detail)
    }

    /// A single project for a host, joined with its agency and owner.
    ///
    /// Cached under the `{host}-project-{id}` tag. A project belonging to a
    /// different agency is `Ok(None)`.
    pub async fn project_by_id(
        &self,
        host: &str,
        id: &str,
    ) -> Result<Option<ProjectDetail>, ContentError> {
        let Some((agency, host)) = self.resolve(host).await? else {
            return Ok(None);
        };

        let key = tags::project_item(&host, id);
        let host_tag = tags::host(&host);
        let store = self.store.clone();
        let id = id.to_string();
        let detail: Option<ProjectDetail> = self
            .cache
            .remember_with_tags(&key, &[key.as_str(), host_tag.as_str()], self.ttl, move || async move {
                let project = store
                    .project_by_id(&id)
                    .await
                    .map_err(|e| CacheError::Source(e.to_string()))?;
                let Some(project) = project.filter(|p| p.agency_id == agency.id) else {
                    return Ok(None);
                };

                let owner = store
                    .user_by_id(&agency.user_id)
                    .await
                    .map_err(|e| CacheError::Source(e.to_string()))?;

                Ok(Some(ProjectDetail {
                    project,
                    agency,
                    owner,
                }))
            })
            .await?;
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MarkdownRenderer;
    use atrium_cache::MemoryCache;
    use atrium_core::{CreateAgencyRequest, InMemoryPlatformStore};

    struct Fixture {
        store: Arc<InMemoryPlatformStore>,
        service: ContentService<MemoryCache>,
        agency: Agency,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(InMemoryPlatformStore::new());
        let owner = store
            .create_user(User::new("owner@acme.io").with_name("Alice"))
            .await
            .unwrap();
        let agency = store
            .create_agency(CreateAgencyRequest::new("acme").with_name("Acme"), &owner.id)
            .await
            .unwrap();

        let service = ContentService::new(
            store.clone(),
            HostResolver::new(store.clone(), "example.com"),
            TaggedCache::new(Arc::new(MemoryCache::new())),
            Arc::new(MarkdownRenderer::new()),
        );
        Fixture {
            store,
            service,
            agency,
        }
    }

    #[tokio::test]
    async fn test_metadata_joins_owner() {
        let f = fixture().await;
        let metadata = f
            .service
            .agency_metadata("acme.example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(metadata.agency.id, f.agency.id);
        assert_eq!(metadata.owner.unwrap().name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_unknown_host_is_none() {
        let f = fixture().await;
        assert!(f
            .service
            .agency_metadata("ghost.example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_published_posts_excludes_drafts() {
        let f = fixture().await;
        f.store
            .create_post(
                Post::new(&f.agency.id, &f.agency.user_id)
                    .with_slug("live")
                    .with_published(true),
            )
            .await
            .unwrap();
        f.store
            .create_post(Post::new(&f.agency.id, &f.agency.user_id).with_slug("draft"))
            .await
            .unwrap();

        let posts = f
            .service
            .published_posts("acme.example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "live");
    }

    #[tokio::test]
    async fn test_post_by_slug_renders_and_lists_adjacent() {
        let f = fixture().await;
        for slug in ["one", "two", "three"] {
            f.store
                .create_post(
                    Post::new(&f.agency.id, &f.agency.user_id)
                        .with_slug(slug)
                        .with_content("# Title")
                        .with_published(true),
                )
                .await
                .unwrap();
        }

        let detail = f
            .service
            .post_by_slug("acme.example.com", "two")
            .await
            .unwrap()
            .unwrap();
        assert!(detail.body_html.contains("<h1>Title</h1>"));
        assert_eq!(detail.adjacent.len(), 2);
        assert!(detail.adjacent.iter().all(|p| p.slug != "two"));
    }

    #[tokio::test]
    async fn test_unpublished_slug_is_none() {
        let f = fixture().await;
        f.store
            .create_post(Post::new(&f.agency.id, &f.agency.user_id).with_slug("draft"))
            .await
            .unwrap();
        assert!(f
            .service
            .post_by_slug("acme.example.com", "draft")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_fetch_is_idempotent_while_cached() {
        let f = fixture().await;
        let post = f
            .store
            .create_post(
                Post::new(&f.agency.id, &f.agency.user_id)
                    .with_slug("hello")
                    .with_published(true),
            )
            .await
            .unwrap();

        let first = f
            .service
            .post_by_slug("acme.example.com", "hello")
            .await
            .unwrap();

        // A store-level change without invalidation is not observed.
        f.store.delete_post(&post.id).await.unwrap();
        let second = f
            .service
            .post_by_slug("acme.example.com", "hello")
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_configured_ttl_is_honored() {
        let store = Arc::new(InMemoryPlatformStore::new());
        let agency = store
            .create_agency(CreateAgencyRequest::new("acme"), "user-1")
            .await
            .unwrap();
        let post = store
            .create_post(
                Post::new(&agency.id, "user-1")
                    .with_slug("hello")
                    .with_published(true),
            )
            .await
            .unwrap();

        let service = ContentService::new(
            store.clone(),
            HostResolver::new(store.clone(), "example.com"),
            TaggedCache::new(Arc::new(MemoryCache::new())),
            Arc::new(MarkdownRenderer::new()),
        )
        .with_cache_ttl(Duration::from_millis(20));

        assert!(service
            .post_by_slug("acme.example.com", "hello")
            .await
            .unwrap()
            .is_some());

        // With the default TTL this would still serve from cache; the short
        // configured TTL expires it and the next read recomputes.
        store.delete_post(&post.id).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(service
            .post_by_slug("acme.example.com", "hello")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_project_of_other_tenant_is_none() {
        let f = fixture().await;
        let other = f
            .store
            .create_agency(CreateAgencyRequest::new("umbrella"), "user-2")
            .await
            .unwrap();
        let foreign = f
            .store
            .create_project(Project::new(&other.id, "Secret"))
            .await
            .unwrap();

        assert!(f
            .service
            .project_by_id("acme.example.com", &foreign.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_project_detail_joins_agency_and_owner() {
        let f = fixture().await;
        let project = f
            .store
            .create_project(Project::new(&f.agency.id, "Revamp"))
            .await
            .unwrap();

        let detail = f
            .service
            .project_by_id("acme.example.com", &project.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.project.name, "Revamp");
        assert_eq!(detail.agency.id, f.agency.id);
        assert!(detail.owner.is_some());
    }
}
