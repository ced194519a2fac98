// Atrium - a multi-tenant publishing platform core.
//
// Tenants (agencies) are served through subdomains of a shared root domain
// or through their own custom domains. Reads go through a tagged TTL cache;
// writes are authorization-guarded and invalidate exactly the cache entries
// they made stale.

// Re-export core functionality
pub use atrium_core::*;

// Re-export member crates
pub use atrium_actions;
pub use atrium_cache;
pub use atrium_content;
pub use atrium_domains;
pub use atrium_log;
pub use atrium_tenancy;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ActionError, Agency, AgencyMember, AgencyUpdate, AgencyWithOwner, CreateAgencyRequest,
        InMemoryPlatformStore, MemberRole, PlatformConfig, PlatformStore, Post, PostSummary,
        PostUpdate, StoreError, User,
    };
    pub use atrium_actions::{ActionService, BlobStore, InMemoryBlobStore, Session};
    pub use atrium_cache::{CacheStore, MemoryCache, TaggedCache};
    pub use atrium_content::{ContentService, MarkdownRenderer, MarkupRenderer};
    pub use atrium_domains::{DomainManager, DomainProvider, NoOpDomainProvider};
    pub use atrium_tenancy::HostResolver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_exposes_core_types() {
        let config = PlatformConfig::new("example.com");
        assert_eq!(config.root_domain, "example.com");
    }
}
