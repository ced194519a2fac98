//! Host-to-tenant resolution.

use crate::host::{HostMatch, classify, normalize_host};
use atrium_core::{Agency, PlatformStore, StoreResult};
use std::sync::Arc;

/// Resolves an inbound host to the agency it serves.
///
/// A host inside the root-domain namespace is looked up by subdomain label;
/// any other host is looked up by exact custom domain. Exactly one lookup
/// path runs per call, and an unmatched host is `Ok(None)`, not an error.
pub struct HostResolver {
    store: Arc<dyn PlatformStore>,
    root_domain: String,
}

impl HostResolver {
    /// Create a resolver over a store and root domain.
    pub fn new(store: Arc<dyn PlatformStore>, root_domain: impl Into<String>) -> Self {
        Self {
            store,
            root_domain: root_domain.into(),
        }
    }

    /// The root domain of the subdomain namespace.
    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    /// Resolve a raw host to its agency.
    pub async fn resolve(&self, host: &str) -> StoreResult<Option<Agency>> {
        let normalized = normalize_host(host);
        match classify(&normalized, &self.root_domain) {
            HostMatch::Subdomain(label) => {
                atrium_log::debug!(target: "tenancy", "resolving subdomain {}", label);
                self.store.agency_by_subdomain(&label).await
            }
            HostMatch::CustomDomain(domain) => {
                atrium_log::debug!(target: "tenancy", "resolving custom domain {}", domain);
                self.store.agency_by_custom_domain(&domain).await
            }
            HostMatch::NoTenant => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::{CreateAgencyRequest, InMemoryPlatformStore};

    async fn resolver_with_acme() -> HostResolver {
        let store = Arc::new(InMemoryPlatformStore::new());
        let agency = store
            .create_agency(CreateAgencyRequest::new("acme"), "user-1")
            .await
            .unwrap();
        let agency = Agency {
            custom_domain: Some("acme.io".to_string()),
            ..agency
        };
        store.update_agency(&agency).await.unwrap();
        HostResolver::new(store, "example.com")
    }

    #[tokio::test]
    async fn test_resolves_subdomain_host() {
        let resolver = resolver_with_acme().await;
        let agency = resolver.resolve("acme.example.com").await.unwrap().unwrap();
        assert_eq!(agency.subdomain, "acme");
    }

    #[tokio::test]
    async fn test_resolves_custom_domain_host() {
        let resolver = resolver_with_acme().await;
        let agency = resolver.resolve("acme.io").await.unwrap().unwrap();
        assert_eq!(agency.subdomain, "acme");
    }

    #[tokio::test]
    async fn test_unknown_subdomain_is_none() {
        let resolver = resolver_with_acme().await;
        assert!(resolver.resolve("ghost.example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_namespaces_are_disjoint() {
        // A host under the root domain never matches a custom-domain row,
        // even one with the identical string.
        let store = Arc::new(InMemoryPlatformStore::new());
        let agency = store
            .create_agency(CreateAgencyRequest::new("other"), "user-1")
            .await
            .unwrap();
        let agency = Agency {
            custom_domain: Some("acme.example.com".to_string()),
            ..agency
        };
        store.update_agency(&agency).await.unwrap();

        let resolver = HostResolver::new(store, "example.com");
        assert!(resolver.resolve("acme.example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_normalization_applies_before_lookup() {
        let resolver = resolver_with_acme().await;
        let agency = resolver
            .resolve("ACME.example.com:3000")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(agency.subdomain, "acme");
    }

    #[tokio::test]
    async fn test_root_domain_resolves_to_none() {
        let resolver = resolver_with_acme().await;
        assert!(resolver.resolve("example.com").await.unwrap().is_none());
    }
}
