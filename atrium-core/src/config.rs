//! Platform configuration.

use std::env;
use std::time::Duration;

/// Fixed TTL for cached tenant content, in seconds.
pub const CACHE_TTL_SECS: u64 = 900;

/// Platform-wide configuration.
///
/// The root domain defines the shared subdomain namespace
/// (`{subdomain}.{root_domain}`); any other inbound host is treated as a
/// custom domain. Reserved domains may never be claimed as custom domains.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Root domain of the subdomain namespace, e.g. `example.com`.
    pub root_domain: String,

    /// Domains that may never be used as a tenant's custom domain.
    pub reserved_domains: Vec<String>,

    /// TTL for cached content.
    pub cache_ttl: Duration,
}

impl PlatformConfig {
    /// Create a config for the given root domain.
    pub fn new(root_domain: impl Into<String>) -> Self {
        let root_domain = root_domain.into();
        Self {
            reserved_domains: vec![root_domain.clone()],
            root_domain,
            cache_ttl: Duration::from_secs(CACHE_TTL_SECS),
        }
    }

    /// Create a config from environment variables.
    ///
    /// Reads `ATRIUM_ROOT_DOMAIN`; falls back to `localhost` when unset.
    pub fn from_env() -> Self {
        let root_domain =
            env::var("ATRIUM_ROOT_DOMAIN").unwrap_or_else(|_| "localhost".to_string());
        Self::new(root_domain)
    }

    /// Add a reserved domain.
    pub fn with_reserved_domain(mut self, domain: impl Into<String>) -> Self {
        self.reserved_domains.push(domain.into());
        self
    }

    /// Override the cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
