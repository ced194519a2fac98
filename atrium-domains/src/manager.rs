//! Provider-side domain lifecycle.

use crate::provider::DomainProvider;
use std::sync::Arc;

/// Drives provider registration around persisted domain changes.
///
/// The store row is the source of truth: callers persist first, then hand
/// the transition to the manager. Provider failures are logged and swallowed
/// so they never roll back a persisted change; a later retry re-registers.
pub struct DomainManager {
    provider: Arc<dyn DomainProvider>,
}

impl DomainManager {
    /// Create a manager over a provider.
    pub fn new(provider: Arc<dyn DomainProvider>) -> Self {
        Self { provider }
    }

    /// Register a newly persisted domain and, when the row previously held a
    /// different one, deregister the old domain afterwards.
    pub async fn domain_changed(&self, new_domain: Option<&str>, previous: Option<&str>) {
        if new_domain == previous {
            return;
        }

        if let Some(domain) = new_domain {
            if let Err(err) = self.provider.add_domain(domain).await {
                atrium_log::warn!(target: "domains", "failed to register {}: {}", domain, err);
            }
        }

        if let Some(old) = previous {
            if let Err(err) = self.provider.remove_domain(old).await {
                atrium_log::warn!(target: "domains", "failed to deregister {}: {}", old, err);
            }
        }
    }
}
