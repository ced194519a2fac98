//! The mutation pipeline service.

use crate::storage::BlobStore;
use atrium_cache::{CacheStore, TaggedCache};
use atrium_core::{ActionError, FileUpload, PlatformConfig, PlatformStore};
use atrium_domains::{DomainError, DomainManager};
use std::sync::Arc;

/// Authorization-guarded mutations with precise cache invalidation.
///
/// Every operation authenticates the session, authorizes against the target
/// row's agency, performs a single-statement mutation, and invalidates the
/// affected cache tags before returning. Errors are values; nothing here
/// panics.
pub struct ActionService<C: CacheStore> {
    pub(crate) store: Arc<dyn PlatformStore>,
    pub(crate) cache: TaggedCache<C>,
    pub(crate) config: PlatformConfig,
    pub(crate) blobs: Arc<dyn BlobStore>,
    pub(crate) domains: DomainManager,
}

impl<C: CacheStore> ActionService<C> {
    /// Create a service over its collaborators.
    pub fn new(
        store: Arc<dyn PlatformStore>,
        cache: TaggedCache<C>,
        config: PlatformConfig,
        blobs: Arc<dyn BlobStore>,
        domains: DomainManager,
    ) -> Self {
        Self {
            store,
            cache,
            config,
            blobs,
            domains,
        }
    }

    pub(crate) fn root(&self) -> &str {
        &self.config.root_domain
    }

    /// Store an upload under a generated filename and return its URL.
    pub(crate) async fn store_upload(&self, upload: &FileUpload) -> Result<String, ActionError> {
        let filename = format!("{}.{}", atrium_core::new_id(), upload.extension());
        self.blobs
            .put(&filename, upload.data.clone(), crate::storage::Visibility::Public)
            .await
            .map_err(|e| ActionError::Storage(e.to_string()))
    }
}

pub(crate) fn map_domain_error(err: DomainError) -> ActionError {
    match err {
        // Validation failures carry their user-facing message.
        DomainError::Reserved(_) | DomainError::Invalid(_) => {
            ActionError::Validation(err.to_string())
        }
        DomainError::Provider(message) => ActionError::Provider(message),
    }
}
