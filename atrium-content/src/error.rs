//! Error types for content fetching.

use thiserror::Error;

/// Errors surfaced by the read fetchers.
///
/// A host or slug that matches nothing is `Ok(None)` at the fetcher, never
/// an error.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] atrium_core::StoreError),

    /// Cache failure.
    #[error(transparent)]
    Cache(#[from] atrium_cache::CacheError),
}
