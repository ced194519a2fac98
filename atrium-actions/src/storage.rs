//! Blob storage collaborator.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use thiserror::Error;

/// Blob storage failure.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Visibility of a stored blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Served without authentication.
    Public,
    /// Reachable only through signed access.
    Private,
}

/// Stores uploaded files and returns their serving URL.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store a blob under a filename, returning its URL.
    async fn put(
        &self,
        filename: &str,
        data: Vec<u8>,
        visibility: Visibility,
    ) -> Result<String, StorageError>;
}

/// In-memory blob store with deterministic URLs, for tests and local
/// development.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored blob by filename.
    pub fn get(&self, filename: &str) -> Option<Vec<u8>> {
        self.blobs.lock().get(filename).cloned()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.lock().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.lock().is_empty()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(
        &self,
        filename: &str,
        data: Vec<u8>,
        _visibility: Visibility,
    ) -> Result<String, StorageError> {
        self.blobs.lock().insert(filename.to_string(), data);
        Ok(format!("https://blobs.local/{}", filename))
    }
}
