//! Error types for cache operations.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache-specific errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Key not found
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Factory failure surfaced through a fetch-or-compute call
    #[error("Source error: {0}")]
    Source(String),

    /// Generic error
    #[error("Cache error: {0}")]
    Other(String),
}
