//! Error types for the domain lifecycle.

use thiserror::Error;

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain validation and provider errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The domain reuses a reserved root domain.
    #[error("Cannot use {0} subdomain as your custom domain")]
    Reserved(String),

    /// The domain is not a valid hostname.
    #[error("Invalid domain: {0}")]
    Invalid(String),

    /// External provider failure. Usually logged, not surfaced.
    #[error("Domain provider error: {0}")]
    Provider(String),
}
