//! External domain provider interface.

use crate::error::{DomainError, DomainResult};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Registers and deregisters custom domains with an external hosting
/// provider.
///
/// Both operations are idempotent at the provider: adding a registered
/// domain and removing an unknown one succeed.
#[async_trait]
pub trait DomainProvider: Send + Sync {
    /// Register a domain.
    async fn add_domain(&self, domain: &str) -> DomainResult<()>;

    /// Deregister a domain.
    async fn remove_domain(&self, domain: &str) -> DomainResult<()>;
}

/// Provider that accepts everything and does nothing.
#[derive(Default)]
pub struct NoOpDomainProvider;

#[async_trait]
impl DomainProvider for NoOpDomainProvider {
    async fn add_domain(&self, _domain: &str) -> DomainResult<()> {
        Ok(())
    }

    async fn remove_domain(&self, _domain: &str) -> DomainResult<()> {
        Ok(())
    }
}

/// Provider that records every call, for tests.
#[derive(Default)]
pub struct RecordingDomainProvider {
    added: Mutex<Vec<String>>,
    removed: Mutex<Vec<String>>,
    fail_adds: Mutex<bool>,
    fail_removes: Mutex<bool>,
}

impl RecordingDomainProvider {
    /// Create a provider that succeeds on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `add_domain` calls fail.
    pub fn fail_adds(&self) {
        *self.fail_adds.lock() = true;
    }

    /// Make subsequent `remove_domain` calls fail.
    pub fn fail_removes(&self) {
        *self.fail_removes.lock() = true;
    }

    /// Domains passed to `add_domain`, in call order.
    pub fn added(&self) -> Vec<String> {
        self.added.lock().clone()
    }

    /// Domains passed to `remove_domain`, in call order.
    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().clone()
    }
}

#[async_trait]
impl DomainProvider for RecordingDomainProvider {
    async fn add_domain(&self, domain: &str) -> DomainResult<()> {
        if *self.fail_adds.lock() {
            return Err(DomainError::Provider(format!("add failed: {}", domain)));
        }
        self.added.lock().push(domain.to_string());
        Ok(())
    }

    async fn remove_domain(&self, domain: &str) -> DomainResult<()> {
        if *self.fail_removes.lock() {
            return Err(DomainError::Provider(format!("remove failed: {}", domain)));
        }
        self.removed.lock().push(domain.to_string());
        Ok(())
    }
}
