//! Custom-domain lifecycle for the Atrium platform.
//!
//! Validates candidate custom domains against the platform's reserved
//! namespace and a strict hostname shape, and drives registration with the
//! external hosting provider. The persisted row always wins: callers persist
//! first, then let `DomainManager` reconcile the provider, and provider
//! failures never roll anything back.

pub mod error;
pub mod manager;
pub mod provider;
pub mod validate;

pub use error::{DomainError, DomainResult};
pub use manager::DomainManager;
pub use provider::{DomainProvider, NoOpDomainProvider, RecordingDomainProvider};
pub use validate::validate_custom_domain;
