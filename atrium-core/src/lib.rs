//! Core domain model for the Atrium platform.
//!
//! Tenants (agencies), principals, posts, and the agency-scoped business
//! entities, plus the persistence trait and the cache-tag grammar shared by
//! every other crate.

pub mod agency;
pub mod business;
pub mod config;
pub mod error;
pub mod memory;
pub mod post;
pub mod store;
pub mod tags;
pub mod update;
pub mod user;

pub use agency::{Agency, AgencyMember, AgencyWithOwner, CreateAgencyRequest, MemberRole};
pub use business::{
    Client, ClientStatus, Invoice, InvoiceItem, InvoiceStatus, Lead, LeadStatus, Priority,
    Project, ProjectStatus, Task,
};
pub use config::{CACHE_TTL_SECS, PlatformConfig};
pub use error::{ActionError, StoreError, StoreResult};
pub use memory::InMemoryPlatformStore;
pub use post::{Post, PostSummary};
pub use store::PlatformStore;
pub use update::{AgencyUpdate, FileUpload, PostContentUpdate, PostUpdate, UserUpdate};
pub use user::User;

/// Generate a fresh row identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
