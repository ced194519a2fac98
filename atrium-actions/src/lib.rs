//! Authorization-guarded mutations for the Atrium platform.
//!
//! The write path: authenticate the session, authorize against the agency
//! derived from the target row, mutate in a single statement, and invalidate
//! the exact cache tags the read path attached. Errors are returned as
//! values (`ActionError`); `Display` yields the user-facing message.

pub mod agency;
pub mod business;
pub mod guard;
pub mod invalidation;
pub mod post;
pub mod service;
pub mod session;
pub mod storage;
pub mod user;

pub use guard::{require_session, with_agency_auth, with_post_auth};
pub use service::ActionService;
pub use session::Session;
pub use storage::{BlobStore, InMemoryBlobStore, StorageError, Visibility};

pub use atrium_core::ActionError;
