//! Tagged TTL caching for the Atrium platform.
//!
//! Provides a backend-agnostic `CacheStore` trait, an in-memory backend with
//! lazy expiry, and `TaggedCache` for tag-based invalidation: entries are
//! stored under tags, and write paths drop exactly the entries a mutation
//! made stale by invalidating those tags.
//!
//! # Examples
//!
//! ```no_run
//! use atrium_cache::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), CacheError> {
//! let tagged = TaggedCache::new(Arc::new(MemoryCache::new()));
//!
//! // Set with tags
//! tagged.set_with_tags(
//!     "acme.example.com-metadata",
//!     r#"{"name":"Acme"}"#.to_string(),
//!     &["acme.example.com-metadata"],
//!     None,
//! ).await?;
//!
//! // Invalidate all entries with the tag
//! tagged.invalidate_tag("acme.example.com-metadata").await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod helpers;
pub mod memory;
pub mod tagged;
pub mod traits;

pub use error::{CacheError, CacheResult};
pub use helpers::*;
pub use memory::MemoryCache;
pub use tagged::{DEFAULT_TTL, TaggedCache};
pub use traits::CacheStore;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{CacheError, CacheResult};
    pub use crate::memory::MemoryCache;
    pub use crate::tagged::{DEFAULT_TTL, TaggedCache};
    pub use crate::traits::CacheStore;
}
