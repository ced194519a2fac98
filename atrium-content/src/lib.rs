//! Tenant-scoped cached reads for the Atrium platform.
//!
//! The public-site read path: resolve the inbound host to its agency, serve
//! content through the tagged cache, and render post bodies through the
//! markup renderer. Cache tags follow `atrium_core::tags` exactly so the
//! mutation pipeline can invalidate with precision.

pub mod error;
pub mod fetchers;
pub mod render;

pub use error::ContentError;
pub use fetchers::{ContentService, PostDetail, ProjectDetail};
pub use render::{MarkdownRenderer, MarkupRenderer};
