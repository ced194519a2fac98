//! Cache tag grammar.
//!
//! Tags are the wire contract between cache-entry creation and write-path
//! invalidation: both sides must produce byte-identical strings or
//! invalidation silently no-ops. All construction goes through this module.

use crate::agency::Agency;

/// Bare tag covering every entry cached under a host.
///
/// Attached alongside the kind tag on every entry, so releasing a host
/// binding (subdomain rename, custom-domain change, agency delete) can drop
/// the host's whole cache footprint at once.
pub fn host(host: &str) -> String {
    host.to_string()
}

/// Tag covering a host's tenant metadata.
pub fn metadata(host: &str) -> String {
    format!("{}-metadata", host)
}

/// Tag covering a host's published-post listing.
pub fn posts(host: &str) -> String {
    format!("{}-posts", host)
}

/// Tag covering a single post, keyed by slug.
pub fn post_item(host: &str, slug: &str) -> String {
    format!("{}-{}", host, slug)
}

/// Tag covering a host's project listing.
pub fn projects(host: &str) -> String {
    format!("{}-projects", host)
}

/// Tag covering a single project, keyed by id.
pub fn project_item(host: &str, id: &str) -> String {
    format!("{}-project-{}", host, id)
}

/// Apply a tag constructor across every host an agency serves.
///
/// Yields the subdomain-based tag and, when a custom domain is set, the
/// mirrored custom-domain tag. Both serve the same underlying data and must
/// be invalidated together.
pub fn for_agency<F>(agency: &Agency, root_domain: &str, tag: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    agency
        .hosts(root_domain)
        .iter()
        .map(|host| tag(host))
        .collect()
}
