//! Cache invalidation fan-out.
//!
//! A mutation invalidates the affected kind tag under every host the agency
//! serves: the subdomain host and, when set, the custom domain. Tag strings
//! come from `atrium_core::tags`, the same module the read path uses.

use atrium_cache::{CacheStore, TaggedCache};
use atrium_core::{ActionError, Agency, tags};

/// Invalidate an explicit set of tags.
pub async fn invalidate<C: CacheStore>(
    cache: &TaggedCache<C>,
    tag_set: &[String],
) -> Result<(), ActionError> {
    let refs: Vec<&str> = tag_set.iter().map(|t| t.as_str()).collect();
    cache
        .invalidate_tags(&refs)
        .await
        .map_err(|e| ActionError::Other(e.to_string()))
}

/// Bare host tags for every host an agency serves.
///
/// Every cache entry carries its host's bare tag alongside its kind tag, so
/// invalidating these drops the agency's whole cached surface.
pub fn host_tags(agency: &Agency, root_domain: &str) -> Vec<String> {
    tags::for_agency(agency, root_domain, tags::host)
}

/// Bare host tags for the hosts a mutation released: hosts the agency served
/// before the write but no longer serves.
///
/// A released host must lose its whole footprint, or a tenant later claiming
/// it would serve the previous tenant's cached entries until the TTL.
pub fn released_host_tags(before: &Agency, after: &Agency, root_domain: &str) -> Vec<String> {
    let kept = after.hosts(root_domain);
    before
        .hosts(root_domain)
        .into_iter()
        .filter(|host| !kept.contains(host))
        .map(|host| tags::host(&host))
        .collect()
}

/// Metadata tags for every host an agency serves.
pub fn metadata_tags(agency: &Agency, root_domain: &str) -> Vec<String> {
    tags::for_agency(agency, root_domain, tags::metadata)
}

/// Post-listing tags for every host an agency serves.
pub fn posts_tags(agency: &Agency, root_domain: &str) -> Vec<String> {
    tags::for_agency(agency, root_domain, tags::posts)
}

/// Single-post tags for a slug under every host an agency serves.
pub fn post_item_tags(agency: &Agency, root_domain: &str, slug: &str) -> Vec<String> {
    tags::for_agency(agency, root_domain, |host| tags::post_item(host, slug))
}

/// Project-listing tags for every host an agency serves.
pub fn projects_tags(agency: &Agency, root_domain: &str) -> Vec<String> {
    tags::for_agency(agency, root_domain, tags::projects)
}

/// Single-project tags for an id under every host an agency serves.
pub fn project_item_tags(agency: &Agency, root_domain: &str, id: &str) -> Vec<String> {
    tags::for_agency(agency, root_domain, |host| tags::project_item(host, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_hosts_on_subdomain_rename() {
        let before = Agency::new("beta", "user-1").with_custom_domain("beta.io");
        let mut after = before.clone();
        after.subdomain = "gamma".to_string();

        // The custom domain is kept; only the old subdomain host is released.
        assert_eq!(
            released_host_tags(&before, &after, "example.com"),
            vec!["beta.example.com".to_string()]
        );
    }

    #[test]
    fn test_no_released_hosts_on_plain_update() {
        let agency = Agency::new("beta", "user-1");
        let mut after = agency.clone();
        after.name = Some("Beta".to_string());
        assert!(released_host_tags(&agency, &after, "example.com").is_empty());
    }

    #[test]
    fn test_tags_cover_both_hosts() {
        let agency = Agency::new("acme", "user-1").with_custom_domain("acme.io");
        assert_eq!(
            post_item_tags(&agency, "example.com", "hello"),
            vec![
                "acme.example.com-hello".to_string(),
                "acme.io-hello".to_string()
            ]
        );
    }
}
