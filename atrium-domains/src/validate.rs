//! Custom-domain validation.

use crate::error::{DomainError, DomainResult};
use atrium_core::PlatformConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static DOMAIN_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^([a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}$"));

/// Validate a candidate custom domain against the platform config.
///
/// Rejects any reuse of a reserved domain (the root domain itself or a name
/// under it, which would collide with the subdomain namespace), then checks
/// the hostname shape. Returns the normalized (lowercased) domain.
pub fn validate_custom_domain(domain: &str, config: &PlatformConfig) -> DomainResult<String> {
    let domain = domain.trim().to_ascii_lowercase();

    for reserved in &config.reserved_domains {
        if domain == *reserved || domain.ends_with(&format!(".{}", reserved)) {
            return Err(DomainError::Reserved(reserved.clone()));
        }
    }

    let regex = DOMAIN_REGEX
        .as_ref()
        .map_err(|e| DomainError::Invalid(e.to_string()))?;
    if !regex.is_match(&domain) {
        return Err(DomainError::Invalid(domain));
    }

    Ok(domain)
}
