//! Host normalization and classification.
//!
//! Every inbound host is matched against exactly one namespace: the shared
//! subdomain namespace under the root domain, or the flat custom-domain
//! namespace. The two are disjoint; a host never falls through from one to
//! the other.

/// Normalize a raw Host header value.
///
/// Strips the port, strips one trailing dot, and lowercases.
pub fn normalize_host(host: &str) -> String {
    let host = host.split(':').next().unwrap_or(host);
    let host = host.strip_suffix('.').unwrap_or(host);
    host.to_ascii_lowercase()
}

/// Which namespace a normalized host belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMatch {
    /// Single label under the root domain; carries the label.
    Subdomain(String),
    /// Host outside the root-domain namespace; carries the full host.
    CustomDomain(String),
    /// The root domain itself, or a multi-label name under it. Resolves to
    /// no tenant.
    NoTenant,
}

/// Classify a normalized host against the root domain.
pub fn classify(host: &str, root_domain: &str) -> HostMatch {
    if host == root_domain {
        return HostMatch::NoTenant;
    }
    if let Some(label) = host.strip_suffix(&format!(".{}", root_domain)) {
        // Inside the namespace: only single labels name a tenant. A
        // multi-label name is never retried as a custom domain.
        if !label.is_empty() && !label.contains('.') {
            return HostMatch::Subdomain(label.to_string());
        }
        return HostMatch::NoTenant;
    }
    HostMatch::CustomDomain(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_port() {
        assert_eq!(normalize_host("acme.example.com:8080"), "acme.example.com");
    }

    #[test]
    fn test_normalize_strips_trailing_dot() {
        assert_eq!(normalize_host("acme.example.com."), "acme.example.com");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_host("ACME.Example.COM"), "acme.example.com");
    }

    #[test]
    fn test_classify_subdomain() {
        assert_eq!(
            classify("acme.example.com", "example.com"),
            HostMatch::Subdomain("acme".to_string())
        );
    }

    #[test]
    fn test_classify_custom_domain() {
        assert_eq!(
            classify("acme.io", "example.com"),
            HostMatch::CustomDomain("acme.io".to_string())
        );
    }

    #[test]
    fn test_classify_root_domain_is_no_tenant() {
        assert_eq!(classify("example.com", "example.com"), HostMatch::NoTenant);
    }

    #[test]
    fn test_classify_multi_label_is_no_tenant() {
        // Inside the namespace but not a single label: neither a subdomain
        // match nor a custom-domain fallthrough.
        assert_eq!(
            classify("a.b.example.com", "example.com"),
            HostMatch::NoTenant
        );
    }

    #[test]
    fn test_classify_bare_dot_prefix() {
        assert_eq!(classify(".example.com", "example.com"), HostMatch::NoTenant);
    }
}
