//! Tenant (agency) model and membership.

use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tenant. Reachable through its subdomain under the platform's root
/// domain and, optionally, through a fully independent custom domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agency {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: Option<String>,

    /// Short description shown on the public site.
    pub description: Option<String>,

    /// Logo URL.
    pub logo: Option<String>,

    /// Header image URL.
    pub image: Option<String>,

    /// Blur placeholder for the header image.
    pub image_blurhash: Option<String>,

    /// Font identifier for the public site.
    pub font: String,

    /// Subdomain label, unique within the root-domain namespace.
    pub subdomain: String,

    /// Custom domain, globally unique. Both this and the subdomain may
    /// serve the same content.
    pub custom_domain: Option<String>,

    /// Message rendered on the tenant's 404 page.
    pub message_404: Option<String>,

    /// Owner principal.
    pub user_id: String,

    /// Created timestamp.
    pub created_at: DateTime<Utc>,

    /// Last updated timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Agency {
    /// Create a new agency owned by the given principal.
    pub fn new(subdomain: impl Into<String>, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            name: None,
            description: None,
            logo: None,
            image: None,
            image_blurhash: None,
            font: "font-cal".to_string(),
            subdomain: subdomain.into(),
            custom_domain: None,
            message_404: Some("You've found a page that doesn't exist.".to_string()),
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set custom domain.
    pub fn with_custom_domain(mut self, domain: impl Into<String>) -> Self {
        self.custom_domain = Some(domain.into());
        self
    }

    /// Host under the shared root-domain namespace.
    pub fn subdomain_host(&self, root_domain: &str) -> String {
        format!("{}.{}", self.subdomain, root_domain)
    }

    /// Every host this agency serves: the subdomain host plus the custom
    /// domain when one is set.
    pub fn hosts(&self, root_domain: &str) -> Vec<String> {
        let mut hosts = vec![self.subdomain_host(root_domain)];
        if let Some(domain) = &self.custom_domain {
            hosts.push(domain.clone());
        }
        hosts
    }
}

/// Request to create a new agency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgencyRequest {
    /// Subdomain label to claim.
    pub subdomain: String,
    /// Display name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
}

impl CreateAgencyRequest {
    /// Create a request for the given subdomain.
    pub fn new(subdomain: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            name: None,
            description: None,
        }
    }

    /// Set display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Member role within an agency, from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    /// Read-mostly member.
    Member,
    /// Manages content and business entities.
    Manager,
    /// Manages agency settings and membership.
    Admin,
    /// The owning principal's role.
    Owner,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Member => write!(f, "MEMBER"),
            Self::Manager => write!(f, "MANAGER"),
            Self::Admin => write!(f, "ADMIN"),
            Self::Owner => write!(f, "OWNER"),
        }
    }
}

/// Membership row linking a principal to an agency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgencyMember {
    /// Unique identifier.
    pub id: String,

    /// Owning agency.
    pub agency_id: String,

    /// Member principal. The (agency, user) pair is unique.
    pub user_id: String,

    /// Role within the agency.
    pub role: MemberRole,

    /// Opaque permission tokens. Not interpreted by the platform.
    pub permissions: Vec<String>,

    /// Created timestamp.
    pub created_at: DateTime<Utc>,

    /// Last updated timestamp.
    pub updated_at: DateTime<Utc>,
}

impl AgencyMember {
    /// Create a membership with the default role.
    pub fn new(agency_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            agency_id: agency_id.into(),
            user_id: user_id.into(),
            role: MemberRole::Member,
            permissions: vec!["VIEW".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    /// Set role.
    pub fn with_role(mut self, role: MemberRole) -> Self {
        self.role = role;
        self
    }

    /// Set permission tokens.
    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }
}

/// Agency joined with its owner, the shape served for tenant metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgencyWithOwner {
    /// The agency row.
    pub agency: Agency,
    /// The owning principal, when the row still exists.
    pub owner: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_without_custom_domain() {
        let agency = Agency::new("acme", "user-1");
        assert_eq!(
            agency.hosts("example.com"),
            vec!["acme.example.com".to_string()]
        );
    }

    #[test]
    fn test_hosts_with_custom_domain() {
        let agency = Agency::new("acme", "user-1").with_custom_domain("acme.io");
        assert_eq!(
            agency.hosts("example.com"),
            vec!["acme.example.com".to_string(), "acme.io".to_string()]
        );
    }

    #[test]
    fn test_role_ordering() {
        assert!(MemberRole::Member < MemberRole::Manager);
        assert!(MemberRole::Manager < MemberRole::Admin);
        assert!(MemberRole::Admin < MemberRole::Owner);
    }
}
