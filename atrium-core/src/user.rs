//! Principal (user) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform principal. Owns zero or more agencies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: Option<String>,

    /// Email address (unique across the platform).
    pub email: String,

    /// Avatar URL.
    pub image: Option<String>,

    /// Created timestamp.
    pub created_at: DateTime<Utc>,

    /// Last updated timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated id.
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            name: None,
            email: email.into(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set avatar URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_builder() {
        let user = User::new("alice@example.com").with_name("Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert!(!user.id.is_empty());
    }
}
