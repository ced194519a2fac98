//! Content item (post) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content item belonging to exactly one agency.
///
/// Slugs are unique within the owning agency, not globally. Only published
/// posts are visible on the resolution path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Unique identifier.
    pub id: String,

    /// Owning agency.
    pub agency_id: String,

    /// Authoring principal.
    pub user_id: String,

    /// Title.
    pub title: Option<String>,

    /// Short description.
    pub description: Option<String>,

    /// Raw markup body.
    pub content: Option<String>,

    /// URL slug, unique within the agency. Defaults to a random id.
    pub slug: String,

    /// Cover image URL.
    pub image: Option<String>,

    /// Blur placeholder for the cover image.
    pub image_blurhash: Option<String>,

    /// Whether the post is visible on the public site.
    pub published: bool,

    /// Created timestamp. Drives newest-first ordering and adjacency.
    pub created_at: DateTime<Utc>,

    /// Last updated timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a draft post with a generated id and slug.
    pub fn new(agency_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        let id = crate::new_id();
        Self {
            slug: id.clone(),
            id,
            agency_id: agency_id.into(),
            user_id: user_id.into(),
            title: None,
            description: None,
            content: None,
            image: None,
            image_blurhash: None,
            published: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set body markup.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set publication flag.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// The summary shape served in listings.
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            title: self.title.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
            image: self.image.clone(),
            image_blurhash: self.image_blurhash.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing projection of a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostSummary {
    /// Title.
    pub title: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// URL slug.
    pub slug: String,
    /// Cover image URL.
    pub image: Option<String>,
    /// Blur placeholder.
    pub image_blurhash: Option<String>,
    /// Created timestamp.
    pub created_at: DateTime<Utc>,
}
