//! Tagged-variant update requests.
//!
//! Each mutable field is a closed enum variant carrying a typed value; the
//! mutation pipeline maps every variant explicitly to its persistence and
//! cache-invalidation behavior. There is no generic string-keyed setter.

use serde::{Deserialize, Serialize};

/// An uploaded file destined for blob storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// MIME type, e.g. `image/png`. The extension of the stored blob is
    /// derived from its subtype.
    pub content_type: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

impl FileUpload {
    /// Create an upload.
    pub fn new(content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            data,
        }
    }

    /// File extension derived from the MIME subtype.
    pub fn extension(&self) -> &str {
        self.content_type
            .split('/')
            .nth(1)
            .unwrap_or("bin")
    }
}

/// A single-field update to an agency.
#[derive(Debug, Clone)]
pub enum AgencyUpdate {
    /// Display name.
    Name(String),
    /// Description.
    Description(String),
    /// Font identifier.
    Font(String),
    /// 404-page message.
    Message404(String),
    /// Subdomain label (unique within the root-domain namespace).
    Subdomain(String),
    /// Custom domain; `None` clears it. Drives the domain lifecycle.
    CustomDomain(Option<String>),
    /// Logo upload.
    Logo(FileUpload),
    /// Header image upload.
    Image(FileUpload),
}

impl AgencyUpdate {
    /// Field name used in conflict messages and logs.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Description(_) => "description",
            Self::Font(_) => "font",
            Self::Message404(_) => "message404",
            Self::Subdomain(_) => "subdomain",
            Self::CustomDomain(_) => "custom domain",
            Self::Logo(_) => "logo",
            Self::Image(_) => "image",
        }
    }
}

/// A single-field update to a post's metadata.
#[derive(Debug, Clone)]
pub enum PostUpdate {
    /// Title.
    Title(String),
    /// Description.
    Description(String),
    /// Slug (unique within the agency). A rename must also invalidate the
    /// entry cached under the old slug.
    Slug(String),
    /// Publication flag.
    Published(bool),
    /// Cover image upload.
    Image(FileUpload),
}

impl PostUpdate {
    /// Field name used in conflict messages and logs.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Description(_) => "description",
            Self::Slug(_) => "slug",
            Self::Published(_) => "published",
            Self::Image(_) => "image",
        }
    }
}

/// Editable content of a post, persisted as one statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostContentUpdate {
    /// Target post.
    pub id: String,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New markup body.
    pub content: Option<String>,
}

/// A single-field update to the acting principal.
#[derive(Debug, Clone)]
pub enum UserUpdate {
    /// Display name.
    Name(String),
    /// Email address (unique).
    Email(String),
}

impl UserUpdate {
    /// Field name used in conflict messages and logs.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Email(_) => "email",
        }
    }
}
