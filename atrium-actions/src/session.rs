//! The acting principal.

/// An authenticated session.
///
/// Issuance and verification live outside the platform; mutations only need
/// the principal's id. `None` at the mutation boundary is "Not
/// authenticated".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The authenticated principal.
    pub user_id: String,
}

impl Session {
    /// Create a session for a principal.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
