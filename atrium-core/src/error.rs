//! Error types for the Atrium platform.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence errors.
///
/// `NotFound` is reserved for operations that require the row to exist
/// (updates, deletes); lookups return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint violation on the named field.
    #[error("unique constraint violated: {field}")]
    Conflict { field: String },

    /// Target row does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Uncategorized persistence failure.
    #[error("store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Conflict on a named unique field.
    pub fn conflict(field: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
        }
    }
}

fn conflict_message(field: &str) -> String {
    // User-facing copy kept stable; forms vary by field.
    match field {
        "slug" => "This slug is already in use".to_string(),
        "email" => "This email is already in use".to_string(),
        other => format!("This {} is already taken", other),
    }
}

/// Errors surfaced by the mutation pipeline.
///
/// These are values returned to the caller, never propagated past the
/// mutation boundary as faults. `Display` yields the user-facing message.
#[derive(Debug, Error)]
pub enum ActionError {
    /// No valid session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Session principal does not own or cannot access the target.
    #[error("Not authorized")]
    NotAuthorized,

    /// Unique-constraint violation on the named field.
    #[error("{}", conflict_message(.field))]
    Conflict { field: String },

    /// Rejected before any persistence attempt.
    #[error("{0}")]
    Validation(String),

    /// Target row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Blob storage failure.
    #[error("{0}")]
    Storage(String),

    /// External domain provider failure. Logged and usually non-fatal.
    #[error("{0}")]
    Provider(String),

    /// Uncategorized failure.
    #[error("{0}")]
    Other(String),
}

impl From<StoreError> for ActionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { field } => ActionError::Conflict { field },
            StoreError::NotFound(what) => ActionError::NotFound(what),
            StoreError::Internal(message) => ActionError::Other(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_messages() {
        let err = ActionError::Conflict {
            field: "subdomain".to_string(),
        };
        assert_eq!(err.to_string(), "This subdomain is already taken");

        let err = ActionError::Conflict {
            field: "custom domain".to_string(),
        };
        assert_eq!(err.to_string(), "This custom domain is already taken");

        let err = ActionError::Conflict {
            field: "slug".to_string(),
        };
        assert_eq!(err.to_string(), "This slug is already in use");

        let err = ActionError::Conflict {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "This email is already in use");
    }

    #[test]
    fn test_not_authenticated_message() {
        assert_eq!(
            ActionError::NotAuthenticated.to_string(),
            "Not authenticated"
        );
    }

    #[test]
    fn test_store_error_conversion() {
        let err: ActionError = StoreError::conflict("subdomain").into();
        assert!(matches!(err, ActionError::Conflict { field } if field == "subdomain"));
    }
}
