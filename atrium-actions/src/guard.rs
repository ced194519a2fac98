//! Authorization guards.
//!
//! Every mutation re-derives tenancy from the target row: the guard fetches
//! the row, walks to its agency, and checks the principal against it.
//! Client-supplied tenant ids are never trusted beyond naming the row to
//! fetch.

use crate::session::Session;
use atrium_core::{ActionError, Agency, MemberRole, PlatformStore, Post};

/// Require an authenticated session.
pub fn require_session(session: Option<&Session>) -> Result<&Session, ActionError> {
    session.ok_or(ActionError::NotAuthenticated)
}

/// Fetch an agency and verify the principal may act on it.
///
/// The owner always passes; otherwise a membership with at least
/// `required_role` is needed.
pub async fn with_agency_auth(
    store: &dyn PlatformStore,
    session: Option<&Session>,
    agency_id: &str,
    required_role: MemberRole,
) -> Result<Agency, ActionError> {
    let session = require_session(session)?;

    let agency = store
        .agency_by_id(agency_id)
        .await?
        .ok_or_else(|| ActionError::NotFound(format!("agency {}", agency_id)))?;

    if agency.user_id == session.user_id {
        return Ok(agency);
    }

    let member = store.member(&agency.id, &session.user_id).await?;
    match member {
        Some(member) if member.role >= required_role => Ok(agency),
        _ => Err(ActionError::NotAuthorized),
    }
}

/// Fetch a post and its agency, and verify the principal may act on it.
pub async fn with_post_auth(
    store: &dyn PlatformStore,
    session: Option<&Session>,
    post_id: &str,
    required_role: MemberRole,
) -> Result<(Post, Agency), ActionError> {
    require_session(session)?;

    let post = store
        .post_by_id(post_id)
        .await?
        .ok_or_else(|| ActionError::NotFound(format!("post {}", post_id)))?;

    // Tenancy comes from the row, never from the caller.
    let agency = with_agency_auth(store, session, &post.agency_id, required_role).await?;
    Ok((post, agency))
}
