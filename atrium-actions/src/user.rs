//! Principal mutations.

use crate::guard::require_session;
use crate::service::ActionService;
use crate::session::Session;
use atrium_cache::CacheStore;
use atrium_core::{ActionError, User, UserUpdate};
use chrono::Utc;

impl<C: CacheStore> ActionService<C> {
    /// Apply a single-field update to the session principal.
    pub async fn update_user(
        &self,
        session: Option<&Session>,
        update: UserUpdate,
    ) -> Result<User, ActionError> {
        let session = require_session(session)?;

        let mut user = self
            .store
            .user_by_id(&session.user_id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("user {}", session.user_id)))?;

        match update {
            UserUpdate::Name(name) => user.name = Some(name),
            UserUpdate::Email(email) => user.email = email,
        }
        user.updated_at = Utc::now();

        Ok(self.store.update_user(&user).await?)
    }
}
