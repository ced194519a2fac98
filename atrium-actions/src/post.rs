//! Post mutations.

use crate::guard::{require_session, with_agency_auth, with_post_auth};
use crate::invalidation;
use crate::service::ActionService;
use crate::session::Session;
use atrium_cache::CacheStore;
use atrium_core::{ActionError, MemberRole, Post, PostContentUpdate, PostUpdate};
use chrono::Utc;

impl<C: CacheStore> ActionService<C> {
    /// Create a draft post in an agency.
    pub async fn create_post(
        &self,
        session: Option<&Session>,
        agency_id: &str,
    ) -> Result<Post, ActionError> {
        let user_id = require_session(session)?.user_id.clone();
        let agency = with_agency_auth(
            self.store.as_ref(),
            session,
            agency_id,
            MemberRole::Manager,
        )
        .await?;

        let post = self.store.create_post(Post::new(&agency.id, user_id)).await?;

        invalidation::invalidate(
            &self.cache,
            &invalidation::posts_tags(&agency, self.root()),
        )
        .await?;
        Ok(post)
    }

    /// Persist a post's editable content in one statement.
    pub async fn update_post_content(
        &self,
        session: Option<&Session>,
        update: PostContentUpdate,
    ) -> Result<Post, ActionError> {
        let (mut post, agency) = with_post_auth(
            self.store.as_ref(),
            session,
            &update.id,
            MemberRole::Manager,
        )
        .await?;

        if let Some(title) = update.title {
            post.title = Some(title);
        }
        if let Some(description) = update.description {
            post.description = Some(description);
        }
        if let Some(content) = update.content {
            post.content = Some(content);
        }
        post.updated_at = Utc::now();
        let post = self.store.update_post(&post).await?;

        let mut tag_set = invalidation::posts_tags(&agency, self.root());
        tag_set.extend(invalidation::post_item_tags(
            &agency,
            self.root(),
            &post.slug,
        ));
        invalidation::invalidate(&self.cache, &tag_set).await?;

        Ok(post)
    }

    /// Apply a single-field metadata update to a post.
    ///
    /// A slug rename also invalidates the entry cached under the old slug;
    /// the listing tag is always invalidated.
    pub async fn update_post(
        &self,
        session: Option<&Session>,
        post_id: &str,
        update: PostUpdate,
    ) -> Result<Post, ActionError> {
        let (before, agency) = with_post_auth(
            self.store.as_ref(),
            session,
            post_id,
            MemberRole::Manager,
        )
        .await?;

        let mut post = before.clone();
        match update {
            PostUpdate::Title(title) => post.title = Some(title),
            PostUpdate::Description(description) => post.description = Some(description),
            PostUpdate::Slug(slug) => post.slug = slug,
            PostUpdate::Published(published) => post.published = published,
            PostUpdate::Image(upload) => {
                post.image = Some(self.store_upload(&upload).await?);
                post.image_blurhash = None;
            }
        }
        post.updated_at = Utc::now();
        let post = self.store.update_post(&post).await?;

        let mut tag_set = invalidation::posts_tags(&agency, self.root());
        tag_set.extend(invalidation::post_item_tags(
            &agency,
            self.root(),
            &before.slug,
        ));
        if post.slug != before.slug {
            tag_set.extend(invalidation::post_item_tags(
                &agency,
                self.root(),
                &post.slug,
            ));
        }
        invalidation::invalidate(&self.cache, &tag_set).await?;

        Ok(post)
    }

    /// Delete a post.
    pub async fn delete_post(
        &self,
        session: Option<&Session>,
        post_id: &str,
    ) -> Result<(), ActionError> {
        let (post, agency) = with_post_auth(
            self.store.as_ref(),
            session,
            post_id,
            MemberRole::Manager,
        )
        .await?;

        self.store.delete_post(&post.id).await?;

        let mut tag_set = invalidation::posts_tags(&agency, self.root());
        tag_set.extend(invalidation::post_item_tags(
            &agency,
            self.root(),
            &post.slug,
        ));
        invalidation::invalidate(&self.cache, &tag_set).await?;

        Ok(())
    }
}
