//! Agency mutations.

use crate::guard::{require_session, with_agency_auth};
use crate::invalidation;
use crate::service::{ActionService, map_domain_error};
use crate::session::Session;
use atrium_cache::CacheStore;
use atrium_core::{
    ActionError, Agency, AgencyMember, AgencyUpdate, CreateAgencyRequest, MemberRole,
};
use atrium_domains::validate_custom_domain;
use chrono::Utc;

impl<C: CacheStore> ActionService<C> {
    /// Create an agency owned by the session principal.
    pub async fn create_agency(
        &self,
        session: Option<&Session>,
        request: CreateAgencyRequest,
    ) -> Result<Agency, ActionError> {
        let session = require_session(session)?;

        let agency = self.store.create_agency(request, &session.user_id).await?;
        self.store
            .add_member(
                AgencyMember::new(&agency.id, &session.user_id).with_role(MemberRole::Owner),
            )
            .await?;

        atrium_log::info!(target: "actions", "created agency {} ({})", agency.id, agency.subdomain);
        Ok(agency)
    }

    /// Apply a single-field update to an agency.
    ///
    /// Requires the owner or an Admin member. Domain changes run the full
    /// lifecycle: validate, persist, then reconcile the provider.
    pub async fn update_agency(
        &self,
        session: Option<&Session>,
        agency_id: &str,
        update: AgencyUpdate,
    ) -> Result<Agency, ActionError> {
        let before = with_agency_auth(
            self.store.as_ref(),
            session,
            agency_id,
            MemberRole::Admin,
        )
        .await?;

        let mut agency = before.clone();
        let mut domain_change = false;

        match update {
            AgencyUpdate::Name(name) => agency.name = Some(name),
            AgencyUpdate::Description(description) => agency.description = Some(description),
            AgencyUpdate::Font(font) => agency.font = font,
            AgencyUpdate::Message404(message) => agency.message_404 = Some(message),
            AgencyUpdate::Subdomain(subdomain) => agency.subdomain = subdomain,
            AgencyUpdate::CustomDomain(Some(domain)) => {
                let normalized =
                    validate_custom_domain(&domain, &self.config).map_err(map_domain_error)?;
                agency.custom_domain = Some(normalized);
                domain_change = true;
            }
            AgencyUpdate::CustomDomain(None) => {
                agency.custom_domain = None;
                domain_change = true;
            }
            AgencyUpdate::Logo(upload) => {
                agency.logo = Some(self.store_upload(&upload).await?);
            }
            AgencyUpdate::Image(upload) => {
                agency.image = Some(self.store_upload(&upload).await?);
                agency.image_blurhash = None;
            }
        }

        agency.updated_at = Utc::now();
        let agency = self.store.update_agency(&agency).await?;

        // Persist first; the provider reconciles afterwards and never rolls
        // the row back.
        if domain_change {
            self.domains
                .domain_changed(
                    agency.custom_domain.as_deref(),
                    before.custom_domain.as_deref(),
                )
                .await;
        }

        // Host set may have changed; cover the old hosts and the new.
        let mut tag_set = invalidation::metadata_tags(&before, self.root());
        for tag in invalidation::metadata_tags(&agency, self.root()) {
            if !tag_set.contains(&tag) {
                tag_set.push(tag);
            }
        }
        // A released host must lose its whole cached footprint, not just
        // metadata: a tenant claiming it within the TTL would otherwise serve
        // this agency's entries.
        tag_set.extend(invalidation::released_host_tags(
            &before,
            &agency,
            self.root(),
        ));
        invalidation::invalidate(&self.cache, &tag_set).await?;

        Ok(agency)
    }

    /// Delete an agency and everything it owns. Owner only.
    pub async fn delete_agency(
        &self,
        session: Option<&Session>,
        agency_id: &str,
    ) -> Result<(), ActionError> {
        let agency = with_agency_auth(
            self.store.as_ref(),
            session,
            agency_id,
            MemberRole::Owner,
        )
        .await?;

        self.store.delete_agency(&agency.id).await?;

        self.domains
            .domain_changed(None, agency.custom_domain.as_deref())
            .await;

        // Every entry cached under the agency's hosts carries the bare host
        // tag; dropping those clears the whole public surface, so a tenant
        // later claiming a freed host starts clean.
        let tag_set = invalidation::host_tags(&agency, self.root());
        invalidation::invalidate(&self.cache, &tag_set).await?;

        atrium_log::info!(target: "actions", "deleted agency {}", agency.id);
        Ok(())
    }
}
