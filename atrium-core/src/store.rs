//! Persistence trait.
//!
//! Implement this with your database. Every query is scoped by agency id;
//! implementations enforce the unique constraints (subdomain, custom domain,
//! slug-within-agency, email) and cascade deletes from the agency downward.

use crate::agency::{Agency, AgencyMember, CreateAgencyRequest};
use crate::business::{Client, Invoice, Lead, Project, Task};
use crate::error::StoreResult;
use crate::post::Post;
use crate::user::User;
use async_trait::async_trait;

/// Platform persistence.
#[async_trait]
pub trait PlatformStore: Send + Sync {
    // ===== Users =====

    /// Insert a user. Fails with a `Conflict` on a duplicate email.
    async fn create_user(&self, user: User) -> StoreResult<User>;

    /// Find user by id.
    async fn user_by_id(&self, id: &str) -> StoreResult<Option<User>>;

    /// Find user by email.
    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Full-row user update. Fails with a `Conflict` on a duplicate email.
    async fn update_user(&self, user: &User) -> StoreResult<User>;

    // ===== Agencies =====

    /// Insert an agency. Fails with a `Conflict` on a duplicate subdomain.
    async fn create_agency(&self, request: CreateAgencyRequest, owner_id: &str)
        -> StoreResult<Agency>;

    /// Find agency by id.
    async fn agency_by_id(&self, id: &str) -> StoreResult<Option<Agency>>;

    /// Find agency by exact subdomain label.
    async fn agency_by_subdomain(&self, subdomain: &str) -> StoreResult<Option<Agency>>;

    /// Find agency by exact custom domain.
    async fn agency_by_custom_domain(&self, domain: &str) -> StoreResult<Option<Agency>>;

    /// Full-row agency update. Fails with a `Conflict` on a duplicate
    /// subdomain or custom domain.
    async fn update_agency(&self, agency: &Agency) -> StoreResult<Agency>;

    /// Delete an agency and everything it owns.
    async fn delete_agency(&self, id: &str) -> StoreResult<()>;

    // ===== Members =====

    /// Insert a membership. The (agency, user) pair is unique.
    async fn add_member(&self, member: AgencyMember) -> StoreResult<AgencyMember>;

    /// Find the membership linking a user to an agency.
    async fn member(&self, agency_id: &str, user_id: &str) -> StoreResult<Option<AgencyMember>>;

    /// All members of an agency.
    async fn members_by_agency(&self, agency_id: &str) -> StoreResult<Vec<AgencyMember>>;

    /// Remove a membership.
    async fn remove_member(&self, agency_id: &str, user_id: &str) -> StoreResult<()>;

    // ===== Posts =====

    /// Insert a post. Fails with a `Conflict` on a duplicate slug within
    /// the agency.
    async fn create_post(&self, post: Post) -> StoreResult<Post>;

    /// Find post by id.
    async fn post_by_id(&self, id: &str) -> StoreResult<Option<Post>>;

    /// Find post by slug within an agency. Slugs are not globally unique;
    /// callers must always pass a resolved agency id.
    async fn post_by_slug(&self, agency_id: &str, slug: &str) -> StoreResult<Option<Post>>;

    /// Published posts of an agency, newest first.
    async fn published_posts(&self, agency_id: &str) -> StoreResult<Vec<Post>>;

    /// All posts of an agency, newest first.
    async fn posts_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Post>>;

    /// Full-row post update. Fails with a `Conflict` on a duplicate slug
    /// within the agency.
    async fn update_post(&self, post: &Post) -> StoreResult<Post>;

    /// Delete a post.
    async fn delete_post(&self, id: &str) -> StoreResult<()>;

    // ===== Clients =====

    async fn create_client(&self, client: Client) -> StoreResult<Client>;
    async fn client_by_id(&self, id: &str) -> StoreResult<Option<Client>>;
    async fn clients_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Client>>;
    async fn update_client(&self, client: &Client) -> StoreResult<Client>;
    async fn delete_client(&self, id: &str) -> StoreResult<()>;

    // ===== Projects =====

    async fn create_project(&self, project: Project) -> StoreResult<Project>;
    async fn project_by_id(&self, id: &str) -> StoreResult<Option<Project>>;
    async fn projects_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Project>>;
    async fn update_project(&self, project: &Project) -> StoreResult<Project>;
    async fn delete_project(&self, id: &str) -> StoreResult<()>;

    // ===== Tasks =====

    async fn create_task(&self, task: Task) -> StoreResult<Task>;
    async fn task_by_id(&self, id: &str) -> StoreResult<Option<Task>>;
    async fn tasks_by_project(&self, project_id: &str) -> StoreResult<Vec<Task>>;
    async fn update_task(&self, task: &Task) -> StoreResult<Task>;
    async fn delete_task(&self, id: &str) -> StoreResult<()>;

    // ===== Leads =====

    async fn create_lead(&self, lead: Lead) -> StoreResult<Lead>;
    async fn lead_by_id(&self, id: &str) -> StoreResult<Option<Lead>>;
    async fn leads_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Lead>>;
    async fn update_lead(&self, lead: &Lead) -> StoreResult<Lead>;
    async fn delete_lead(&self, id: &str) -> StoreResult<()>;

    // ===== Invoices =====

    async fn create_invoice(&self, invoice: Invoice) -> StoreResult<Invoice>;
    async fn invoice_by_id(&self, id: &str) -> StoreResult<Option<Invoice>>;
    async fn invoices_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Invoice>>;
    async fn update_invoice(&self, invoice: &Invoice) -> StoreResult<Invoice>;
    async fn delete_invoice(&self, id: &str) -> StoreResult<()>;
}
