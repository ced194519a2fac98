//! In-memory store, used in tests and local development.

use crate::agency::{Agency, AgencyMember, CreateAgencyRequest};
use crate::business::{Client, Invoice, Lead, Project, Task};
use crate::error::{StoreError, StoreResult};
use crate::post::Post;
use crate::store::PlatformStore;
use crate::user::User;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// `PlatformStore` backed by `HashMap`s behind `RwLock`s.
#[derive(Default)]
pub struct InMemoryPlatformStore {
    users: RwLock<HashMap<String, User>>,
    agencies: RwLock<HashMap<String, Agency>>,
    members: RwLock<HashMap<String, AgencyMember>>,
    posts: RwLock<HashMap<String, Post>>,
    clients: RwLock<HashMap<String, Client>>,
    projects: RwLock<HashMap<String, Project>>,
    tasks: RwLock<HashMap<String, Task>>,
    leads: RwLock<HashMap<String, Lead>>,
    invoices: RwLock<HashMap<String, Invoice>>,
}

impl InMemoryPlatformStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T, F>(mut rows: Vec<T>, created_at: F) -> Vec<T>
where
    F: Fn(&T) -> chrono::DateTime<chrono::Utc>,
{
    rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    rows
}

#[async_trait]
impl PlatformStore for InMemoryPlatformStore {
    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write();
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::conflict("email"));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn user_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_user(&self, user: &User) -> StoreResult<User> {
        let mut users = self.users.write();
        if !users.contains_key(&user.id) {
            return Err(StoreError::NotFound(format!("user {}", user.id)));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(StoreError::conflict("email"));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user.clone())
    }

    async fn create_agency(
        &self,
        request: CreateAgencyRequest,
        owner_id: &str,
    ) -> StoreResult<Agency> {
        let mut agencies = self.agencies.write();
        if agencies
            .values()
            .any(|a| a.subdomain == request.subdomain)
        {
            return Err(StoreError::conflict("subdomain"));
        }
        let mut agency = Agency::new(request.subdomain, owner_id);
        agency.name = request.name;
        agency.description = request.description;
        agencies.insert(agency.id.clone(), agency.clone());
        Ok(agency)
    }

    async fn agency_by_id(&self, id: &str) -> StoreResult<Option<Agency>> {
        Ok(self.agencies.read().get(id).cloned())
    }

    async fn agency_by_subdomain(&self, subdomain: &str) -> StoreResult<Option<Agency>> {
        Ok(self
            .agencies
            .read()
            .values()
            .find(|a| a.subdomain == subdomain)
            .cloned())
    }

    async fn agency_by_custom_domain(&self, domain: &str) -> StoreResult<Option<Agency>> {
        Ok(self
            .agencies
            .read()
            .values()
            .find(|a| a.custom_domain.as_deref() == Some(domain))
            .cloned())
    }

    async fn update_agency(&self, agency: &Agency) -> StoreResult<Agency> {
        let mut agencies = self.agencies.write();
        if !agencies.contains_key(&agency.id) {
            return Err(StoreError::NotFound(format!("agency {}", agency.id)));
        }
        if agencies
            .values()
            .any(|a| a.id != agency.id && a.subdomain == agency.subdomain)
        {
            return Err(StoreError::conflict("subdomain"));
        }
        if let Some(domain) = &agency.custom_domain {
            if agencies
                .values()
                .any(|a| a.id != agency.id && a.custom_domain.as_deref() == Some(domain))
            {
                return Err(StoreError::conflict("custom domain"));
            }
        }
        agencies.insert(agency.id.clone(), agency.clone());
        Ok(agency.clone())
    }

    async fn delete_agency(&self, id: &str) -> StoreResult<()> {
        let removed = self.agencies.write().remove(id);
        if removed.is_none() {
            return Err(StoreError::NotFound(format!("agency {}", id)));
        }
        self.members.write().retain(|_, m| m.agency_id != id);
        self.posts.write().retain(|_, p| p.agency_id != id);
        self.clients.write().retain(|_, c| c.agency_id != id);
        let project_ids: Vec<String> = {
            let mut projects = self.projects.write();
            let ids = projects
                .values()
                .filter(|p| p.agency_id == id)
                .map(|p| p.id.clone())
                .collect();
            projects.retain(|_, p| p.agency_id != id);
            ids
        };
        self.tasks
            .write()
            .retain(|_, t| !project_ids.contains(&t.project_id));
        self.leads.write().retain(|_, l| l.agency_id != id);
        self.invoices.write().retain(|_, i| i.agency_id != id);
        Ok(())
    }

    async fn add_member(&self, member: AgencyMember) -> StoreResult<AgencyMember> {
        let mut members = self.members.write();
        if members
            .values()
            .any(|m| m.agency_id == member.agency_id && m.user_id == member.user_id)
        {
            return Err(StoreError::conflict("member"));
        }
        members.insert(member.id.clone(), member.clone());
        Ok(member)
    }

    async fn member(&self, agency_id: &str, user_id: &str) -> StoreResult<Option<AgencyMember>> {
        Ok(self
            .members
            .read()
            .values()
            .find(|m| m.agency_id == agency_id && m.user_id == user_id)
            .cloned())
    }

    async fn members_by_agency(&self, agency_id: &str) -> StoreResult<Vec<AgencyMember>> {
        let rows: Vec<AgencyMember> = self
            .members
            .read()
            .values()
            .filter(|m| m.agency_id == agency_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |m| m.created_at))
    }

    async fn remove_member(&self, agency_id: &str, user_id: &str) -> StoreResult<()> {
        let mut members = self.members.write();
        let before = members.len();
        members.retain(|_, m| !(m.agency_id == agency_id && m.user_id == user_id));
        if members.len() == before {
            return Err(StoreError::NotFound(format!(
                "member {} of agency {}",
                user_id, agency_id
            )));
        }
        Ok(())
    }

    async fn create_post(&self, post: Post) -> StoreResult<Post> {
        let mut posts = self.posts.write();
        if posts
            .values()
            .any(|p| p.agency_id == post.agency_id && p.slug == post.slug)
        {
            return Err(StoreError::conflict("slug"));
        }
        posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn post_by_id(&self, id: &str) -> StoreResult<Option<Post>> {
        Ok(self.posts.read().get(id).cloned())
    }

    async fn post_by_slug(&self, agency_id: &str, slug: &str) -> StoreResult<Option<Post>> {
        Ok(self
            .posts
            .read()
            .values()
            .find(|p| p.agency_id == agency_id && p.slug == slug)
            .cloned())
    }

    async fn published_posts(&self, agency_id: &str) -> StoreResult<Vec<Post>> {
        let rows: Vec<Post> = self
            .posts
            .read()
            .values()
            .filter(|p| p.agency_id == agency_id && p.published)
            .cloned()
            .collect();
        Ok(newest_first(rows, |p| p.created_at))
    }

    async fn posts_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Post>> {
        let rows: Vec<Post> = self
            .posts
            .read()
            .values()
            .filter(|p| p.agency_id == agency_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |p| p.created_at))
    }

    async fn update_post(&self, post: &Post) -> StoreResult<Post> {
        let mut posts = self.posts.write();
        if !posts.contains_key(&post.id) {
            return Err(StoreError::NotFound(format!("post {}", post.id)));
        }
        if posts
            .values()
            .any(|p| p.id != post.id && p.agency_id == post.agency_id && p.slug == post.slug)
        {
            return Err(StoreError::conflict("slug"));
        }
        posts.insert(post.id.clone(), post.clone());
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &str) -> StoreResult<()> {
        if self.posts.write().remove(id).is_none() {
            return Err(StoreError::NotFound(format!("post {}", id)));
        }
        Ok(())
    }

    async fn create_client(&self, client: Client) -> StoreResult<Client> {
        self.clients
            .write()
            .insert(client.id.clone(), client.clone());
        Ok(client)
    }

    async fn client_by_id(&self, id: &str) -> StoreResult<Option<Client>> {
        Ok(self.clients.read().get(id).cloned())
    }

    async fn clients_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Client>> {
        let rows: Vec<Client> = self
            .clients
            .read()
            .values()
            .filter(|c| c.agency_id == agency_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |c| c.created_at))
    }

    async fn update_client(&self, client: &Client) -> StoreResult<Client> {
        let mut clients = self.clients.write();
        if !clients.contains_key(&client.id) {
            return Err(StoreError::NotFound(format!("client {}", client.id)));
        }
        clients.insert(client.id.clone(), client.clone());
        Ok(client.clone())
    }

    async fn delete_client(&self, id: &str) -> StoreResult<()> {
        if self.clients.write().remove(id).is_none() {
            return Err(StoreError::NotFound(format!("client {}", id)));
        }
        Ok(())
    }

    async fn create_project(&self, project: Project) -> StoreResult<Project> {
        self.projects
            .write()
            .insert(project.id.clone(), project.clone());
        Ok(project)
    }

    async fn project_by_id(&self, id: &str) -> StoreResult<Option<Project>> {
        Ok(self.projects.read().get(id).cloned())
    }

    async fn projects_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Project>> {
        let rows: Vec<Project> = self
            .projects
            .read()
            .values()
            .filter(|p| p.agency_id == agency_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |p| p.created_at))
    }

    async fn update_project(&self, project: &Project) -> StoreResult<Project> {
        let mut projects = self.projects.write();
        if !projects.contains_key(&project.id) {
            return Err(StoreError::NotFound(format!("project {}", project.id)));
        }
        projects.insert(project.id.clone(), project.clone());
        Ok(project.clone())
    }

    async fn delete_project(&self, id: &str) -> StoreResult<()> {
        if self.projects.write().remove(id).is_none() {
            return Err(StoreError::NotFound(format!("project {}", id)));
        }
        self.tasks.write().retain(|_, t| t.project_id != id);
        Ok(())
    }

    async fn create_task(&self, task: Task) -> StoreResult<Task> {
        self.tasks.write().insert(task.id.clone(), task.clone());
        Ok(task)
    }

    async fn task_by_id(&self, id: &str) -> StoreResult<Option<Task>> {
        Ok(self.tasks.read().get(id).cloned())
    }

    async fn tasks_by_project(&self, project_id: &str) -> StoreResult<Vec<Task>> {
        let mut rows: Vec<Task> = self
            .tasks
            .read()
            .values()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect();
        rows.sort_by_key(|t| t.order);
        Ok(rows)
    }

    async fn update_task(&self, task: &Task) -> StoreResult<Task> {
        let mut tasks = self.tasks.write();
        if !tasks.contains_key(&task.id) {
            return Err(StoreError::NotFound(format!("task {}", task.id)));
        }
        tasks.insert(task.id.clone(), task.clone());
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> StoreResult<()> {
        if self.tasks.write().remove(id).is_none() {
            return Err(StoreError::NotFound(format!("task {}", id)));
        }
        Ok(())
    }

    async fn create_lead(&self, lead: Lead) -> StoreResult<Lead> {
        self.leads.write().insert(lead.id.clone(), lead.clone());
        Ok(lead)
    }

    async fn lead_by_id(&self, id: &str) -> StoreResult<Option<Lead>> {
        Ok(self.leads.read().get(id).cloned())
    }

    async fn leads_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Lead>> {
        let rows: Vec<Lead> = self
            .leads
            .read()
            .values()
            .filter(|l| l.agency_id == agency_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |l| l.created_at))
    }

    async fn update_lead(&self, lead: &Lead) -> StoreResult<Lead> {
        let mut leads = self.leads.write();
        if !leads.contains_key(&lead.id) {
            return Err(StoreError::NotFound(format!("lead {}", lead.id)));
        }
        leads.insert(lead.id.clone(), lead.clone());
        Ok(lead.clone())
    }

    async fn delete_lead(&self, id: &str) -> StoreResult<()> {
        if self.leads.write().remove(id).is_none() {
            return Err(StoreError::NotFound(format!("lead {}", id)));
        }
        Ok(())
    }

    async fn create_invoice(&self, invoice: Invoice) -> StoreResult<Invoice> {
        self.invoices
            .write()
            .insert(invoice.id.clone(), invoice.clone());
        Ok(invoice)
    }

    async fn invoice_by_id(&self, id: &str) -> StoreResult<Option<Invoice>> {
        Ok(self.invoices.read().get(id).cloned())
    }

    async fn invoices_by_agency(&self, agency_id: &str) -> StoreResult<Vec<Invoice>> {
        let rows: Vec<Invoice> = self
            .invoices
            .read()
            .values()
            .filter(|i| i.agency_id == agency_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |i| i.created_at))
    }

    async fn update_invoice(&self, invoice: &Invoice) -> StoreResult<Invoice> {
        let mut invoices = self.invoices.write();
        if !invoices.contains_key(&invoice.id) {
            return Err(StoreError::NotFound(format!("invoice {}", invoice.id)));
        }
        invoices.insert(invoice.id.clone(), invoice.clone());
        Ok(invoice.clone())
    }

    async fn delete_invoice(&self, id: &str) -> StoreResult<()> {
        if self.invoices.write().remove(id).is_none() {
            return Err(StoreError::NotFound(format!("invoice {}", id)));
        }
        Ok(())
    }
}
