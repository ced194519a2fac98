//! Business-entity mutations: clients, projects, tasks, leads, invoices.
//!
//! Dashboard-scope CRUD guarded at the Manager threshold. Only projects are
//! served on the public path, so only project-affecting mutations fan out to
//! the cache.

use crate::guard::with_agency_auth;
use crate::invalidation;
use crate::service::ActionService;
use crate::session::Session;
use atrium_cache::CacheStore;
use atrium_core::{
    ActionError, Agency, Client, Invoice, Lead, MemberRole, Project, Task,
};
use chrono::Utc;

impl<C: CacheStore> ActionService<C> {
    async fn guard_agency(
        &self,
        session: Option<&Session>,
        agency_id: &str,
    ) -> Result<Agency, ActionError> {
        with_agency_auth(self.store.as_ref(), session, agency_id, MemberRole::Manager).await
    }

    async fn invalidate_project(
        &self,
        agency: &Agency,
        project_id: &str,
    ) -> Result<(), ActionError> {
        let mut tag_set = invalidation::projects_tags(agency, self.root());
        tag_set.extend(invalidation::project_item_tags(
            agency,
            self.root(),
            project_id,
        ));
        invalidation::invalidate(&self.cache, &tag_set).await
    }

    // ===== Clients =====

    pub async fn create_client(
        &self,
        session: Option<&Session>,
        client: Client,
    ) -> Result<Client, ActionError> {
        self.guard_agency(session, &client.agency_id).await?;
        Ok(self.store.create_client(client).await?)
    }

    pub async fn update_client(
        &self,
        session: Option<&Session>,
        client: Client,
    ) -> Result<Client, ActionError> {
        let existing = self
            .store
            .client_by_id(&client.id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("client {}", client.id)))?;
        self.guard_agency(session, &existing.agency_id).await?;

        let client = Client {
            agency_id: existing.agency_id,
            updated_at: Utc::now(),
            ..client
        };
        Ok(self.store.update_client(&client).await?)
    }

    pub async fn delete_client(
        &self,
        session: Option<&Session>,
        client_id: &str,
    ) -> Result<(), ActionError> {
        let client = self
            .store
            .client_by_id(client_id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("client {}", client_id)))?;
        self.guard_agency(session, &client.agency_id).await?;
        Ok(self.store.delete_client(client_id).await?)
    }

    // ===== Projects =====

    pub async fn create_project(
        &self,
        session: Option<&Session>,
        project: Project,
    ) -> Result<Project, ActionError> {
        let agency = self.guard_agency(session, &project.agency_id).await?;
        let project = self.store.create_project(project).await?;
        self.invalidate_project(&agency, &project.id).await?;
        Ok(project)
    }

    pub async fn update_project(
        &self,
        session: Option<&Session>,
        project: Project,
    ) -> Result<Project, ActionError> {
        let existing = self
            .store
            .project_by_id(&project.id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("project {}", project.id)))?;
        let agency = self.guard_agency(session, &existing.agency_id).await?;

        let project = Project {
            agency_id: existing.agency_id,
            updated_at: Utc::now(),
            ..project
        };
        let project = self.store.update_project(&project).await?;
        self.invalidate_project(&agency, &project.id).await?;
        Ok(project)
    }

    pub async fn delete_project(
        &self,
        session: Option<&Session>,
        project_id: &str,
    ) -> Result<(), ActionError> {
        let project = self
            .store
            .project_by_id(project_id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("project {}", project_id)))?;
        let agency = self.guard_agency(session, &project.agency_id).await?;

        self.store.delete_project(project_id).await?;
        self.invalidate_project(&agency, project_id).await?;
        Ok(())
    }

    // ===== Tasks =====

    async fn task_agency(
        &self,
        session: Option<&Session>,
        project_id: &str,
    ) -> Result<(Agency, Project), ActionError> {
        // Tasks authorize through their project's agency.
        let project = self
            .store
            .project_by_id(project_id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("project {}", project_id)))?;
        let agency = self.guard_agency(session, &project.agency_id).await?;
        Ok((agency, project))
    }

    pub async fn create_task(
        &self,
        session: Option<&Session>,
        task: Task,
    ) -> Result<Task, ActionError> {
        let (agency, project) = self.task_agency(session, &task.project_id).await?;
        let task = self.store.create_task(task).await?;
        self.invalidate_project(&agency, &project.id).await?;
        Ok(task)
    }

    pub async fn update_task(
        &self,
        session: Option<&Session>,
        task: Task,
    ) -> Result<Task, ActionError> {
        let existing = self
            .store
            .task_by_id(&task.id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("task {}", task.id)))?;
        let (agency, project) = self.task_agency(session, &existing.project_id).await?;

        let task = Task {
            project_id: existing.project_id,
            updated_at: Utc::now(),
            ..task
        };
        let task = self.store.update_task(&task).await?;
        self.invalidate_project(&agency, &project.id).await?;
        Ok(task)
    }

    pub async fn delete_task(
        &self,
        session: Option<&Session>,
        task_id: &str,
    ) -> Result<(), ActionError> {
        let task = self
            .store
            .task_by_id(task_id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("task {}", task_id)))?;
        let (agency, project) = self.task_agency(session, &task.project_id).await?;

        self.store.delete_task(task_id).await?;
        self.invalidate_project(&agency, &project.id).await?;
        Ok(())
    }

    // ===== Leads =====

    pub async fn create_lead(
        &self,
        session: Option<&Session>,
        lead: Lead,
    ) -> Result<Lead, ActionError> {
        self.guard_agency(session, &lead.agency_id).await?;
        Ok(self.store.create_lead(lead).await?)
    }

    pub async fn update_lead(
        &self,
        session: Option<&Session>,
        lead: Lead,
    ) -> Result<Lead, ActionError> {
        let existing = self
            .store
            .lead_by_id(&lead.id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("lead {}", lead.id)))?;
        self.guard_agency(session, &existing.agency_id).await?;

        let lead = Lead {
            agency_id: existing.agency_id,
            updated_at: Utc::now(),
            ..lead
        };
        Ok(self.store.update_lead(&lead).await?)
    }

    pub async fn delete_lead(
        &self,
        session: Option<&Session>,
        lead_id: &str,
    ) -> Result<(), ActionError> {
        let lead = self
            .store
            .lead_by_id(lead_id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("lead {}", lead_id)))?;
        self.guard_agency(session, &lead.agency_id).await?;
        Ok(self.store.delete_lead(lead_id).await?)
    }

    // ===== Invoices =====

    pub async fn create_invoice(
        &self,
        session: Option<&Session>,
        invoice: Invoice,
    ) -> Result<Invoice, ActionError> {
        self.guard_agency(session, &invoice.agency_id).await?;
        Ok(self.store.create_invoice(invoice).await?)
    }

    pub async fn update_invoice(
        &self,
        session: Option<&Session>,
        invoice: Invoice,
    ) -> Result<Invoice, ActionError> {
        let existing = self
            .store
            .invoice_by_id(&invoice.id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("invoice {}", invoice.id)))?;
        self.guard_agency(session, &existing.agency_id).await?;

        let invoice = Invoice {
            agency_id: existing.agency_id,
            updated_at: Utc::now(),
            ..invoice
        };
        Ok(self.store.update_invoice(&invoice).await?)
    }

    pub async fn delete_invoice(
        &self,
        session: Option<&Session>,
        invoice_id: &str,
    ) -> Result<(), ActionError> {
        let invoice = self
            .store
            .invoice_by_id(invoice_id)
            .await?
            .ok_or_else(|| ActionError::NotFound(format!("invoice {}", invoice_id)))?;
        self.guard_agency(session, &invoice.agency_id).await?;
        Ok(self.store.delete_invoice(invoice_id).await?)
    }
}
