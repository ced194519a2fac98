//! Agency-scoped business entities: clients, projects, tasks, leads,
//! invoices.
//!
//! Conventional ownership-scoped rows. Every entity belongs to exactly one
//! agency (directly or through its client/project) and is removed when the
//! agency is deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}

/// Project and task progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

/// Priority for projects and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Lead pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

/// A client of an agency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: String,
    pub agency_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: ClientStatus,
    pub portal_access: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn new(
        agency_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            agency_id: agency_id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            status: ClientStatus::Active,
            portal_access: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_status(mut self, status: ClientStatus) -> Self {
        self.status = status;
        self
    }
}

/// A project run by an agency, optionally for a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub agency_id: String,
    pub client_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub budget: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(agency_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            agency_id: agency_id.into(),
            client_id: None,
            name: name.into(),
            description: None,
            status: ProjectStatus::NotStarted,
            priority: Priority::Medium,
            start_date: None,
            end_date: None,
            budget: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }
}

/// A task inside a project, optionally assigned to a member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub assigned_to: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    /// Position within the project's task list.
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(project_id: impl Into<String>, title: impl Into<String>, order: i32) -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            project_id: project_id.into(),
            assigned_to: None,
            title: title.into(),
            description: None,
            status: ProjectStatus::NotStarted,
            priority: Priority::Medium,
            due_date: None,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_assignee(mut self, member_id: impl Into<String>) -> Self {
        self.assigned_to = Some(member_id.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

/// A sales lead tracked by an agency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: String,
    pub agency_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: LeadStatus,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    pub fn new(agency_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            agency_id: agency_id.into(),
            name: name.into(),
            email: None,
            phone: None,
            company: None,
            status: LeadStatus::New,
            source: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }
}

/// A line item on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
}

/// An invoice issued to a client, optionally tied to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub agency_id: String,
    pub client_id: String,
    pub project_id: Option<String>,
    pub number: String,
    pub status: InvoiceStatus,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub amount: f64,
    pub tax: f64,
    pub items: Vec<InvoiceItem>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(
        agency_id: impl Into<String>,
        client_id: impl Into<String>,
        number: impl Into<String>,
        amount: f64,
        issue_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: crate::new_id(),
            agency_id: agency_id.into(),
            client_id: client_id.into(),
            project_id: None,
            number: number.into(),
            status: InvoiceStatus::Draft,
            issue_date,
            due_date,
            amount,
            tax: 0.0,
            items: Vec::new(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_items(mut self, items: Vec<InvoiceItem>) -> Self {
        self.items = items;
        self
    }
}
