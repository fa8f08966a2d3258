//! Wire shapes returned by the API.

use folio_core::contact::ContactStatus;
use folio_core::pagination::Pagination;
use folio_core::project::{ProjectCategory, ProjectStatus};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// The `{ success, data?, message?, errors?, error? }` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    /// Diagnostic detail from a non-production server.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub github: String,
    pub demo: Option<String>,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub year: i32,
    pub icon: String,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub id: DbId,
    pub submitted_at: Timestamp,
}

/// Query for `GET /api/projects`. Unset fields are left off the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Query for `GET /api/contact`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// `/health` payload. Not wrapped in an envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub timestamp: Timestamp,
    pub uptime: f64,
    pub database: DatabaseHealth,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
}
