//! Project entity model.

use folio_core::project::{ProjectCategory, ProjectInput, ProjectStatus};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::StoreError;

/// A stored portfolio project.
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

impl Project {
    /// Build a record from a validated payload.
    pub fn from_input(id: DbId, input: &ProjectInput, created_at: Timestamp) -> Self {
        Self {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            full_description: input.full_description.clone(),
            technologies: input.technologies.clone(),
            github: input.github.clone(),
            demo: input.demo.clone(),
            category: input.category,
            status: input.status,
            year: input.year,
            icon: input.icon.clone(),
            featured: input.featured,
            created_at,
            updated_at: created_at,
        }
    }

    /// Replace every user-editable field, keeping id and creation time.
    pub fn replace_with(&mut self, input: &ProjectInput, updated_at: Timestamp) {
        let created_at = self.created_at;
        *self = Self::from_input(self.id, input, created_at);
        self.updated_at = updated_at;
    }
}

/// A raw row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub github: String,
    pub demo: Option<String>,
    pub category: String,
    pub status: String,
    pub year: i32,
    pub icon: String,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ProjectRow> for Project {
    type Error = StoreError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let category = ProjectCategory::from_str(&row.category).ok_or_else(|| {
            StoreError::InvalidRecord(format!(
                "project {} has unknown category '{}'",
                row.id, row.category
            ))
        })?;
        let status = ProjectStatus::from_str(&row.status).ok_or_else(|| {
            StoreError::InvalidRecord(format!(
                "project {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;

        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description,
            full_description: row.full_description,
            technologies: row.technologies,
            github: row.github,
            demo: row.demo,
            category,
            status,
            year: row.year,
            icon: row.icon,
            featured: row.featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
