//! List state for a projects view.
//!
//! Mutations never patch the local list: a successful create, update or
//! delete re-fetches the current page, so the list always shows what the
//! server holds. A failed call records a user-facing message in `error` and
//! leaves the list as it was.

use folio_core::pagination::{Pagination, DEFAULT_LIMIT};
use folio_core::project::{ProjectCategory, ProjectInput, ProjectStatus};
use folio_core::types::DbId;

use crate::api::ApiClient;
use crate::error::{ClientError, UNREACHABLE_MESSAGE};
use crate::models::{Project, ProjectQuery};

/// Active list filters. `None` means "any".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilters {
    pub category: Option<ProjectCategory>,
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
}

/// Result of a create, update or delete, ready for a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub errors: Vec<String>,
}

impl MutationOutcome {
    fn succeeded(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            errors: Vec::new(),
        }
    }

    fn failed(message: String, err: &ClientError) -> Self {
        Self {
            success: false,
            message: Some(message),
            errors: err.errors().to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectsState {
    client: ApiClient,
    pub projects: Vec<Project>,
    pub pagination: Pagination,
    pub filters: ProjectFilters,
    pub error: Option<String>,
    pub loading: bool,
}

impl ProjectsState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            projects: Vec::new(),
            pagination: Pagination {
                current: 1,
                pages: 0,
                total: 0,
                limit: DEFAULT_LIMIT,
            },
            filters: ProjectFilters::default(),
            error: None,
            loading: false,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Load `page` with the current filters and page size.
    pub async fn fetch_projects(&mut self, page: i64) {
        self.begin();

        let query = ProjectQuery {
            category: self.filters.category,
            status: self.filters.status,
            featured: self.filters.featured,
            page: Some(page),
            limit: Some(self.pagination.limit),
        };
        match self.client.list_projects(&query).await {
            Ok(page) => {
                self.projects = page.projects;
                self.pagination = page.pagination;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch projects");
                self.error = Some(describe(&err, "fetch projects"));
            }
        }

        self.loading = false;
    }

    pub async fn create_project(&mut self, input: &ProjectInput) -> MutationOutcome {
        self.begin();
        let result = self.client.create_project(input).await.map(drop);
        self.finish_mutation(result, "create project", "Project created successfully!")
            .await
    }

    pub async fn update_project(&mut self, id: DbId, input: &ProjectInput) -> MutationOutcome {
        self.begin();
        let result = self.client.update_project(id, input).await.map(drop);
        self.finish_mutation(result, "update project", "Project updated successfully!")
            .await
    }

    pub async fn delete_project(&mut self, id: DbId) -> MutationOutcome {
        self.begin();
        let result = self.client.delete_project(id).await.map(drop);
        self.finish_mutation(result, "delete project", "Project deleted successfully!")
            .await
    }

    /// Replace the filters and go back to the first page.
    pub async fn apply_filters(&mut self, filters: ProjectFilters) {
        self.filters = filters;
        self.fetch_projects(1).await;
    }

    pub async fn clear_filters(&mut self) {
        self.filters = ProjectFilters::default();
        self.fetch_projects(1).await;
    }

    /// Load `page` if it exists. Returns whether a fetch happened.
    pub async fn change_page(&mut self, page: i64) -> bool {
        if page < 1 || page > self.pagination.pages {
            return false;
        }
        self.fetch_projects(page).await;
        true
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    async fn finish_mutation(
        &mut self,
        result: Result<(), ClientError>,
        action: &str,
        success_message: &str,
    ) -> MutationOutcome {
        let outcome = match result {
            Ok(()) => {
                self.fetch_projects(self.pagination.current).await;
                MutationOutcome::succeeded(success_message)
            }
            Err(err) => {
                tracing::warn!(error = %err, action, "Project mutation failed");
                let message = describe(&err, action);
                self.error = Some(message.clone());
                MutationOutcome::failed(message, &err)
            }
        };

        self.loading = false;
        outcome
    }
}

/// User-facing text for a failed call.
fn describe(err: &ClientError, action: &str) -> String {
    match err {
        ClientError::Api { message, .. } => message.clone(),
        ClientError::Unreachable(_) => UNREACHABLE_MESSAGE.to_string(),
        ClientError::Request(_) | ClientError::MissingData(_) => {
            format!("Network error: Unable to {action}")
        }
    }
}
