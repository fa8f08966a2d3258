use std::sync::Arc;

use folio_core::error::CoreError;
use folio_core::pagination::{PageRequest, Pagination};
use folio_core::project::{validate_project, ProjectFilter, ProjectStats};
use folio_core::types::parse_id;
use folio_db::models::project::Project;
use folio_db::store::ProjectStore;
use serde_json::Value;

use super::Page;
use crate::error::AppResult;

const ENTITY: &str = "Project";

/// CRUD, filtered listing, and statistics over the `projects` collection.
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// Count then fetch one page. The two reads are not isolated from
    /// concurrent writes.
    pub async fn list(&self, filter: &ProjectFilter, page: PageRequest) -> AppResult<Page<Project>> {
        let total = self.store.count_projects(filter).await?;
        let items = self.store.list_projects(filter, page).await?;
        Ok(Page {
            items,
            pagination: Pagination::new(page, total),
        })
    }

    pub async fn get_by_id(&self, raw_id: &str) -> AppResult<Project> {
        let id = parse_id(raw_id).ok_or_else(|| CoreError::not_found(ENTITY, raw_id))?;
        let project = self
            .store
            .find_project(id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        Ok(project)
    }

    pub async fn create(&self, payload: &Value) -> AppResult<Project> {
        let input = validate_project(payload)?;
        let project = self.store.create_project(&input).await?;
        tracing::info!(project_id = project.id, title = %project.title, "Project created");
        Ok(project)
    }

    /// Validate, then replace the whole document.
    pub async fn update(&self, raw_id: &str, payload: &Value) -> AppResult<Project> {
        let input = validate_project(payload)?;
        let id = parse_id(raw_id).ok_or_else(|| CoreError::not_found(ENTITY, raw_id))?;
        let project = self
            .store
            .replace_project(id, &input)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        tracing::info!(project_id = id, "Project updated");
        Ok(project)
    }

    /// Delete and return the removed record.
    pub async fn delete(&self, raw_id: &str) -> AppResult<Project> {
        let id = parse_id(raw_id).ok_or_else(|| CoreError::not_found(ENTITY, raw_id))?;
        let project = self
            .store
            .delete_project(id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        tracing::info!(project_id = id, "Project deleted");
        Ok(project)
    }

    /// Fresh aggregates; nothing is cached.
    pub async fn stats(&self) -> AppResult<ProjectStats> {
        Ok(self.store.project_stats().await?)
    }

    /// Drop every project. Only the seed binary calls this.
    pub async fn clear(&self) -> AppResult<u64> {
        Ok(self.store.clear_projects().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use folio_db::store::MemoryStore;
    use serde_json::json;

    use crate::error::AppError;

    fn service() -> ProjectService {
        ProjectService::new(Arc::new(MemoryStore::new()))
    }

    fn payload(title: &str, category: &str, status: &str) -> Value {
        json!({
            "title": title,
            "description": "Short summary",
            "fullDescription": "A much longer summary of the project",
            "technologies": ["Rust", "axum"],
            "github": "https://github.com/someone/repo",
            "category": category,
            "status": status,
            "year": 2024
        })
    }

    #[tokio::test]
    async fn create_then_get_returns_input_plus_metadata() {
        let svc = service();
        let created = svc
            .create(&payload("Folio", "Backend", "completed"))
            .await
            .unwrap();
        let fetched = svc.get_by_id(&created.id.to_string()).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Folio");
        assert_eq!(fetched.technologies, vec!["Rust", "axum"]);
        assert_eq!(fetched.icon, "🚀");
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_store() {
        let svc = service();
        let mut bad = payload("Folio", "Backend", "completed");
        bad["year"] = json!(2019);

        assert_matches!(
            svc.create(&bad).await,
            Err(AppError::Core(CoreError::Validation(msgs))) if msgs.len() == 1
        );
        let page = svc
            .list(&ProjectFilter::default(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 0);
    }

    #[tokio::test]
    async fn twenty_five_records_make_three_pages() {
        let svc = service();
        for i in 0..25 {
            svc.create(&payload(&format!("P{i}"), "Backend", "planned"))
                .await
                .unwrap();
        }

        let page = svc
            .list(&ProjectFilter::default(), PageRequest::new(Some(3), Some(10)))
            .await
            .unwrap();
        assert_eq!(page.pagination.pages, 3);
        assert_eq!(page.pagination.current, 3);
        assert_eq!(page.items.len(), 5);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let svc = service();
        assert_matches!(
            svc.update("42", &payload("X", "Mobile", "planned")).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
        assert_matches!(
            svc.update("not-an-id", &payload("X", "Mobile", "planned")).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn update_validates_before_looking_up() {
        let svc = service();
        assert_matches!(
            svc.update("42", &json!({})).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[tokio::test]
    async fn delete_returns_snapshot_then_not_found() {
        let svc = service();
        let created = svc
            .create(&payload("Gone", "DevOps", "completed"))
            .await
            .unwrap();
        let id = created.id.to_string();

        let deleted = svc.delete(&id).await.unwrap();
        assert_eq!(deleted, created);
        assert_matches!(
            svc.get_by_id(&id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
        assert_matches!(
            svc.delete(&id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn stats_reflect_seeded_statuses() {
        let svc = service();
        for status in ["completed", "completed", "planned"] {
            svc.create(&payload("S", "Frontend", status)).await.unwrap();
        }

        let stats = svc.stats().await.unwrap();
        assert_eq!(stats.overview.total, 3);
        assert_eq!(stats.overview.completed, 2);
        assert_eq!(stats.overview.planned, 1);
        assert_eq!(stats.categories.len(), 1);
        assert_eq!(stats.categories[0].count, 3);
    }
}
