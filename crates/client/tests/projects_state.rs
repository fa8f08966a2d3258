//! `ProjectsState` against a live router.

mod common;

use common::{project_input, spawn_server, unreachable_client};
use folio_client::{ProjectFilters, ProjectsState};
use folio_core::project::{ProjectCategory, ProjectStatus};
use folio_db::store::StoreStatus;

async fn seeded_state(count: usize) -> (std::sync::Arc<folio_db::store::MemoryStore>, ProjectsState) {
    let (store, client) = spawn_server().await;
    for i in 0..count {
        let category = if i % 2 == 0 {
            ProjectCategory::Frontend
        } else {
            ProjectCategory::Backend
        };
        client
            .create_project(&project_input(&format!("P{i}"), category, ProjectStatus::Planned))
            .await
            .unwrap();
    }
    (store, ProjectsState::new(client))
}

#[tokio::test]
async fn fetch_fills_list_and_pagination() {
    let (_, mut state) = seeded_state(12).await;
    state.fetch_projects(1).await;

    assert_eq!(state.error, None);
    assert!(!state.loading);
    assert_eq!(state.projects.len(), 10);
    assert_eq!(state.pagination.total, 12);
    assert_eq!(state.pagination.pages, 2);
}

#[tokio::test]
async fn create_refetches_current_page() {
    let (_, mut state) = seeded_state(0).await;
    state.fetch_projects(1).await;
    assert!(state.projects.is_empty());

    let outcome = state
        .create_project(&project_input("Fresh", ProjectCategory::Mobile, ProjectStatus::Completed))
        .await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Project created successfully!"));
    assert_eq!(state.projects.len(), 1);
    assert_eq!(state.projects[0].title, "Fresh");
    assert_eq!(state.pagination.total, 1);
}

#[tokio::test]
async fn update_and_delete_refetch() {
    let (_, mut state) = seeded_state(1).await;
    state.fetch_projects(1).await;
    let id = state.projects[0].id;

    let outcome = state
        .update_project(id, &project_input("Edited", ProjectCategory::DevOps, ProjectStatus::Completed))
        .await;
    assert!(outcome.success);
    assert_eq!(state.projects[0].title, "Edited");

    let outcome = state.delete_project(id).await;
    assert!(outcome.success);
    assert!(state.projects.is_empty());
    assert_eq!(state.pagination.total, 0);
}

#[tokio::test]
async fn failed_mutation_keeps_list_and_reports_errors() {
    let (_, mut state) = seeded_state(3).await;
    state.fetch_projects(1).await;
    let before = state.projects.clone();

    let mut invalid = project_input("Bad", ProjectCategory::Frontend, ProjectStatus::Planned);
    invalid.github = "https://example.com/repo".to_string();
    let outcome = state.create_project(&invalid).await;

    assert!(!outcome.success);
    assert_eq!(outcome.errors, vec!["Please provide a valid GitHub or GitLab URL".to_string()]);
    assert_eq!(state.error.as_deref(), Some("Validation error"));
    assert_eq!(state.projects, before);
}

#[tokio::test]
async fn failed_fetch_keeps_prior_list() {
    let (store, mut state) = seeded_state(3).await;
    state.fetch_projects(1).await;
    let before = state.projects.clone();

    store.set_status(StoreStatus::Disconnected).await;
    state.fetch_projects(1).await;

    assert_eq!(state.error.as_deref(), Some("Internal server error"));
    assert_eq!(state.projects, before);
    assert_eq!(state.pagination.total, 3);
}

#[tokio::test]
async fn unreachable_server_sets_backend_message() {
    let mut state = ProjectsState::new(unreachable_client().await);
    state.fetch_projects(1).await;

    assert!(state
        .error
        .as_deref()
        .unwrap()
        .starts_with("Backend server is not running"));
    assert!(state.projects.is_empty());
}

#[tokio::test]
async fn filters_reset_to_first_page() {
    let (_, mut state) = seeded_state(25).await;
    state.fetch_projects(1).await;
    assert!(state.change_page(3).await);
    assert_eq!(state.pagination.current, 3);

    state
        .apply_filters(ProjectFilters {
            category: Some(ProjectCategory::Frontend),
            ..Default::default()
        })
        .await;
    assert_eq!(state.pagination.current, 1);
    assert_eq!(state.pagination.total, 13);
    assert!(state
        .projects
        .iter()
        .all(|p| p.category == ProjectCategory::Frontend));

    state.change_page(2).await;
    state.clear_filters().await;
    assert_eq!(state.filters, ProjectFilters::default());
    assert_eq!(state.pagination.current, 1);
    assert_eq!(state.pagination.total, 25);
}

#[tokio::test]
async fn change_page_ignores_out_of_range_pages() {
    let (_, mut state) = seeded_state(5).await;
    state.fetch_projects(1).await;

    assert!(!state.change_page(0).await);
    assert!(!state.change_page(2).await);
    assert_eq!(state.pagination.current, 1);
}
