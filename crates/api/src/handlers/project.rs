//! Handlers for the `/projects` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use folio_core::project::ProjectStats;
use folio_db::models::project::Project;

use crate::error::AppResult;
use crate::middleware::json::JsonPayload;
use crate::query::ProjectListParams;
use crate::response::{ApiResponse, ProjectPage, Reply};
use crate::state::AppState;

/// GET /api/projects
///
/// A query string that cannot be decoded at all is treated as empty.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ProjectListParams>, QueryRejection>,
) -> AppResult<Reply<ProjectPage<Project>>> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let page = state
        .projects
        .list(&params.filter(), params.page_request())
        .await?;
    Ok(Reply::ok(ApiResponse::ok(ProjectPage {
        projects: page.items,
        pagination: page.pagination,
    })))
}

/// GET /api/projects/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Reply<ProjectStats>> {
    let stats = state.projects.stats().await?;
    Ok(Reply::ok(ApiResponse::ok(stats)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Reply<Project>> {
    let project = state.projects.get_by_id(&id).await?;
    Ok(Reply::ok(ApiResponse::ok(project)))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<Reply<Project>> {
    let project = state.projects.create(&payload).await?;
    Ok(Reply::created(
        ApiResponse::ok(project).with_message("Project created successfully"),
    ))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<Reply<Project>> {
    let project = state.projects.update(&id, &payload).await?;
    Ok(Reply::ok(
        ApiResponse::ok(project).with_message("Project updated successfully"),
    ))
}

/// DELETE /api/projects/{id}
///
/// Answers with the removed record.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Reply<Project>> {
    let project = state.projects.delete(&id).await?;
    Ok(Reply::ok(
        ApiResponse::ok(project).with_message("Project deleted successfully"),
    ))
}
