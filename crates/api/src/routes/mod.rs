pub mod contact;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list (filter + paginate), create
/// /projects/stats           status and category counts
/// /projects/{id}            get, replace, delete
///
/// /contact                  submit, list (unauthenticated)
///
/// /health                   service and store status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/contact", contact::router())
        .merge(health::router())
}
