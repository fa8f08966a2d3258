use axum::{routing::get, Router};

use crate::handlers::health;
use crate::state::AppState;

/// Mount the health check. Merged at the root and under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
