use axum::extract::State;
use axum::Json;
use chrono::Utc;
use folio_core::types::Timestamp;
use folio_db::store::StoreStatus;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `OK` while the process can answer.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: Timestamp,
    /// Seconds since the server state was built.
    pub uptime: f64,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub status: StoreStatus,
}

/// GET /health and GET /api/health
///
/// Reports store connectivity without failing when the store is down.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.store_health.status().await;
    if status != StoreStatus::Connected {
        tracing::warn!(%status, "Store is not connected");
    }

    Json(HealthResponse {
        status: "OK",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        database: DatabaseHealth { status },
    })
}
