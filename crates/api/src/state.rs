use std::sync::Arc;
use std::time::Instant;

use folio_db::store::{ContactStore, ProjectStore, StoreHealth};

use crate::config::ServerConfig;
use crate::services::{ContactService, ProjectService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (read by the diagnostics middleware).
    pub config: Arc<ServerConfig>,
    pub projects: ProjectService,
    pub contacts: ContactService,
    /// Connectivity probe reported by `/health`.
    pub store_health: Arc<dyn StoreHealth>,
    /// Process start, for the health uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Wire every service to one store handle.
    pub fn new<S>(config: ServerConfig, store: Arc<S>) -> Self
    where
        S: ProjectStore + ContactStore + StoreHealth + 'static,
    {
        Self {
            config: Arc::new(config),
            projects: ProjectService::new(store.clone()),
            contacts: ContactService::new(store.clone()),
            store_health: store,
            started_at: Instant::now(),
        }
    }
}
