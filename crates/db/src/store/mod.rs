//! Store seams injected into the resource services.

use async_trait::async_trait;
use folio_core::contact::ContactInput;
use folio_core::pagination::PageRequest;
use folio_core::project::{ProjectFilter, ProjectInput, ProjectStats};
use folio_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::models::contact::Contact;
use crate::models::project::Project;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Connectivity of the backing store as reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Disconnected,
    Connected,
    Connecting,
    Disconnecting,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connected => "connected",
            Self::Connecting => "connecting",
            Self::Disconnecting => "disconnecting",
        }
    }
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence for the `projects` collection.
///
/// Each write is atomic for its single record; nothing spans records.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// One page of projects matching `filter`, ordered featured first, then
    /// newest `created_at`, then highest id.
    async fn list_projects(
        &self,
        filter: &ProjectFilter,
        page: PageRequest,
    ) -> StoreResult<Vec<Project>>;

    async fn count_projects(&self, filter: &ProjectFilter) -> StoreResult<i64>;

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    async fn create_project(&self, input: &ProjectInput) -> StoreResult<Project>;

    /// Full-document replace. `None` when no record has `id`.
    async fn replace_project(&self, id: DbId, input: &ProjectInput)
        -> StoreResult<Option<Project>>;

    /// Remove a record, returning its last state.
    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    async fn project_stats(&self) -> StoreResult<ProjectStats>;

    /// Remove every project. Used by seeding.
    async fn clear_projects(&self) -> StoreResult<u64>;
}

/// Persistence for the append-only `contacts` collection.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn create_contact(&self, input: &ContactInput) -> StoreResult<Contact>;

    /// One page of submissions, newest first.
    async fn list_contacts(&self, page: PageRequest) -> StoreResult<Vec<Contact>>;

    async fn count_contacts(&self) -> StoreResult<i64>;
}

/// Connectivity probe for the health endpoint.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn status(&self) -> StoreStatus;
}
