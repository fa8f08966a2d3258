//! PostgreSQL-backed store.

use async_trait::async_trait;
use folio_core::contact::ContactInput;
use folio_core::pagination::PageRequest;
use folio_core::project::{ProjectFilter, ProjectInput, ProjectStats};
use folio_core::types::DbId;

use super::{ContactStore, ProjectStore, StoreHealth, StoreStatus};
use crate::error::StoreResult;
use crate::models::contact::Contact;
use crate::models::project::Project;
use crate::repositories::{ContactRepo, ProjectRepo};
use crate::DbPool;

/// Store handle over a shared connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Stop handing out connections and wait for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn list_projects(
        &self,
        filter: &ProjectFilter,
        page: PageRequest,
    ) -> StoreResult<Vec<Project>> {
        ProjectRepo::list(&self.pool, filter, page).await
    }

    async fn count_projects(&self, filter: &ProjectFilter) -> StoreResult<i64> {
        ProjectRepo::count(&self.pool, filter).await
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        ProjectRepo::find_by_id(&self.pool, id).await
    }

    async fn create_project(&self, input: &ProjectInput) -> StoreResult<Project> {
        ProjectRepo::create(&self.pool, input).await
    }

    async fn replace_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> StoreResult<Option<Project>> {
        ProjectRepo::replace(&self.pool, id, input).await
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        ProjectRepo::delete(&self.pool, id).await
    }

    async fn project_stats(&self) -> StoreResult<ProjectStats> {
        ProjectRepo::stats(&self.pool).await
    }

    async fn clear_projects(&self) -> StoreResult<u64> {
        ProjectRepo::delete_all(&self.pool).await
    }
}

#[async_trait]
impl ContactStore for PgStore {
    async fn create_contact(&self, input: &ContactInput) -> StoreResult<Contact> {
        ContactRepo::create(&self.pool, input).await
    }

    async fn list_contacts(&self, page: PageRequest) -> StoreResult<Vec<Contact>> {
        ContactRepo::list(&self.pool, page).await
    }

    async fn count_contacts(&self) -> StoreResult<i64> {
        ContactRepo::count(&self.pool).await
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn status(&self) -> StoreStatus {
        if self.pool.is_closed() {
            // Connections still checked out are being drained.
            return if self.pool.size() > 0 {
                StoreStatus::Disconnecting
            } else {
                StoreStatus::Disconnected
            };
        }

        probe_status(crate::health_check(&self.pool).await)
    }
}

/// Map a health probe outcome on an open pool to a status.
///
/// An acquire timeout means the pool is still retrying its connection
/// attempts, which reads as `Connecting`; any other failure is `Disconnected`.
fn probe_status(probe: Result<(), sqlx::Error>) -> StoreStatus {
    match probe {
        Ok(()) => StoreStatus::Connected,
        Err(sqlx::Error::PoolTimedOut) => {
            tracing::warn!("Database health probe timed out waiting for a connection");
            StoreStatus::Connecting
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database health probe failed");
            StoreStatus::Disconnected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_probe_is_connected() {
        assert_eq!(probe_status(Ok(())), StoreStatus::Connected);
    }

    #[test]
    fn acquire_timeout_is_connecting() {
        assert_eq!(probe_status(Err(sqlx::Error::PoolTimedOut)), StoreStatus::Connecting);
    }

    #[test]
    fn other_failures_are_disconnected() {
        assert_eq!(probe_status(Err(sqlx::Error::PoolClosed)), StoreStatus::Disconnected);
        assert_eq!(probe_status(Err(sqlx::Error::RowNotFound)), StoreStatus::Disconnected);
    }
}
