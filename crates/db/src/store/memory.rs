//! In-process store for tests and local experiments.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use folio_core::contact::ContactInput;
use folio_core::pagination::PageRequest;
use folio_core::project::{ProjectFilter, ProjectInput, ProjectStats};
use folio_core::types::DbId;
use tokio::sync::RwLock;

use super::{ContactStore, ProjectStore, StoreHealth, StoreStatus};
use crate::error::{StoreError, StoreResult};
use crate::models::contact::Contact;
use crate::models::project::Project;

#[derive(Debug)]
struct State {
    status: StoreStatus,
    next_project_id: DbId,
    next_contact_id: DbId,
    projects: BTreeMap<DbId, Project>,
    contacts: BTreeMap<DbId, Contact>,
}

/// A store holding both collections behind one lock.
///
/// Every operation fails with [`StoreError::Unavailable`] unless the status
/// is [`StoreStatus::Connected`], which lets tests exercise outage paths.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                status: StoreStatus::Connected,
                next_project_id: 1,
                next_contact_id: 1,
                projects: BTreeMap::new(),
                contacts: BTreeMap::new(),
            }),
        }
    }

    /// Force the reported connectivity.
    pub async fn set_status(&self, status: StoreStatus) {
        self.state.write().await.status = status;
    }
}

fn ensure_connected(state: &State) -> StoreResult<()> {
    if state.status == StoreStatus::Connected {
        Ok(())
    } else {
        Err(StoreError::Unavailable(format!(
            "memory store is {}",
            state.status
        )))
    }
}

fn listing_order(a: &Project, b: &Project) -> std::cmp::Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

fn page_of<T: Clone>(items: Vec<&T>, page: PageRequest) -> Vec<T> {
    items
        .into_iter()
        .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(page.limit).unwrap_or(0))
        .cloned()
        .collect()
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list_projects(
        &self,
        filter: &ProjectFilter,
        page: PageRequest,
    ) -> StoreResult<Vec<Project>> {
        let state = self.state.read().await;
        ensure_connected(&state)?;

        let mut matching: Vec<&Project> = state
            .projects
            .values()
            .filter(|p| filter.matches(p.category, p.status, p.featured))
            .collect();
        matching.sort_by(|a, b| listing_order(a, b));
        Ok(page_of(matching, page))
    }

    async fn count_projects(&self, filter: &ProjectFilter) -> StoreResult<i64> {
        let state = self.state.read().await;
        ensure_connected(&state)?;

        let count = state
            .projects
            .values()
            .filter(|p| filter.matches(p.category, p.status, p.featured))
            .count();
        Ok(count as i64)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let state = self.state.read().await;
        ensure_connected(&state)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn create_project(&self, input: &ProjectInput) -> StoreResult<Project> {
        let mut state = self.state.write().await;
        ensure_connected(&state)?;

        let id = state.next_project_id;
        state.next_project_id += 1;
        let project = Project::from_input(id, input, Utc::now());
        state.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn replace_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> StoreResult<Option<Project>> {
        let mut state = self.state.write().await;
        ensure_connected(&state)?;

        Ok(state.projects.get_mut(&id).map(|project| {
            project.replace_with(input, Utc::now());
            project.clone()
        }))
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let mut state = self.state.write().await;
        ensure_connected(&state)?;
        Ok(state.projects.remove(&id))
    }

    async fn project_stats(&self) -> StoreResult<ProjectStats> {
        let state = self.state.read().await;
        ensure_connected(&state)?;
        Ok(ProjectStats::tally(
            state
                .projects
                .values()
                .map(|p| (p.category, p.status, p.featured)),
        ))
    }

    async fn clear_projects(&self) -> StoreResult<u64> {
        let mut state = self.state.write().await;
        ensure_connected(&state)?;
        let removed = state.projects.len() as u64;
        state.projects.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn create_contact(&self, input: &ContactInput) -> StoreResult<Contact> {
        let mut state = self.state.write().await;
        ensure_connected(&state)?;

        let id = state.next_contact_id;
        state.next_contact_id += 1;
        let contact = Contact::from_input(id, input, Utc::now());
        state.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn list_contacts(&self, page: PageRequest) -> StoreResult<Vec<Contact>> {
        let state = self.state.read().await;
        ensure_connected(&state)?;

        let mut contacts: Vec<&Contact> = state.contacts.values().collect();
        contacts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(page_of(contacts, page))
    }

    async fn count_contacts(&self) -> StoreResult<i64> {
        let state = self.state.read().await;
        ensure_connected(&state)?;
        Ok(state.contacts.len() as i64)
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn status(&self) -> StoreStatus {
        self.state.read().await.status
    }
}
