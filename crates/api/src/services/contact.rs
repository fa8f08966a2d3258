use std::sync::Arc;

use folio_core::contact::validate_contact;
use folio_core::pagination::{PageRequest, Pagination};
use folio_core::types::{DbId, Timestamp};
use folio_db::models::contact::Contact;
use folio_db::store::ContactStore;
use serde::Serialize;
use serde_json::Value;

use super::Page;
use crate::error::AppResult;

/// What a submitter gets back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub id: DbId,
    pub submitted_at: Timestamp,
}

/// Append-only access to the `contacts` collection.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub async fn submit(&self, payload: &Value) -> AppResult<ContactReceipt> {
        let input = validate_contact(payload)?;
        let contact = self.store.create_contact(&input).await?;
        tracing::info!(contact_id = contact.id, "Contact submission saved");
        Ok(ContactReceipt {
            id: contact.id,
            submitted_at: contact.created_at,
        })
    }

    /// Newest first. Open to any caller: there is no access control here.
    pub async fn list(&self, page: PageRequest) -> AppResult<Page<Contact>> {
        let total = self.store.count_contacts().await?;
        let items = self.store.list_contacts(page).await?;
        Ok(Page {
            items,
            pagination: Pagination::new(page, total),
        })
    }
}
