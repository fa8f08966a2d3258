//! Resource services: validation in front of an injected store.
//!
//! Handlers never touch a store directly; each service owns the store handle
//! it was constructed with, so tests can swap in
//! [`folio_db::store::MemoryStore`].

pub mod contact;
pub mod project;

use folio_core::pagination::Pagination;

pub use contact::{ContactReceipt, ContactService};
pub use project::ProjectService;

/// A page of records plus its pagination block.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}
