//! Typed client for the portfolio API plus the list state a UI binds to.
//!
//! [`ApiClient`] mirrors the HTTP routes one-to-one. [`ProjectsState`]
//! holds the project list, its pagination and filters, and re-fetches the
//! current page after every successful mutation.

pub mod api;
pub mod error;
pub mod models;
pub mod state;

pub use api::ApiClient;
pub use error::{ClientError, ClientResult};
pub use state::{MutationOutcome, ProjectFilters, ProjectsState};
