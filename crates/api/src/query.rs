//! Shared query parameter types for API handlers.
//!
//! Every field arrives as a raw string so a malformed value falls back to
//! its default instead of rejecting the request.

use folio_core::pagination::PageRequest;
use folio_core::project::ProjectFilter;
use serde::Deserialize;

/// Pagination parameters (`?page=&limit=`).
///
/// Values are clamped by [`PageRequest::new`]; non-numeric input is treated
/// as absent.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(parse_number(&self.page), parse_number(&self.limit))
    }
}

/// Query parameters for `GET /projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ProjectListParams {
    /// Exact-match filter. Empty `category`/`status` mean "any"; `featured`
    /// is true only for the literal `true`.
    pub fn filter(&self) -> ProjectFilter {
        ProjectFilter {
            category: non_empty(&self.category),
            status: non_empty(&self.status),
            featured: self.featured.as_deref().map(|v| v == "true"),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(parse_number(&self.page), parse_number(&self.limit))
    }
}

fn parse_number(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|v| v.trim().parse().ok())
}

fn non_empty(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
