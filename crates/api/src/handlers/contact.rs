//! Handlers for the `/contact` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use folio_db::models::contact::Contact;

use crate::error::AppResult;
use crate::middleware::json::JsonPayload;
use crate::query::PaginationParams;
use crate::response::{ApiResponse, ContactPage, Reply};
use crate::services::ContactReceipt;
use crate::state::AppState;

pub const CONTACT_THANKS: &str = "Thank you for your message! I will get back to you soon.";

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<Reply<ContactReceipt>> {
    let receipt = state.contacts.submit(&payload).await?;
    Ok(Reply::created(
        ApiResponse::ok(receipt).with_message(CONTACT_THANKS),
    ))
}

/// GET /api/contact
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Reply<ContactPage<Contact>>> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let page = state.contacts.list(params.page_request()).await?;
    Ok(Reply::ok(ApiResponse::ok(ContactPage {
        contacts: page.items,
        pagination: page.pagination,
    })))
}
