//! Adds diagnostic detail to 500 envelopes outside production.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ErrorDiagnostic;
use crate::state::AppState;

/// Re-render a failed response's envelope with its `error` field filled.
///
/// Responses without an [`ErrorDiagnostic`] extension, and every response
/// in production, pass through untouched.
pub async fn expose_error_details(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.exposes_error_details() {
        return response;
    }
    let Some(diagnostic) = response.extensions().get::<ErrorDiagnostic>().cloned() else {
        return response;
    };

    let mut envelope = diagnostic.envelope;
    envelope.error = Some(diagnostic.detail);
    let bytes = match serde_json::to_vec(&envelope) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Could not render diagnostic envelope");
            return response;
        }
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
