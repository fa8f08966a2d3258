use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::error::CoreError;
use folio_db::StoreError;

use crate::response::ApiResponse;

/// Generic message for every 500; details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`] to produce the standard envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A malformed request (unparseable body, wrong content type).
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attached to 500 responses so the diagnostics middleware can re-render
/// the envelope with detail outside production.
#[derive(Debug, Clone)]
pub struct ErrorDiagnostic {
    pub envelope: ApiResponse<()>,
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(messages) => (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::failure("Validation error").with_errors(messages.clone()),
                    None,
                ),
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id = %id, "Record not found");
                    (
                        StatusCode::NOT_FOUND,
                        ApiResponse::failure(format!("{entity} not found")),
                        None,
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal(msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                internal(err.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure(msg.clone()),
                None,
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal(msg.clone())
            }
        };

        let mut response = (status, Json(&envelope)).into_response();
        if let Some(detail) = detail {
            response
                .extensions_mut()
                .insert(ErrorDiagnostic { envelope, detail });
        }
        response
    }
}

fn internal(detail: String) -> (StatusCode, ApiResponse<()>, Option<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiResponse::failure(INTERNAL_ERROR_MESSAGE),
        Some(detail),
    )
}
