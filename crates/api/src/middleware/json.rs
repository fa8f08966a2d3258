//! JSON body extractor that rejects with the standard envelope.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

use crate::error::AppError;

/// A raw JSON request body.
///
/// Bodies stay untyped until the validation layer has checked them, so a
/// bad field is reported as a validation message rather than a serde error.
/// Unparseable bodies become [`AppError::BadRequest`].
///
/// ```ignore
/// async fn create(JsonPayload(payload): JsonPayload) -> AppResult<Reply<Project>> { .. }
/// ```
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
