//! The uniform `{ success, data?, message?, errors? }` response envelope.
//!
//! Every endpoint answers with [`ApiResponse`], including failures, so
//! clients can branch on `success` alone.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::pagination::Pagination;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Diagnostic detail, only filled outside production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// A `success: false` envelope with a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
            error: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// An envelope paired with the status it is sent with.
#[derive(Debug)]
pub struct Reply<T: Serialize>(pub StatusCode, pub ApiResponse<T>);

impl<T: Serialize> Reply<T> {
    pub fn ok(body: ApiResponse<T>) -> Self {
        Self(StatusCode::OK, body)
    }

    pub fn created(body: ApiResponse<T>) -> Self {
        Self(StatusCode::CREATED, body)
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

/// One page of projects.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPage<T: Serialize> {
    pub projects: Vec<T>,
    pub pagination: Pagination,
}

/// One page of contact submissions.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPage<T: Serialize> {
    pub contacts: Vec<T>,
    pub pagination: Pagination,
}
