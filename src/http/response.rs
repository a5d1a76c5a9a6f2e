//! Response envelopes and error translation.
//!
//! # Responsibilities
//! - Shape the uniform `{ success, data, message, error }` envelope
//! - Map `ContactError` variants onto status codes at the router boundary
//! - Log unexpected store failures without leaking internals
//!
//! # Design Decisions
//! - One translation point: handlers return `Result<_, ContactError>` and
//!   never build failure envelopes themselves
//! - Store failures log server-side; the client sees a generic message
//!   plus the error's textual form in the `error` field

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::contacts::ContactError;

/// The uniform JSON wrapper returned by every API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success with a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Success with a payload and a human-readable message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success with a message only (delete acknowledgements).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failure with a message only.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failure with a message and the underlying error's text.
    pub fn failure_with_detail(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: Some(error.into()),
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ContactError::Validation(message) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(message.clone()))
            }
            ContactError::DuplicatePhone => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure("phone number already in use"),
            ),
            ContactError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ApiResponse::failure("contact not found"),
            ),
            ContactError::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure_with_detail("internal server error", e.to_string()),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
