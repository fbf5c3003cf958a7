//! Error handling for the API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::Error as CoreError;
use serde::Serialize;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Bad request.
    BadRequest(String),
    /// Not found.
    NotFound(String),
    /// Conflict with existing documents.
    Conflict(String),
    /// Internal server error.
    Internal(String),
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error flag.
    pub error: bool,
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = ErrorResponse {
            error: true,
            code: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::EngineerNotFound(_)
            | CoreError::ProjectNotFound(_)
            | CoreError::AssignmentNotFound(_) => AppError::NotFound(message),
            CoreError::EmailTaken(_)
            | CoreError::DuplicateAssignment { .. }
            | CoreError::ProjectInUse { .. } => AppError::Conflict(message),
            CoreError::InvalidId(_)
            | CoreError::AllocationOutOfRange(_)
            | CoreError::InvalidDateRange { .. }
            | CoreError::MissingSkills
            | CoreError::InsufficientCapacity { .. }
            | CoreError::CapacityBelowAllocated { .. } => AppError::BadRequest(message),
            CoreError::Storage(_) | CoreError::Codec(_) => AppError::Internal(message),
        }
    }
}
