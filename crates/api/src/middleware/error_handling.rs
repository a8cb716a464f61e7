//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the ExamSync
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Every error body carries the identifying context that triggered it (the
//! student id, assignment id, or module name), formatted by the domain
//! error's `Display` implementation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use examsync_core::errors::ExamError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `ExamError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub ExamError);

/// Converts application errors to HTTP responses.
///
/// Input and precondition failures are client errors; conflicts get 409 so
/// a reschedule caller can distinguish "pick another time" from "bad
/// request"; persistence and internal failures are server errors.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ExamError::InvalidInput(_)
            | ExamError::NoRegistrations(_)
            | ExamError::NoAvailability
            | ExamError::NoExaminersWithSlots
            | ExamError::NoFeasibleSlot(_) => StatusCode::BAD_REQUEST,
            ExamError::NotFound(_) => StatusCode::NOT_FOUND,
            ExamError::Conflict(_) => StatusCode::CONFLICT,
            ExamError::Persistence(_) | ExamError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using the `?` operator with functions that return
/// `Result<T, ExamError>` in handlers returning `Result<T, AppError>`.
impl From<ExamError> for AppError {
    fn from(err: ExamError) -> Self {
        AppError(err)
    }
}

/// Wraps repository-level errors in the persistence variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ExamError::Persistence(err))
    }
}

/// Maps an ExamError directly to an HTTP response.
pub fn map_error(err: ExamError) -> Response {
    AppError(err).into_response()
}
