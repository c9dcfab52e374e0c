// ABOUTME: Unified error handling with standard error codes and HTTP response mapping
// ABOUTME: Defines ErrorCode, AppError, AppResult, and the JSON error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every request handler returns `Result<_, AppError>`. The error carries an
//! [`ErrorCode`] that decides the HTTP status and a short message that is sent
//! to the caller verbatim. Nothing here is fatal to the process.

/// Store-level error types
pub mod database;

pub use database::DatabaseError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input (unknown service type, malformed id, ...)
    InvalidInput = 3000,
    /// A required field is empty or absent
    MissingRequiredField = 3001,
    /// A date or month does not have the expected shape
    InvalidFormat = 3002,
    /// A value lies outside the accepted range (past dates)
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Identifier does not resolve to a record
    ResourceNotFound = 4000,
    /// The slot is already held by another record
    ResourceAlreadyExists = 4001,

    // Internal Errors (9000-9999)
    /// Store operation failed
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound => 404,
            Self::ResourceAlreadyExists => 409,
            Self::DatabaseError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "The requested slot is already booked",
            Self::DatabaseError => "Database operation failed",
        }
    }

    /// Whether this code represents a failure on the server side
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.http_status() >= 500
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Short human-readable message, sent to the caller
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Malformed value
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside the accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource not found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Slot already taken
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short message
    pub error: String,
    /// Machine-readable code
    pub code: ErrorCode,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
            code: error.code,
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if self.code.is_server_error() {
            tracing::error!(
                error.code = ?self.code,
                error.source = ?self.source,
                "Request failed: {}",
                self.message
            );
        } else {
            tracing::debug!(error.code = ?self.code, "Request rejected: {}", self.message);
        }

        axum::response::IntoResponse::into_response((status, axum::Json(ErrorResponse::from(&self))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::ValueOutOfRange.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ResourceAlreadyExists.http_status(), 409);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::conflict("Time slot unavailable");
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();

        assert_eq!(json["error"], "Time slot unavailable");
        assert_eq!(json["code"], "RESOURCE_ALREADY_EXISTS");
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::not_found("Appointment not found");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Appointment not found"
        );
    }
}
