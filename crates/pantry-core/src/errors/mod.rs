// ABOUTME: Unified error type and error codes for the pantry tracker
// ABOUTME: Maps domain failures (validation, ownership, AI upstream) onto HTTP statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the server returns [`AppResult`]. An
//! [`AppError`] carries a stable [`ErrorCode`], a human-readable message and
//! an optional source error. The request boundary converts it into a
//! `{"error": message, "code": CODE}` payload (see the `http-response`
//! feature), so no failure is ever fatal to the process.

#[cfg(feature = "http-response")]
mod http;

use crate::constants::error_messages;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication
    /// No credentials supplied
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired,
    /// Credentials supplied but rejected
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid,

    // Validation
    /// Malformed or missing input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,

    // Resources
    /// Resource missing, or not visible to the caller
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Unique key already taken
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists,

    // Recipes
    /// Recipe generation requested with an empty pantry
    #[serde(rename = "EMPTY_PANTRY")]
    EmptyPantry,
    /// Recipe generator failed or returned unusable output
    #[serde(rename = "GENERATION_FAILED")]
    GenerationFailed,

    // External services
    /// Upstream service returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// Upstream service throttled the request
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited,

    // Internal
    /// Missing or invalid configuration
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Document store could not be read or written
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Data could not be (de)serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Anything else
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // Duplicate registration is reported as a plain bad request
            Self::InvalidInput | Self::ResourceAlreadyExists | Self::EmptyPantry => 400,

            Self::AuthRequired | Self::AuthInvalid => 401,

            Self::ResourceNotFound => 404,

            Self::ExternalServiceError => 502,

            Self::ExternalRateLimited => 503,

            Self::GenerationFailed
            | Self::ConfigError
            | Self::StorageError
            | Self::SerializationError
            | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication is required to access this resource",
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::EmptyPantry => "The pantry has no items",
            Self::GenerationFailed => "Recipe generation failed",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ConfigError => "Configuration error encountered",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal server error occurred",
        }
    }

    /// Whether the caller can fix the request and try again
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.http_status() < 500
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
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
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Message safe to show an API client
    ///
    /// Client errors carry their own message. Server-side failures are
    /// replaced by a generic text; the detail is only logged.
    #[must_use]
    pub fn public_message(&self) -> &str {
        match self.code {
            ErrorCode::GenerationFailed => error_messages::GENERATION_FAILED,
            code if code.is_client_error() => self.message.as_str(),
            code => code.description(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Message for display
    pub error: String,
    /// Stable machine-readable code
    pub code: ErrorCode,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.public_message().to_owned(),
            code: error.code,
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// No credentials on a protected request
    pub fn auth_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthRequired, message)
    }

    /// Invalid authentication
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource missing or owned by another user
    ///
    /// Both situations share one message so a caller cannot probe for the
    /// existence of other users' records.
    #[must_use]
    pub fn item_not_found() -> Self {
        Self::new(ErrorCode::ResourceNotFound, error_messages::ITEM_NOT_FOUND)
    }

    /// Unique key already taken
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Recipe generation requested with nothing in the pantry
    #[must_use]
    pub fn empty_pantry() -> Self {
        Self::new(ErrorCode::EmptyPantry, error_messages::EMPTY_PANTRY)
    }

    /// Recipe generator failure carrying the upstream detail
    pub fn generation(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationFailed, detail)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}
