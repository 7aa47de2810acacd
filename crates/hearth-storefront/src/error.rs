//! # API Error Type
//!
//! Unified error type for session actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Hearth                             │
//! │                                                                     │
//! │  Display Layer                 Session Layer                        │
//! │  ─────────────                 ─────────────                        │
//! │                                                                     │
//! │  add_to_cart('42')                                                  │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │  Action Function: Result<T, ApiError>                        │   │
//! │  │                                                              │   │
//! │  │  Catalog miss? ──── CoreError::ProductNotFound ──┐           │   │
//! │  │  Bad checkout input? ── ValidationError ──────── ApiError ──►│   │
//! │  │  Persist failure? ───── StorageError ────────────┘           │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! │                                                                     │
//! │  { "code": "NOT_FOUND", "message": "Product not found: 42" }        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart and wishlist mutations themselves are total and never produce an
//! error; `ApiError` covers lookups, checkout input, and storage.

use serde::Serialize;

use hearth_core::{CoreError, ValidationError};
use hearth_storage::StorageError;

/// API error returned from session actions.
///
/// ## Serialization
/// This is what the display layer receives when an action fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Persistence failed
    StorageError,

    /// Checkout could not proceed (e.g. empty cart)
    CheckoutError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a checkout error.
    pub fn checkout(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CheckoutError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::EmptyCart => ApiError::checkout("Cart is empty"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts storage errors to API errors.
impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        tracing::error!("Storage operation failed: {}", err);
        ApiError::new(ErrorCode::StorageError, "Persistence failed")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
