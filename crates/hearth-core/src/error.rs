//! # Error Types
//!
//! Domain-specific error types for hearth-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  hearth-core errors (this file)                                     │
//! │  ├── CoreError        - Domain errors at the checkout boundary      │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  hearth-storage errors (separate crate)                             │
//! │  └── StorageError     - Persistence failures                        │
//! │                                                                     │
//! │  Session API errors (hearth-storefront)                             │
//! │  └── ApiError         - What the display layer sees (serialized)    │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → ApiError → Display layer       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart, wishlist, and pipeline operations are total and have no error
//! path at all. These types cover the edges: catalog lookups and checkout
//! input.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// An order was submitted against an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when checkout input does not meet requirements, before any
/// order processing runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email, non-numeric card number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("42".to_string());
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
