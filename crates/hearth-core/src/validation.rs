//! # Validation Module
//!
//! Input validation for the checkout form.
//!
//! The cart and wishlist need no validation (their operations are total);
//! these checks run once, when an order is submitted, before the simulated
//! payment step.
//!
//! ## Usage
//! ```rust
//! use hearth_core::validation::{validate_required, validate_email};
//!
//! validate_required("city", "Lilongwe").unwrap();
//! validate_email("jane@example.com").unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required field is present.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Required
/// - Must contain exactly one `@` with a dot somewhere after it
///
/// This is a shape check for the checkout form, not RFC validation;
/// there is no mail delivery behind it.
pub fn validate_email(value: &str) -> ValidationResult<()> {
    validate_required("email", value)?;

    let value = value.trim();
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain.tld".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric-String Validators
// =============================================================================

/// Validates a digit-only field such as a card or account number.
///
/// ## Rules
/// - Required
/// - After stripping spaces, every character must be a digit
/// - Digit count must fall within `[min_digits, max_digits]`
pub fn validate_digits(
    field: &str,
    value: &str,
    min_digits: usize,
    max_digits: usize,
) -> ValidationResult<()> {
    validate_required(field, value)?;

    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    if digits.len() < min_digits || digits.len() > max_digits {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must be {} to {} digits", min_digits, max_digits),
        });
    }

    Ok(())
}

/// Validates a card number (13 to 19 digits, spaces allowed).
pub fn validate_card_number(value: &str) -> ValidationResult<()> {
    validate_digits("card number", value, 13, 19)
}

// =============================================================================
// Unit Tests
// =============================================================================
