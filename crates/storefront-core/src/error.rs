//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Reducer / domain failures                      │
//! │  └── ValidationError  - Missing payloads, bad catalog data             │
//! │                                                                         │
//! │  storefront app errors (separate crate)                                │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── ApiError         - What the view layer sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, action type, field)
//! 3. Errors are enum variants, never String
//! 4. A failed transition never changes state; the error is the only effect

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by reducers and catalog loading.
///
/// These are contract violations by the caller (dispatching QUANTITY for a
/// sku that is not in the cart, sending an unknown action type). They are
/// reported synchronously and never retried.
#[derive(Debug, Error)]
pub enum CoreError {
    /// QUANTITY was dispatched for a sku with no line in the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: [item0001 x2]
    ///      │
    ///      ▼
    /// QUANTITY { sku: "item0009", qty: 3 }
    ///      │
    ///      ▼
    /// LineNotFound { sku: "item0009" }   (cart unchanged)
    /// ```
    #[error("Cart line not found: {sku}")]
    LineNotFound { sku: String },

    /// The action's `type` is not one the reducer knows.
    #[error("Unrecognized action type: {kind}")]
    UnrecognizedAction { kind: String },

    /// The catalog document could not be parsed.
    #[error("Catalog document is malformed: {0}")]
    MalformedCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An action that needs a payload arrived without one.
    #[error("payload is required for {action} action")]
    MissingPayload { action: String },

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., illegal characters in a SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate SKU in the catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Shorthand for a missing field.
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }
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
        let err = CoreError::LineNotFound {
            sku: "item0009".to_string(),
        };
        assert_eq!(err.to_string(), "Cart line not found: item0009");

        let err = CoreError::UnrecognizedAction {
            kind: "UNKNOWN".to_string(),
        };
        assert_eq!(err.to_string(), "Unrecognized action type: UNKNOWN");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MissingPayload {
            action: "ADD".to_string(),
        };
        assert_eq!(err.to_string(), "payload is required for ADD action");

        assert_eq!(ValidationError::required("sku").to_string(), "sku is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("sku").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
