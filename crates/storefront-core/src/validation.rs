//! # Validation Module
//!
//! Checks applied to catalog data when it is loaded.
//!
//! Cart actions are deliberately NOT run through these checks: the reducer
//! only requires the payload fields it needs to be present, and accepts any
//! values for them.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_price_cents, validate_sku};
//!
//! assert!(validate_sku("item0001").is_ok());
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum SKU length in characters.
pub const MAX_SKU_LEN: usize = 50;

/// Maximum product name length in characters.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ```rust
/// use storefront_core::validation::validate_sku;
///
/// assert!(validate_sku("item0001").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// assert!(validate_sku(" item0001").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    if sku.is_empty() {
        return Err(ValidationError::required("sku"));
    }

    if sku.chars().count() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: non-empty, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("item0001").is_ok());
        assert!(validate_sku("COKE-330").is_ok());
        assert!(validate_sku("product_1").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(" item0001").is_err());
        assert!(validate_sku("item0001\n").is_err());
        assert!(validate_sku(&"A".repeat(51)).is_err());
        assert!(validate_sku(&"A".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Premium Widget").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(999).is_ok());
        assert!(matches!(
            validate_price_cents(-100),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
