//! # Validation Module
//!
//! Explicit precondition checks for the shared library.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Service request handler                                      │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Product::validate / parse_amount                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing / code functions                                     │
//! │  └── THIS MODULE: fail fast before any computation                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Service database                                             │
//! │  └── NOT NULL / CHECK constraints                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use multipedidos_core::validation::{require_non_empty, validate_percentage};
//! use rust_decimal_macros::dec;
//!
//! require_non_empty("Laptop", "name").unwrap();
//! assert!(validate_percentage(dec!(150)).is_err());
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ValidationError;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a text value is present and not blank.
///
/// ## Example
/// ```rust
/// use multipedidos_core::validation::require_non_empty;
///
/// assert!(require_non_empty("valor", "campo").is_ok());
/// assert!(require_non_empty("   ", "campo").is_err());
/// ```
pub fn require_non_empty(value: &str, field: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require_non_empty(name, "name")?;

    if name.trim().chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that an amount is not negative. Zero is allowed.
pub fn validate_non_negative_amount(value: Decimal, field: &str) -> ValidationResult<()> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive (> 0)
pub fn validate_positive_price(price: Decimal) -> ValidationResult<()> {
    if price <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100, both inclusive
pub fn validate_percentage(percentage: Decimal) -> ValidationResult<()> {
    if percentage < Decimal::ZERO || percentage > dec!(100) {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates an id used to build an order or invoice code. Zero is allowed.
pub fn validate_code_id(id: i64) -> ValidationResult<()> {
    if id < 0 {
        return Err(ValidationError::Negative {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates an order id used for a remote lookup. Must be > 0.
pub fn validate_order_id(id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "order id".to_string(),
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
    fn test_require_non_empty() {
        assert!(require_non_empty("valor", "campo").is_ok());

        let err = require_non_empty("", "campo").unwrap_err();
        assert_eq!(err.to_string(), "campo is required");
        assert!(require_non_empty(" \t ", "campo").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Laptop Dell XPS").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(matches!(
            validate_product_name(&"A".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
        assert!(validate_product_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_non_negative_amount() {
        assert!(validate_non_negative_amount(dec!(0), "amount").is_ok());
        assert!(validate_non_negative_amount(dec!(-0.00), "amount").is_ok());
        assert!(validate_non_negative_amount(dec!(10.50), "amount").is_ok());
        assert!(validate_non_negative_amount(dec!(-0.01), "amount").is_err());
    }

    #[test]
    fn test_validate_positive_price() {
        assert!(validate_positive_price(dec!(0.01)).is_ok());
        assert!(validate_positive_price(dec!(0)).is_err());
        assert!(validate_positive_price(dec!(-5)).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(dec!(0)).is_ok());
        assert!(validate_percentage(dec!(100)).is_ok());
        assert!(validate_percentage(dec!(12.5)).is_ok());
        assert!(validate_percentage(dec!(-0.1)).is_err());
        assert!(validate_percentage(dec!(100.0001)).is_err());
    }

    #[test]
    fn test_validate_ids() {
        assert!(validate_code_id(0).is_ok());
        assert!(validate_code_id(-1).is_err());

        assert!(validate_order_id(1).is_ok());
        assert!(validate_order_id(0).is_err());
        assert!(validate_order_id(-7).is_err());
    }
}
