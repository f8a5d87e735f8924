//! # Money Module
//!
//! Rounding policy and boundary parsing for monetary amounts.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    1.005 * 100 = 100.49999999999999 ❌ half-up rounds the wrong way     │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    dec!(0.1) + dec!(0.2) = 0.3                                         │
//! │    12.345 is stored exactly, so half-up gives 12.35 every time         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Every amount leaving the pricing engine is rounded **half-up** to exactly
//! two decimal places. Amounts are never negative, so half-up and
//! half-away-from-zero are the same rule.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ValidationError;
use crate::validation::{validate_non_negative_amount, ValidationResult};

/// Decimal places of every monetary result.
pub const MONEY_SCALE: u32 = 2;

/// Decimal places of intermediate rate fractions (custom discounts).
pub const RATE_SCALE: u32 = 4;

/// Rounds `value` half-up to `scale` places and pads it to exactly that scale.
///
/// A value with too many integer digits to carry `scale` decimals in the
/// 96-bit mantissa keeps a lower scale. Use [`checked_round_money`] where
/// that must be an error.
///
/// ## Example
/// ```rust
/// use multipedidos_core::money::round_half_up;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_up(dec!(12.345), 2).to_string(), "12.35");
/// assert_eq!(round_half_up(dec!(115), 2).to_string(), "115.00");
/// assert_eq!(round_half_up(dec!(0.123456), 4).to_string(), "0.1235");
/// ```
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    // round_dp never adds digits; rescale pads 115 to 115.00
    rounded.rescale(scale);
    rounded
}

/// Rounds a monetary amount to cents, half-up.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, MONEY_SCALE)
}

/// Rounds a monetary amount to cents, half-up, rejecting values that cannot
/// carry two decimals.
///
/// ## Errors
/// `ValidationError::TooLarge` naming `field` when the rounded value would
/// keep fewer than two decimals.
pub fn checked_round_money(value: Decimal, field: &str) -> ValidationResult<Decimal> {
    let rounded = round_money(value);
    if rounded.scale() != MONEY_SCALE {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
        });
    }
    Ok(rounded)
}

/// Parses a textual amount received at an input boundary (JSON, query string).
///
/// ## Rules
/// - Blank text is an absent amount → `Required`
/// - Unparsable text → `InvalidFormat`
/// - Negative values → `Negative`
///
/// The parsed value keeps its original scale; rounding happens in the
/// pricing functions.
///
/// ## Example
/// ```rust
/// use multipedidos_core::money::parse_amount;
///
/// assert!(parse_amount("subtotal", "100.50").is_ok());
/// assert!(parse_amount("subtotal", "").is_err());
/// assert!(parse_amount("subtotal", "-1").is_err());
/// ```
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<Decimal> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value = Decimal::from_str(text).map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })?;

    validate_non_negative_amount(value, field)?;

    Ok(value)
}

/// Formats an amount with exactly two decimals, e.g. for receipts and logs.
pub fn format_money(value: Decimal) -> String {
    round_money(value).to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up_at_midpoint() {
        assert_eq!(round_money(dec!(12.345)), dec!(12.35));
        assert_eq!(round_money(dec!(12.344)), dec!(12.34));
        // Bankers rounding would give 0.34 here
        assert_eq!(round_money(dec!(0.345)), dec!(0.35));
        assert_eq!(round_money(dec!(2.5)), dec!(2.50));
    }

    #[test]
    fn test_round_pads_scale() {
        let rounded = round_money(dec!(475));
        assert_eq!(rounded.scale(), 2);
        assert_eq!(rounded.to_string(), "475.00");

        let rounded = round_money(dec!(1035.000000));
        assert_eq!(rounded.to_string(), "1035.00");
    }

    #[test]
    fn test_round_rate_scale() {
        assert_eq!(round_half_up(dec!(0.33335), RATE_SCALE), dec!(0.3334));
        assert_eq!(round_half_up(dec!(0.2), RATE_SCALE).to_string(), "0.2000");
    }

    #[test]
    fn test_checked_round_money() {
        assert_eq!(checked_round_money(dec!(12.345), "total").unwrap(), dec!(12.35));

        let large = Decimal::from_i128_with_scale(10_i128.pow(26), 0);
        assert_eq!(checked_round_money(large, "total").unwrap().scale(), 2);

        // 1e27 cannot hold two decimals in 96 bits
        let too_large = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
        assert!(round_money(too_large).scale() < MONEY_SCALE);
        assert_eq!(
            checked_round_money(too_large, "total"),
            Err(ValidationError::TooLarge {
                field: "total".to_string()
            })
        );
        assert!(checked_round_money(Decimal::MAX, "total").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("amount", " 19.99 ").unwrap(), dec!(19.99));
        assert_eq!(parse_amount("amount", "0").unwrap(), Decimal::ZERO);

        assert_eq!(
            parse_amount("amount", "   "),
            Err(ValidationError::Required {
                field: "amount".to_string()
            })
        );
        assert!(matches!(
            parse_amount("amount", "12,50"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(
            parse_amount("amount", "-0.01"),
            Err(ValidationError::Negative {
                field: "amount".to_string()
            })
        );
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(10)), "10.00");
        assert_eq!(format_money(dec!(10.005)), "10.01");
    }
}
