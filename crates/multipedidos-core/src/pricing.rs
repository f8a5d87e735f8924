//! # Pricing Module
//!
//! Discount and IVA calculations shared by the orders and invoices services.
//! Both services call these functions so a given subtotal always produces
//! the same total, whichever service computes it.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     compute_final_total(subtotal)                       │
//! │                                                                         │
//! │  subtotal ──► apply_tiered_discount ──► apply_tax ──► total             │
//! │                      │                      │                           │
//! │                      │ tier by amount       │ IVA 15%                   │
//! │                      │ ≥ 5000 → 15%         │                           │
//! │                      │ ≥ 1000 → 10%         │                           │
//! │                      │ else   →  5%         │                           │
//! │                                                                         │
//! │  Discount is ALWAYS applied before tax.                                 │
//! │  Every step rounds half-up to 2 decimals.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use multipedidos_core::pricing::{apply_tax, apply_tiered_discount};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(apply_tax(dec!(100.00)).unwrap(), dec!(115.00));
//! assert_eq!(apply_tiered_discount(dec!(2000.00)).unwrap(), dec!(1800.00));
//! ```

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ValidationError;
use crate::money::{checked_round_money, round_half_up, RATE_SCALE};
use crate::validation::{validate_non_negative_amount, validate_percentage, ValidationResult};

// =============================================================================
// Constants
// =============================================================================

/// IVA applied to every total (15%).
pub const TAX_RATE: Decimal = dec!(0.15);

/// Discount for amounts below [`MEDIUM_TIER_THRESHOLD`] (5%).
pub const BASIC_DISCOUNT_RATE: Decimal = dec!(0.05);

/// Discount for amounts from [`MEDIUM_TIER_THRESHOLD`] up to [`PREMIUM_TIER_THRESHOLD`] (10%).
pub const MEDIUM_DISCOUNT_RATE: Decimal = dec!(0.10);

/// Discount for amounts of at least [`PREMIUM_TIER_THRESHOLD`] (15%).
pub const PREMIUM_DISCOUNT_RATE: Decimal = dec!(0.15);

/// Lowest amount that earns the medium discount.
pub const MEDIUM_TIER_THRESHOLD: Decimal = dec!(1000);

/// Lowest amount that earns the premium discount.
pub const PREMIUM_TIER_THRESHOLD: Decimal = dec!(5000);

const ONE_HUNDRED: Decimal = dec!(100);

// =============================================================================
// Discount Tier
// =============================================================================

/// Automatic discount band, selected purely from the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// Below 1000: 5%.
    Basic,
    /// From 1000 to below 5000: 10%.
    Medium,
    /// 5000 and above: 15%.
    Premium,
}

impl DiscountTier {
    /// Selects the tier for an amount, checking the highest threshold first.
    ///
    /// ## Example
    /// ```rust
    /// use multipedidos_core::pricing::DiscountTier;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(DiscountTier::for_amount(dec!(999.99)), DiscountTier::Basic);
    /// assert_eq!(DiscountTier::for_amount(dec!(1000)), DiscountTier::Medium);
    /// assert_eq!(DiscountTier::for_amount(dec!(5000)), DiscountTier::Premium);
    /// ```
    pub fn for_amount(amount: Decimal) -> Self {
        if amount >= PREMIUM_TIER_THRESHOLD {
            DiscountTier::Premium
        } else if amount >= MEDIUM_TIER_THRESHOLD {
            DiscountTier::Medium
        } else {
            DiscountTier::Basic
        }
    }

    /// Discount rate as a fraction (0.05, 0.10, 0.15).
    pub const fn rate(&self) -> Decimal {
        match self {
            DiscountTier::Basic => BASIC_DISCOUNT_RATE,
            DiscountTier::Medium => MEDIUM_DISCOUNT_RATE,
            DiscountTier::Premium => PREMIUM_DISCOUNT_RATE,
        }
    }

    /// Discount rate as a whole percentage (5, 10, 15).
    pub fn percent(&self) -> Decimal {
        (self.rate() * ONE_HUNDRED).normalize()
    }

    /// Lowest amount that falls in this tier.
    pub const fn threshold(&self) -> Decimal {
        match self {
            DiscountTier::Basic => Decimal::ZERO,
            DiscountTier::Medium => MEDIUM_TIER_THRESHOLD,
            DiscountTier::Premium => PREMIUM_TIER_THRESHOLD,
        }
    }
}

impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountTier::Basic => write!(f, "basic"),
            DiscountTier::Medium => write!(f, "medium"),
            DiscountTier::Premium => write!(f, "premium"),
        }
    }
}

/// Result of a tiered discount: the tier that was selected and the amount
/// after the discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredDiscount {
    pub tier: DiscountTier,
    pub amount: Decimal,
}

/// Every intermediate value of [`compute_final_total`].
///
/// Handy for invoices, which print the discount and the IVA separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Amount before any discount, as received.
    pub subtotal: Decimal,
    /// Tier applied to the subtotal.
    pub tier: DiscountTier,
    /// Subtotal after the tiered discount.
    pub discounted: Decimal,
    /// IVA charged on the discounted amount.
    pub tax: Decimal,
    /// Discounted amount plus IVA.
    pub total: Decimal,
}

// =============================================================================
// Operations
// =============================================================================

/// Adds IVA to a subtotal.
///
/// `total = subtotal + subtotal × 0.15`, rounded half-up to 2 decimals.
///
/// ## Errors
/// - `ValidationError::Negative` if `subtotal` is below zero
/// - `ValidationError::TooLarge` if the total cannot be held exactly to cents
///
/// ## Example
/// ```rust
/// use multipedidos_core::pricing::apply_tax;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(apply_tax(dec!(100.00)).unwrap().to_string(), "115.00");
/// assert!(apply_tax(dec!(-100)).is_err());
/// ```
pub fn apply_tax(subtotal: Decimal) -> ValidationResult<Decimal> {
    validate_non_negative_amount(subtotal, "subtotal")?;

    let tax = exact_mul(subtotal, TAX_RATE, "subtotal")?;
    let total = exact_add(subtotal, tax, "subtotal")?;

    checked_round_money(total, "subtotal")
}

/// Selects the discount tier for `amount` and applies it, without logging.
///
/// This is the calculation behind [`apply_tiered_discount`]; call it
/// directly when the caller wants to know which tier was used.
///
/// ## Errors
/// - `ValidationError::Negative` if `amount` is below zero
/// - `ValidationError::TooLarge` if the result cannot be held exactly to cents
pub fn tiered_discount(amount: Decimal) -> ValidationResult<TieredDiscount> {
    validate_non_negative_amount(amount, "amount")?;

    let tier = DiscountTier::for_amount(amount);
    let discounted = subtract_fraction(amount, tier.rate())?;

    Ok(TieredDiscount {
        tier,
        amount: discounted,
    })
}

/// Applies the automatic discount for the amount's tier.
///
/// | Amount           | Discount |
/// |------------------|----------|
/// | ≥ 5000           | 15%      |
/// | ≥ 1000, < 5000   | 10%      |
/// | < 1000           | 5%       |
///
/// Emits an `info` event with the selected tier.
///
/// ## Example
/// ```rust
/// use multipedidos_core::pricing::apply_tiered_discount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(apply_tiered_discount(dec!(500.00)).unwrap(), dec!(475.00));
/// assert_eq!(apply_tiered_discount(dec!(6000.00)).unwrap(), dec!(5100.00));
/// ```
pub fn apply_tiered_discount(amount: Decimal) -> ValidationResult<Decimal> {
    let discount = tiered_discount(amount)?;

    info!(
        tier = %discount.tier,
        percent = %discount.tier.percent(),
        "Applying tiered discount"
    );

    Ok(discount.amount)
}

/// Applies a caller-chosen percentage discount.
///
/// The percentage (0-100) is first converted to a fraction rounded half-up
/// to 4 decimals; the discounted amount is then rounded half-up to 2.
///
/// ## Errors
/// - `ValidationError::Negative` if `amount` is below zero
/// - `ValidationError::OutOfRange` if `percentage` is outside [0, 100]
///
/// ## Example
/// ```rust
/// use multipedidos_core::pricing::apply_custom_discount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(apply_custom_discount(dec!(200.00), dec!(20)).unwrap(), dec!(160.00));
/// assert!(apply_custom_discount(dec!(100), dec!(150)).is_err());
/// ```
pub fn apply_custom_discount(amount: Decimal, percentage: Decimal) -> ValidationResult<Decimal> {
    validate_non_negative_amount(amount, "amount")?;
    validate_percentage(percentage)?;

    let fraction = round_half_up(percentage / ONE_HUNDRED, RATE_SCALE);

    subtract_fraction(amount, fraction)
}

/// Applies the tiered discount, then IVA.
///
/// ## Example
/// ```rust
/// use multipedidos_core::pricing::compute_final_total;
/// use rust_decimal_macros::dec;
///
/// // 1000 - 10% = 900, 900 + 15% = 1035
/// assert_eq!(compute_final_total(dec!(1000.00)).unwrap(), dec!(1035.00));
/// ```
pub fn compute_final_total(subtotal: Decimal) -> ValidationResult<Decimal> {
    let discounted = apply_tiered_discount(subtotal)?;
    apply_tax(discounted)
}

/// Same pipeline as [`compute_final_total`], keeping every intermediate value.
pub fn final_total_breakdown(subtotal: Decimal) -> ValidationResult<PriceBreakdown> {
    let discount = tiered_discount(subtotal)?;
    let total = apply_tax(discount.amount)?;

    Ok(PriceBreakdown {
        subtotal,
        tier: discount.tier,
        discounted: discount.amount,
        tax: total - discount.amount,
        total,
    })
}

/// Current IVA as a percentage (15).
pub fn current_tax_rate_percent() -> Decimal {
    TAX_RATE * ONE_HUNDRED
}

// =============================================================================
// Helpers
// =============================================================================

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// `amount - amount × fraction`, rounded to cents.
fn subtract_fraction(amount: Decimal, fraction: Decimal) -> ValidationResult<Decimal> {
    let discount = exact_mul(amount, fraction, "amount")?;
    let remaining = exact_sub(amount, discount, "amount")?;

    checked_round_money(remaining, "amount")
}

// Near capacity rust_decimal drops low digits to fit the 96-bit mantissa
// instead of failing. The helpers below compare the result scale with the
// scale an exact result needs and report a shortfall as TooLarge. Operands
// are normalized first so trailing zeros never count as lost digits.

fn exact_mul(a: Decimal, b: Decimal, field: &str) -> ValidationResult<Decimal> {
    let (a, b) = (a.normalize(), b.normalize());
    let scale = (a.scale() + b.scale()).min(MAX_DECIMAL_SCALE);
    exact(a.checked_mul(b), scale, field)
}

fn exact_add(a: Decimal, b: Decimal, field: &str) -> ValidationResult<Decimal> {
    let (a, b) = (a.normalize(), b.normalize());
    exact(a.checked_add(b), a.scale().max(b.scale()), field)
}

fn exact_sub(a: Decimal, b: Decimal, field: &str) -> ValidationResult<Decimal> {
    let (a, b) = (a.normalize(), b.normalize());
    exact(a.checked_sub(b), a.scale().max(b.scale()), field)
}

fn exact(value: Option<Decimal>, scale: u32, field: &str) -> ValidationResult<Decimal> {
    match value {
        // zero products come back as a plain ZERO
        Some(result) if result.is_zero() || result.scale() == scale => Ok(result),
        _ => Err(ValidationError::TooLarge {
            field: field.to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
