//! # Domain Types
//!
//! Value types exchanged between the orders and invoices services.
//!
//! ## Product
//! ```text
//! ┌─────────────────────────┐
//! │        Product          │
//! │  ─────────────────────  │
//! │  name   (required)      │
//! │  price  (Decimal, > 0)  │
//! └─────────────────────────┘
//! ```
//!
//! Products arrive either through [`Product::new`], which validates, or
//! through serde, in which case the handler calls [`Product::validate`]
//! before using the value.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::format_money;
use crate::validation::{validate_positive_price, validate_product_name, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A product line as carried in order and invoice payloads.
///
/// Prices serialize as strings (`"19.99"`) so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Decimal,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Example
    /// ```rust
    /// use multipedidos_core::Product;
    /// use rust_decimal_macros::dec;
    ///
    /// let laptop = Product::new("Laptop", dec!(1299.90)).unwrap();
    /// assert_eq!(laptop.name, "Laptop");
    ///
    /// assert!(Product::new("", dec!(10)).is_err());
    /// assert!(Product::new("Mouse", dec!(0)).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Decimal) -> ValidationResult<Self> {
        let product = Product {
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks the name and price constraints.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_positive_price(self.price)?;
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, format_money(self.price))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
