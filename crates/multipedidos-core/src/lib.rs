//! # multipedidos-core: Shared Business Logic for the Multipedidos Services
//!
//! This crate is the part of the shared library that both the orders
//! (pedidos) and invoices (facturas) services link against. It contains the
//! pricing engine and the small value types around it, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Multipedidos Architecture                           │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │   Orders service (A)     │  HTTP  │   Invoices service (B)   │      │
//! │  │   /api/pedidos/{id}      │◄───────│   multipedidos-client    │      │
//! │  └────────────┬─────────────┘        └────────────┬─────────────┘      │
//! │               │                                   │                     │
//! │  ┌────────────▼───────────────────────────────────▼─────────────────┐  │
//! │  │               ★ multipedidos-core (THIS CRATE) ★                 │  │
//! │  │                                                                  │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────┐  │  │
//! │  │   │  pricing  │  │   money   │  │   codes   │  │ validation │  │  │
//! │  │   │ discounts │  │ rounding  │  │ PED- FAC- │  │   rules    │  │  │
//! │  │   │    IVA    │  │  parsing  │  │  e-mail   │  │   checks   │  │  │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └────────────┘  │  │
//! │  │                                                                  │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - Tiered discounts, custom discounts, IVA, final totals
//! - [`money`] - Rounding policy and parsing of monetary amounts
//! - [`types`] - Domain types (Product)
//! - [`codes`] - Order/invoice code validation and generation
//! - [`validation`] - Precondition checks
//! - [`error`] - Error tags
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary values are `rust_decimal::Decimal`, never `f64`
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use multipedidos_core::pricing;
//! use rust_decimal_macros::dec;
//!
//! // 1000.00 falls in the 10% tier: 900.00, then 15% IVA: 1035.00
//! let total = pricing::compute_final_total(dec!(1000.00)).unwrap();
//! assert_eq!(total.to_string(), "1035.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codes;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{DiscountTier, PriceBreakdown, TieredDiscount};
pub use rust_decimal::Decimal;
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Number of digits in the numeric part of order and invoice codes.
pub const CODE_DIGITS: usize = 6;
