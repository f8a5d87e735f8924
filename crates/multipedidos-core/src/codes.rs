//! # Codes Module
//!
//! Validation and generation of business codes.
//!
//! ## Code Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order   (pedido)   PED-000123    ^PED-[0-9]{6}$                        │
//! │  Invoice (factura)  FAC-000123    ^FAC-[0-9]{6}$                        │
//! │                                                                         │
//! │  id 123 ──► generate_order_code ──► "PED-000123"                        │
//! │             (zero padded to 6 digits)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validators trim their input and treat blank text as invalid. Generators
//! reject negative ids.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{require_non_empty, validate_code_id, ValidationResult};
use crate::CODE_DIGITS;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static ORDER_CODE_RE: OnceLock<Regex> = OnceLock::new();
static INVOICE_CODE_RE: OnceLock<Regex> = OnceLock::new();

/// Modulus applied to the millisecond clock by [`generate_unique_code_now`].
const TIMESTAMP_ID_MODULUS: i64 = 1_000_000;

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap())
}

fn order_code_re() -> &'static Regex {
    ORDER_CODE_RE.get_or_init(|| Regex::new(r"^PED-[0-9]{6}$").unwrap())
}

fn invoice_code_re() -> &'static Regex {
    INVOICE_CODE_RE.get_or_init(|| Regex::new(r"^FAC-[0-9]{6}$").unwrap())
}

// =============================================================================
// Code Kind
// =============================================================================

/// The kind of entity a code identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    /// Order (pedido), prefix `PED`.
    Order,
    /// Invoice (factura), prefix `FAC`.
    Invoice,
}

impl CodeKind {
    /// Three-letter code prefix.
    pub const fn prefix(&self) -> &'static str {
        match self {
            CodeKind::Order => "PED",
            CodeKind::Invoice => "FAC",
        }
    }

    /// Formats `id` as a code of this kind.
    pub fn code_for(&self, id: i64) -> ValidationResult<String> {
        validate_code_id(id)?;
        Ok(format!("{}-{:0width$}", self.prefix(), id, width = CODE_DIGITS))
    }

    /// Checks whether `code` is a well-formed code of this kind.
    pub fn matches(&self, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() {
            return false;
        }

        match self {
            CodeKind::Order => order_code_re().is_match(code),
            CodeKind::Invoice => invoice_code_re().is_match(code),
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Order => write!(f, "order"),
            CodeKind::Invoice => write!(f, "invoice"),
        }
    }
}

impl FromStr for CodeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        require_non_empty(s, "entity type")?;

        match s.trim().to_uppercase().as_str() {
            "PEDIDO" | "PED" | "ORDER" => Ok(CodeKind::Order),
            "FACTURA" | "FAC" | "INVOICE" => Ok(CodeKind::Invoice),
            _ => Err(ValidationError::NotAllowed {
                field: "entity type".to_string(),
                allowed: ["PEDIDO", "PED", "FACTURA", "FAC"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Checks the general shape of an e-mail address.
///
/// ## Example
/// ```rust
/// use multipedidos_core::codes::is_valid_email;
///
/// assert!(is_valid_email("usuario@ejemplo.com"));
/// assert!(!is_valid_email("usuario@"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email_re().is_match(email)
}

/// Checks an order code (`PED-` + 6 digits).
pub fn is_valid_order_code(code: &str) -> bool {
    CodeKind::Order.matches(code)
}

/// Checks an invoice code (`FAC-` + 6 digits).
pub fn is_valid_invoice_code(code: &str) -> bool {
    CodeKind::Invoice.matches(code)
}

// =============================================================================
// Generators
// =============================================================================

/// Formats an order id as `PED-NNNNNN`.
///
/// ## Example
/// ```rust
/// use multipedidos_core::codes::generate_order_code;
///
/// assert_eq!(generate_order_code(12345).unwrap(), "PED-012345");
/// assert!(generate_order_code(-1).is_err());
/// ```
pub fn generate_order_code(id: i64) -> ValidationResult<String> {
    CodeKind::Order.code_for(id)
}

/// Formats an invoice id as `FAC-NNNNNN`.
pub fn generate_invoice_code(id: i64) -> ValidationResult<String> {
    CodeKind::Invoice.code_for(id)
}

/// Formats `id` for an entity kind given by name (`PEDIDO`, `PED`,
/// `FACTURA`, `FAC`, case-insensitive).
///
/// ## Errors
/// - `Required` if the kind is blank
/// - `Negative` if the id is below zero
/// - `NotAllowed` if the kind is unknown
pub fn generate_unique_code(kind: &str, id: i64) -> ValidationResult<String> {
    require_non_empty(kind, "entity type")?;
    validate_code_id(id)?;

    let kind: CodeKind = kind.parse()?;
    kind.code_for(id)
}

/// Like [`generate_unique_code`], using the last six digits of the current
/// UNIX time in milliseconds as the id.
pub fn generate_unique_code_now(kind: &str) -> ValidationResult<String> {
    let id = Utc::now().timestamp_millis().rem_euclid(TIMESTAMP_ID_MODULUS);
    generate_unique_code(kind, id)
}

// =============================================================================
// Unit Tests
// =============================================================================
