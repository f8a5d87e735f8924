//! # Error Types
//!
//! Error tags shared by the orders and invoices services.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  multipedidos-core errors (this file)                                  │
//! │  ├── ValidationError  - Precondition violations (invalid argument)     │
//! │  └── CoreError        - Tags the services map to HTTP responses        │
//! │                                                                         │
//! │  multipedidos-client errors (separate crate)                           │
//! │  └── IntegrationError - Peer-service call failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → service handler → 400 / 404       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, resource, id)
//! 3. Errors are enum variants, never String
//! 4. Each variant names the constraint that failed

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business errors surfaced by the services.
///
/// The pricing functions themselves only fail with [`ValidationError`]; this
/// enum is what request handlers return so one mapping to HTTP status codes
/// serves both services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request carried data that fails a business rule (HTTP 400).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A requested resource does not exist (HTTP 404).
    ///
    /// ## When This Occurs
    /// - Order or invoice id not present in the owning service
    /// - The peer service answered 404 for a lookup
    #[error("{resource} with id {id} not found")]
    NotFound { resource: String, id: i64 },

    /// Validation error (wraps ValidationError, HTTP 400).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotFound error for a given resource name and id.
    pub fn not_found(resource: impl Into<String>, id: i64) -> Self {
        CoreError::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Creates an InvalidData error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        CoreError::InvalidData(message.into())
    }

    /// HTTP status code the services answer with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::InvalidData(_) | CoreError::Validation(_) => 400,
            CoreError::NotFound { .. } => 404,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Precondition violations ("invalid argument").
///
/// Raised synchronously before any computation starts. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required value is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Text value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Amount or id is below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Amount so large that the calculation would overflow.
    #[error("{field} is too large to calculate")]
    TooLarge { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (unparsable amount, malformed URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Name of the field whose constraint failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::TooLarge { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
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
