//! # Integration Error Types
//!
//! Errors raised while talking to a peer service.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Request      │  │    Transport    │  │       Protocol          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │ InvalidArgument │  │  Transport      │  │  UnexpectedStatus       │ │
//! │  │ MissingBaseUrl  │  │  (connect, I/O, │  │  (anything but 2xx/404) │ │
//! │  │ InvalidUrl      │  │   timeout)      │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A 404 is not an error: the fetch returns `Ok(None)`.

use multipedidos_core::ValidationError;
use thiserror::Error;

use crate::config::BASE_URL_ENV;

/// Result type alias for peer-service calls.
pub type IntegrationResult<T> = Result<T, IntegrationError>;

/// Failure while calling a peer service.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The caller passed a blank base URL or a non-positive id.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// No base URL passed and none configured.
    #[error("Orders service URL not configured (set {})", BASE_URL_ENV)]
    MissingBaseUrl,

    /// The endpoint could not be built from the base URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The peer answered with a status other than 2xx or 404.
    #[error("Unexpected response {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// Connection, timeout or I/O failure.
    #[error("I/O error calling the orders service: {0}")]
    Transport(String),
}

impl From<ureq::Transport> for IntegrationError {
    fn from(err: ureq::Transport) -> Self {
        IntegrationError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for IntegrationError {
    fn from(err: std::io::Error) -> Self {
        IntegrationError::Transport(err.to_string())
    }
}

impl IntegrationError {
    /// Returns true if a caller-side retry could succeed.
    ///
    /// ## Retryable Errors
    /// - Transport faults
    /// - 5xx responses
    pub fn is_retryable(&self) -> bool {
        match self {
            IntegrationError::Transport(_) => true,
            IntegrationError::UnexpectedStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(IntegrationError::Transport("connection refused".into()).is_retryable());
        assert!(IntegrationError::UnexpectedStatus {
            status: 503,
            endpoint: "http://x/api/pedidos/1".into(),
        }
        .is_retryable());

        assert!(!IntegrationError::UnexpectedStatus {
            status: 400,
            endpoint: "http://x/api/pedidos/1".into(),
        }
        .is_retryable());
        assert!(!IntegrationError::MissingBaseUrl.is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = IntegrationError::UnexpectedStatus {
            status: 500,
            endpoint: "http://localhost:8080/api/pedidos/9".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response 500 from http://localhost:8080/api/pedidos/9"
        );

        let err: IntegrationError = ValidationError::MustBePositive {
            field: "order id".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid argument: order id must be greater than zero");
    }
}
