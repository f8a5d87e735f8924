//! # multipedidos-client: Orders Service Client
//!
//! Thin blocking helper the invoices service uses to read an order from the
//! orders service. One GET per call, no retries, no caching.
//!
//! ## Response Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET {base_url}/api/pedidos/{id}                                        │
//! │                                                                         │
//! │  2xx           ──► Ok(Some(body))                                       │
//! │  404           ──► Ok(None)                                             │
//! │  other status  ──► Err(IntegrationError::UnexpectedStatus)              │
//! │  network fault ──► Err(IntegrationError::Transport)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`orders`] - `OrderClient` and the fetch helper
//! - [`config`] - Client configuration from the environment
//! - [`error`] - Integration errors
//!
//! ## Example
//! ```rust,no_run
//! use multipedidos_client::{ClientConfig, OrderClient};
//!
//! let client = OrderClient::new(ClientConfig::default());
//! match client.fetch_order_json("http://localhost:8080", 42)? {
//!     Some(json) => println!("{json}"),
//!     None => println!("order 42 does not exist"),
//! }
//! # Ok::<(), multipedidos_client::IntegrationError>(())
//! ```

pub mod config;
pub mod error;
pub mod orders;

pub use config::{ClientConfig, ConfigError};
pub use error::{IntegrationError, IntegrationResult};
pub use orders::{fetch_order_json, OrderClient};
