//! # Orders Service Client
//!
//! Blocking lookup of an order's JSON representation.
//!
//! ## Request Flow
//! ```text
//! fetch_order_json("http://pedidos:8080/", 42)
//!      │
//!      ├── base_url blank? ──► InvalidArgument
//!      ├── id <= 0?        ──► InvalidArgument
//!      │
//!      ▼
//! GET http://pedidos:8080/api/pedidos/42   (Accept: application/json)
//!      │
//!      ├── 2xx ──► Some(body)
//!      ├── 404 ──► None
//!      └── else ─► UnexpectedStatus / Transport
//! ```

use std::io::Read;

use multipedidos_core::validation::{require_non_empty, validate_order_id};
use tracing::{debug, warn};
use ureq::{Agent, AgentBuilder};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{IntegrationError, IntegrationResult};

/// Path of the order resource on the orders service.
const ORDERS_PATH: &str = "/api/pedidos";

/// Maximum redirects followed per request.
const MAX_REDIRECTS: u32 = 5;

/// Client for the orders service.
///
/// Cheap to clone; the underlying agent shares its connection pool.
#[derive(Clone)]
pub struct OrderClient {
    agent: Agent,
    config: ClientConfig,
}

impl OrderClient {
    /// Creates a client with the configured timeout applied to both
    /// connecting and the whole request.
    pub fn new(config: ClientConfig) -> Self {
        let agent = AgentBuilder::new()
            .timeout_connect(config.timeout())
            .timeout(config.timeout())
            .redirects(MAX_REDIRECTS)
            .build();

        OrderClient { agent, config }
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the raw JSON of order `order_id` from the service at `base_url`.
    ///
    /// ## Returns
    /// - `Ok(Some(body))` on any 2xx response
    /// - `Ok(None)` on 404
    ///
    /// ## Errors
    /// - `InvalidArgument` for a blank base URL or a non-positive id
    /// - `InvalidUrl` if the endpoint is not an http(s) URL
    /// - `UnexpectedStatus` for any other status
    /// - `Transport` for connection, timeout or read failures, including a
    ///   body that is not valid UTF-8
    ///
    /// The body is read in full whatever its size.
    pub fn fetch_order_json(&self, base_url: &str, order_id: i64) -> IntegrationResult<Option<String>> {
        require_non_empty(base_url, "base url")?;
        validate_order_id(order_id)?;

        let endpoint = order_endpoint(base_url, order_id)?;
        debug!(%endpoint, order_id, "Fetching order from orders service");

        let result = self
            .agent
            .get(endpoint.as_str())
            .set("Accept", "application/json")
            .call();

        match result {
            Ok(response) => {
                let status = response.status();
                if !(200..300).contains(&status) {
                    warn!(%endpoint, status, "Unexpected response from orders service");
                    return Err(IntegrationError::UnexpectedStatus {
                        status,
                        endpoint: endpoint.to_string(),
                    });
                }

                // into_string() stops at 10 MB
                let mut body = String::new();
                response.into_reader().read_to_string(&mut body)?;
                debug!(%endpoint, status, bytes = body.len(), "Order fetched");
                Ok(Some(body))
            }
            Err(ureq::Error::Status(404, _)) => {
                debug!(%endpoint, "Order not found");
                Ok(None)
            }
            Err(ureq::Error::Status(status, _)) => {
                warn!(%endpoint, status, "Unexpected response from orders service");
                Err(IntegrationError::UnexpectedStatus {
                    status,
                    endpoint: endpoint.to_string(),
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                warn!(%endpoint, error = %transport, "Orders service call failed");
                Err(transport.into())
            }
        }
    }

    /// Same as [`fetch_order_json`](Self::fetch_order_json) against the
    /// configured base URL.
    pub fn fetch_configured_order_json(&self, order_id: i64) -> IntegrationResult<Option<String>> {
        let base_url = self
            .config
            .base_url
            .as_deref()
            .ok_or(IntegrationError::MissingBaseUrl)?;

        self.fetch_order_json(base_url, order_id)
    }
}

impl std::fmt::Debug for OrderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for OrderClient {
    fn default() -> Self {
        OrderClient::new(ClientConfig::default())
    }
}

/// Fetches an order with a default-configured client.
pub fn fetch_order_json(base_url: &str, order_id: i64) -> IntegrationResult<Option<String>> {
    OrderClient::default().fetch_order_json(base_url, order_id)
}

/// Builds `{base_url}/api/pedidos/{id}`, dropping one trailing slash.
fn order_endpoint(base_url: &str, order_id: i64) -> IntegrationResult<Url> {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let raw = format!("{}{}/{}", base, ORDERS_PATH, order_id);

    let url = Url::parse(&raw).map_err(|e| IntegrationError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(IntegrationError::InvalidUrl {
            url: raw,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}
