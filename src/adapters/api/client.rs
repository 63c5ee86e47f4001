//! Oracle Node HTTP Client
//!
//! Wraps reqwest for the node's two REST endpoints. Each operation
//! performs exactly one outbound request; the only retry loop in the
//! system lives in the status monitor, never here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::types::{self, BroadcastRequest};
use crate::domain::transaction::{TransactionRequest, TxHash, TxStatus};
use crate::error::OracleError;
use crate::ports::node::OracleNode;

/// Configuration for the oracle node HTTP client.
#[derive(Debug, Clone)]
pub struct NodeClientConfig {
  /// Base URL for the node API.
  pub base_url: String,
  /// Request timeout.
  pub timeout: Duration,
}

impl Default for NodeClientConfig {
  fn default() -> Self {
    Self {
      base_url: "https://mock-node-wgqbnxruha-as.a.run.app".to_string(),
      timeout: Duration::from_secs(30),
    }
  }
}

/// HTTP client for the oracle node REST API.
pub struct NodeClient {
  /// Underlying HTTP client.
  http: Client,
  /// Client configuration.
  config: NodeClientConfig,
}

impl NodeClient {
  /// Create a new node client.
  ///
  /// # Errors
  /// `Transport` if the underlying HTTP client cannot be built.
  pub fn new(config: NodeClientConfig) -> Result<Self, OracleError> {
    let http = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| OracleError::Transport {
        message: "failed to build HTTP client".to_string(),
        source: Some(e),
      })?;

    Ok(Self { http, config })
  }

  /// Read a response body, mapping non-2xx statuses to transport errors.
  async fn read_body(response: reqwest::Response) -> Result<String, OracleError> {
    let status = response.status();
    if !status.is_success() {
      return Err(OracleError::transport(format!("node returned {status}")));
    }
    Ok(response.text().await?)
  }
}

#[async_trait]
impl OracleNode for NodeClient {
  async fn broadcast_price(
    &self,
    request: &TransactionRequest,
  ) -> Result<TxHash, OracleError> {
    let url = format!("{}/broadcast", self.config.base_url);
    let payload = BroadcastRequest::from(request);

    debug!(
      symbol = %request.symbol(),
      price = request.price(),
      "Submitting broadcast request"
    );

    let response = self.http.post(&url).json(&payload).send().await?;
    let body = Self::read_body(response).await?;
    types::parse_broadcast_response(&body)
  }

  async fn transaction_status(&self, tx_hash: &str) -> Result<TxStatus, OracleError> {
    if tx_hash.is_empty() {
      return Err(OracleError::invalid_argument("tx_hash must not be empty"));
    }

    let url = format!("{}/check/{}", self.config.base_url, tx_hash);

    let response = self.http.get(&url).send().await?;
    let body = Self::read_body(response).await?;
    types::parse_status_response(&body)
  }
}
