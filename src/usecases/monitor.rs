//! Status Monitor - Bounded Transaction Status Polling
//!
//! Polls the oracle node until a broadcast transaction reaches a
//! terminal status or the retry budget runs out, in which case a local
//! `TIMEOUT` status is returned instead of an error.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::transaction::TxStatus;
use crate::error::OracleError;
use crate::ports::node::OracleNode;

/// Polling parameters for the status monitor.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
  /// Re-checks allowed while the node still reports `PENDING`, beyond
  /// the initial check.
  pub max_retries: u32,
  /// Fixed delay between consecutive checks.
  pub poll_interval: Duration,
}

impl Default for MonitorConfig {
  fn default() -> Self {
    Self {
      max_retries: 12,
      poll_interval: Duration::from_secs(5),
    }
  }
}

/// Polls a transaction's status until it is terminal.
pub struct StatusMonitor<N: OracleNode> {
  /// Node port.
  node: Arc<N>,
  /// Polling budget and cadence.
  config: MonitorConfig,
}

impl<N: OracleNode> StatusMonitor<N> {
  /// Create a monitor with the default budget (12 retries, 5 s apart).
  pub fn new(node: Arc<N>) -> Self {
    Self::with_config(node, MonitorConfig::default())
  }

  /// Create a monitor with custom polling parameters.
  pub fn with_config(node: Arc<N>, config: MonitorConfig) -> Self {
    Self { node, config }
  }

  /// Poll until the transaction leaves `PENDING` or the budget runs out.
  ///
  /// A terminal status from the node returns as soon as it is seen,
  /// without further delay. A transaction still pending after
  /// `max_retries` re-checks yields `TxStatus::Timeout` without another
  /// sleep; with a budget of N the node is queried at most N + 1 times.
  ///
  /// # Errors
  /// `InvalidArgument` for an empty hash. Checker errors propagate
  /// unmodified and end the poll; only `PENDING` triggers a re-check.
  pub async fn wait_for_terminal(&self, tx_hash: &str) -> Result<TxStatus, OracleError> {
    if tx_hash.is_empty() {
      return Err(OracleError::invalid_argument("tx_hash must not be empty"));
    }

    let mut remaining = self.config.max_retries;
    loop {
      let status = self.node.transaction_status(tx_hash).await?;

      if status.is_terminal() {
        debug!(tx_hash = %tx_hash, status = %status, "Transaction reached terminal status");
        return Ok(status);
      }

      if remaining == 0 {
        warn!(
          tx_hash = %tx_hash,
          max_retries = self.config.max_retries,
          "Retry budget exhausted while still pending"
        );
        return Ok(TxStatus::Timeout);
      }

      remaining -= 1;
      debug!(tx_hash = %tx_hash, remaining, "Still pending, will re-check");
      sleep(self.config.poll_interval).await;
    }
  }
}
