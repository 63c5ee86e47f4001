//! Price Broadcaster - Submit-then-Monitor Orchestration
//!
//! Composes the node port with the status monitor: validate the input,
//! broadcast the transaction, then poll until a terminal status. Errors
//! from either step propagate to the caller unmodified.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::transaction::{BroadcastOutcome, TransactionRequest};
use crate::error::OracleError;
use crate::ports::node::OracleNode;
use crate::usecases::monitor::{MonitorConfig, StatusMonitor};

/// Broadcasts price transactions and waits for their terminal status.
pub struct PriceBroadcaster<N: OracleNode> {
  /// Node port.
  node: Arc<N>,
  /// Status poller sharing the same node.
  monitor: StatusMonitor<N>,
}

impl<N: OracleNode> PriceBroadcaster<N> {
  /// Create a broadcaster with the default polling budget.
  pub fn new(node: Arc<N>) -> Self {
    Self::with_config(node, MonitorConfig::default())
  }

  /// Create a broadcaster with custom polling parameters.
  pub fn with_config(node: Arc<N>, config: MonitorConfig) -> Self {
    Self {
      monitor: StatusMonitor::with_config(Arc::clone(&node), config),
      node,
    }
  }

  /// Broadcast a price and wait until its status is terminal.
  ///
  /// The timestamp is caller-supplied (Unix ms at price retrieval).
  ///
  /// # Errors
  /// `InvalidArgument` for an empty symbol or non-positive price,
  /// detected before any I/O; `Transport`/`Protocol` from either
  /// sub-call, unmodified.
  #[instrument(skip(self), fields(symbol = %symbol, price))]
  pub async fn broadcast_and_wait(
    &self,
    symbol: &str,
    price: f64,
    timestamp_ms: i64,
  ) -> Result<BroadcastOutcome, OracleError> {
    let request = TransactionRequest::new(symbol, price, timestamp_ms)?;

    info!("Transaction is broadcasting...");
    let tx_hash = self.node.broadcast_price(&request).await?;

    let status = self.monitor.wait_for_terminal(&tx_hash).await?;

    info!(tx_hash = %tx_hash, status = %status, "Broadcast finished");
    Ok(BroadcastOutcome { tx_hash, status })
  }
}
