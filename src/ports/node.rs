//! Oracle Node Port - Remote Transaction Interface
//!
//! Defines the trait for submitting price transactions to the oracle
//! node and querying their status. The HTTP adapter implements it; use
//! cases depend on it so tests can substitute a scripted node.

use async_trait::async_trait;

use crate::domain::transaction::{TransactionRequest, TxHash, TxStatus};
use crate::error::OracleError;

/// Trait for oracle node access.
///
/// Implementors perform exactly one outbound request per call. Retrying
/// is the status monitor's job, and only for `PENDING` observations;
/// neither operation retries on its own.
#[async_trait]
pub trait OracleNode: Send + Sync + 'static {
  /// Submit a price transaction for broadcast.
  ///
  /// Returns the node-assigned transaction hash.
  ///
  /// # Errors
  /// `Transport` if the exchange cannot complete, `Protocol` if the
  /// response carries no usable hash.
  async fn broadcast_price(
    &self,
    request: &TransactionRequest,
  ) -> Result<TxHash, OracleError>;

  /// Query the current status of a previously broadcast transaction.
  ///
  /// Stateless and idempotent; safe to call repeatedly for one hash.
  ///
  /// # Errors
  /// `InvalidArgument` for an empty hash, `Transport` if the exchange
  /// cannot complete, `Protocol` if the response carries no status.
  async fn transaction_status(&self, tx_hash: &str) -> Result<TxStatus, OracleError>;
}
