//! Oracle Node API Request/Response Types
//!
//! Serialization types for the node's two endpoints, plus the parsing
//! helpers that turn raw response bodies into domain values. Absent or
//! empty fields are protocol errors, never panics.

use serde::{Deserialize, Serialize};

use crate::domain::transaction::{TransactionRequest, TxHash, TxStatus};
use crate::error::OracleError;

/// Broadcast payload for `POST /broadcast`.
#[derive(Debug, Clone, Serialize)]
pub struct BroadcastRequest {
  /// Asset symbol, e.g. `BTC`.
  pub symbol: String,
  /// Price at retrieval time.
  pub price: f64,
  /// Price retrieval timestamp (Unix ms).
  pub timestamp: i64,
}

impl From<&TransactionRequest> for BroadcastRequest {
  fn from(request: &TransactionRequest) -> Self {
    Self {
      symbol: request.symbol().to_string(),
      price: request.price(),
      timestamp: request.timestamp_ms(),
    }
  }
}

/// Response from `POST /broadcast`.
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastResponse {
  /// Node-assigned transaction hash.
  pub tx_hash: Option<TxHash>,
}

/// Response from `GET /check/{tx_hash}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
  /// Current transaction status.
  pub tx_status: Option<TxStatus>,
}

/// Extract the transaction hash from a broadcast response body.
///
/// # Errors
/// `Protocol` if the body is not the expected JSON shape or the hash
/// is missing or empty.
pub fn parse_broadcast_response(body: &str) -> Result<TxHash, OracleError> {
  let response: BroadcastResponse = serde_json::from_str(body)
    .map_err(|e| OracleError::protocol(format!("unreadable broadcast response: {e}")))?;

  match response.tx_hash {
    Some(hash) if !hash.is_empty() => Ok(hash),
    _ => Err(OracleError::protocol(
      "broadcast response carries no tx_hash",
    )),
  }
}

/// Extract the transaction status from a status response body.
///
/// An unrecognized status token is a protocol error; the node only
/// ever reports `CONFIRMED`, `FAILED`, `PENDING`, or `DNE`.
///
/// # Errors
/// `Protocol` if the body is not the expected JSON shape or the status
/// is missing.
pub fn parse_status_response(body: &str) -> Result<TxStatus, OracleError> {
  let response: StatusResponse = serde_json::from_str(body)
    .map_err(|e| OracleError::protocol(format!("unreadable status response: {e}")))?;

  response
    .tx_status
    .ok_or_else(|| OracleError::protocol("status response carries no tx_status"))
}
