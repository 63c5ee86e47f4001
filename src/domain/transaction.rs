//! Price transaction domain types.
//!
//! Defines the request submitted to the oracle node, the status values
//! a broadcast transaction moves through, and the final outcome pair
//! returned to callers.

use serde::{Deserialize, Serialize};

use crate::error::OracleError;

/// Opaque node-assigned transaction identifier used at the ports boundary.
pub type TxHash = String;

/// Status of a broadcast transaction.
///
/// The node reports `Confirmed`, `Failed`, `Pending`, or `DoesNotExist`
/// (wire token `DNE`). `Timeout` is synthesized locally when the polling
/// budget runs out while the node still reports `Pending`; it never
/// arrives on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    /// Transaction accepted into a block.
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    /// Transaction rejected by the node.
    #[serde(rename = "FAILED")]
    Failed,
    /// Transaction still awaiting inclusion.
    #[serde(rename = "PENDING")]
    Pending,
    /// The node has no record of the hash.
    #[serde(rename = "DNE")]
    DoesNotExist,
    /// Polling budget exhausted while still pending.
    #[serde(rename = "TIMEOUT")]
    Timeout,
}

impl TxStatus {
    /// Whether polling stops at this status.
    ///
    /// Every status except `Pending` is terminal.
    pub fn is_terminal(self) -> bool {
        self != Self::Pending
    }
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Pending => write!(f, "PENDING"),
            Self::DoesNotExist => write!(f, "DNE"),
            Self::Timeout => write!(f, "TIMEOUT"),
        }
    }
}

/// A validated price transaction ready for broadcast.
///
/// Constructed only through [`TransactionRequest::new`], which rejects
/// bad input before any I/O happens. Fields are read-only afterwards.
/// The timestamp is an explicit caller-supplied value; this type never
/// reads the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    symbol: String,
    price: f64,
    timestamp_ms: i64,
}

impl TransactionRequest {
    /// Create a validated request.
    ///
    /// # Errors
    /// `InvalidArgument` if the symbol is empty or the price is not a
    /// positive finite number.
    pub fn new(
        symbol: impl Into<String>,
        price: f64,
        timestamp_ms: i64,
    ) -> Result<Self, OracleError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(OracleError::invalid_argument("symbol must not be empty"));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(OracleError::invalid_argument(format!(
                "price must be a positive number, got {price}"
            )));
        }
        Ok(Self {
            symbol,
            price,
            timestamp_ms,
        })
    }

    /// Asset symbol, e.g. `BTC`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Price at retrieval time.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Price retrieval timestamp in Unix milliseconds.
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }
}

/// Final result of a broadcast-and-monitor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastOutcome {
    /// Node-assigned transaction hash.
    pub tx_hash: TxHash,
    /// Terminal status observed (or synthesized) for the transaction.
    pub status: TxStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_valid_input() {
        let request = TransactionRequest::new("BTC", 42000.5, 1_700_000_000_000).unwrap();
        assert_eq!(request.symbol(), "BTC");
        assert_eq!(request.price(), 42000.5);
        assert_eq!(request.timestamp_ms(), 1_700_000_000_000);
    }

    #[test]
    fn test_request_rejects_empty_symbol() {
        let err = TransactionRequest::new("", 100.0, 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_request_rejects_bad_prices() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = TransactionRequest::new("ETH", price, 0).unwrap_err();
            assert!(err.is_invalid_argument(), "price {price} should be rejected");
        }
    }

    #[test]
    fn test_only_pending_is_non_terminal() {
        assert!(TxStatus::Confirmed.is_terminal());
        assert!(TxStatus::Failed.is_terminal());
        assert!(TxStatus::DoesNotExist.is_terminal());
        assert!(TxStatus::Timeout.is_terminal());
        assert!(!TxStatus::Pending.is_terminal());
    }

    #[test]
    fn test_status_display_matches_wire_names() {
        assert_eq!(format!("{}", TxStatus::Confirmed), "CONFIRMED");
        assert_eq!(format!("{}", TxStatus::DoesNotExist), "DNE");
        assert_eq!(format!("{}", TxStatus::Timeout), "TIMEOUT");
    }
}
