//! Integration Tests - Broadcast and Monitor Lifecycle
//!
//! Tests the interaction between use cases and a mocked node port.
//! Uses mockall for trait mocking and tokio::test for async tests.

use std::sync::Arc;
use std::time::Duration;

use mockall::mock;
use mockall::predicate::*;

use oracle_broadcaster::domain::transaction::{TransactionRequest, TxHash, TxStatus};
use oracle_broadcaster::error::OracleError;
use oracle_broadcaster::usecases::broadcaster::PriceBroadcaster;
use oracle_broadcaster::usecases::monitor::{MonitorConfig, StatusMonitor};

// ---- Mock Definitions ----

mock! {
    pub Node {}

    #[async_trait::async_trait]
    impl oracle_broadcaster::ports::node::OracleNode for Node {
        async fn broadcast_price(
            &self,
            request: &TransactionRequest,
        ) -> Result<TxHash, OracleError>;

        async fn transaction_status(&self, tx_hash: &str) -> Result<TxStatus, OracleError>;
    }
}

fn fast_config(max_retries: u32) -> MonitorConfig {
    MonitorConfig {
        max_retries,
        poll_interval: Duration::from_millis(1),
    }
}

// ---- Integration Tests ----

#[tokio::test]
async fn test_broadcast_and_wait_returns_hash_and_status() {
    let mut mock_node = MockNode::new();

    mock_node
        .expect_broadcast_price()
        .withf(|request| request.symbol() == "BTC" && request.price() == 1000.0)
        .times(1)
        .returning(|_| Ok("abc123".to_string()));

    mock_node
        .expect_transaction_status()
        .with(eq("abc123"))
        .times(1)
        .returning(|_| Ok(TxStatus::Confirmed));

    let broadcaster = PriceBroadcaster::new(Arc::new(mock_node));
    let outcome = broadcaster
        .broadcast_and_wait("BTC", 1000.0, 1_700_000_000_000)
        .await
        .unwrap();

    assert_eq!(outcome.tx_hash, "abc123");
    assert_eq!(outcome.status, TxStatus::Confirmed);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_node() {
    // No expectations set: any call on the mock panics the test.
    let broadcaster = PriceBroadcaster::new(Arc::new(MockNode::new()));

    for (symbol, price) in [("", 1000.0), ("BTC", 0.0), ("BTC", -3.5), ("BTC", f64::NAN)] {
        let err = broadcaster
            .broadcast_and_wait(symbol, price, 0)
            .await
            .unwrap_err();
        assert!(
            err.is_invalid_argument(),
            "({symbol:?}, {price}) should be rejected before I/O"
        );
    }
}

#[tokio::test]
async fn test_broadcast_error_propagates_without_status_checks() {
    let mut mock_node = MockNode::new();

    mock_node
        .expect_broadcast_price()
        .times(1)
        .returning(|_| Err(OracleError::transport("connection refused")));

    let broadcaster = PriceBroadcaster::new(Arc::new(mock_node));
    let err = broadcaster
        .broadcast_and_wait("ETH", 1111.0, 0)
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_protocol_error_from_status_check_propagates() {
    let mut mock_node = MockNode::new();

    mock_node
        .expect_broadcast_price()
        .times(1)
        .returning(|_| Ok("abc123".to_string()));

    mock_node
        .expect_transaction_status()
        .times(1)
        .returning(|_| Err(OracleError::protocol("status response carries no tx_status")));

    let broadcaster = PriceBroadcaster::new(Arc::new(mock_node));
    let err = broadcaster
        .broadcast_and_wait("ETH", 1111.0, 0)
        .await
        .unwrap_err();

    assert!(matches!(err, OracleError::Protocol(_)));
}

#[tokio::test]
async fn test_monitor_returns_each_terminal_status_unchanged() {
    for terminal in [TxStatus::Confirmed, TxStatus::Failed, TxStatus::DoesNotExist] {
        let mut mock_node = MockNode::new();
        mock_node
            .expect_transaction_status()
            .times(1)
            .returning(move |_| Ok(terminal));

        let monitor = StatusMonitor::new(Arc::new(mock_node));
        let status = monitor.wait_for_terminal("abc123").await.unwrap();

        assert_eq!(status, terminal);
    }
}

#[tokio::test]
async fn test_exhausted_budget_yields_timeout_through_orchestrator() {
    let mut mock_node = MockNode::new();

    mock_node
        .expect_broadcast_price()
        .times(1)
        .returning(|_| Ok("abc123".to_string()));

    // Budget of 2 → exactly 3 pending observations, then TIMEOUT.
    mock_node
        .expect_transaction_status()
        .with(eq("abc123"))
        .times(3)
        .returning(|_| Ok(TxStatus::Pending));

    let broadcaster = PriceBroadcaster::with_config(Arc::new(mock_node), fast_config(2));
    let outcome = broadcaster
        .broadcast_and_wait("BTC", 2222.0, 0)
        .await
        .unwrap();

    assert_eq!(outcome.status, TxStatus::Timeout);
}
