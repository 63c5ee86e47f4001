//! Oracle Broadcaster — Entry Point
//!
//! Loads configuration, initializes logging, and broadcasts each
//! configured symbol/price pair to the oracle node, waiting for a
//! terminal status before moving to the next.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Create NodeClient (HTTP adapter for the OracleNode port)
//! 4. Create PriceBroadcaster with the configured polling budget
//! 5. Run every submission sequentially; failures don't stop the rest
//! 6. Exit non-zero if any submission failed

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};

mod adapters;
mod config;
mod domain;
mod error;
mod ports;
mod usecases;

use adapters::api::client::{NodeClient, NodeClientConfig};
use usecases::broadcaster::PriceBroadcaster;
use usecases::monitor::MonitorConfig;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.bot.log_level)
                }),
        )
        .json()
        .init();

    info!(
        name = %config.bot.name,
        version = env!("CARGO_PKG_VERSION"),
        submissions = config.submissions.len(),
        "Starting oracle broadcaster"
    );

    // ── 3. Create node HTTP client ──────────────────────────
    let node_config = NodeClientConfig {
        base_url: config.api.base_url.clone(),
        timeout: Duration::from_millis(config.api.timeout_ms),
    };
    let node = Arc::new(
        NodeClient::new(node_config).context("Failed to create node client")?,
    );

    // ── 4. Create broadcaster with configured polling budget ─
    let monitor_config = MonitorConfig {
        max_retries: config.monitor.max_retries,
        poll_interval: Duration::from_millis(config.monitor.poll_interval_ms),
    };
    let broadcaster = PriceBroadcaster::with_config(node, monitor_config);

    // ── 5. Run each configured submission sequentially ──────
    let mut failures = 0usize;
    for submission in &config.submissions {
        let timestamp_ms = Utc::now().timestamp_millis();

        match broadcaster
            .broadcast_and_wait(&submission.symbol, submission.price, timestamp_ms)
            .await
        {
            Ok(outcome) => {
                info!(
                    symbol = %submission.symbol,
                    tx_hash = %outcome.tx_hash,
                    status = %outcome.status,
                    "Submission finished"
                );
            }
            Err(e) => {
                failures += 1;
                error!(symbol = %submission.symbol, error = %e, "Submission failed");
            }
        }
    }

    // ── 6. Report and exit ──────────────────────────────────
    if failures > 0 {
        error!(
            failures,
            total = config.submissions.len(),
            "Finished with failed submissions"
        );
        return Ok(ExitCode::FAILURE);
    }

    info!(total = config.submissions.len(), "All submissions finished");
    Ok(ExitCode::SUCCESS)
}
