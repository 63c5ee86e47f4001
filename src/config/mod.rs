//! Configuration Module - TOML-based Broadcaster Configuration
//!
//! Loads and validates configuration from `config.toml`. Node endpoint,
//! polling budget, and the submission work list are all externalized
//! here - nothing is hardcoded in the domain layer.

pub mod loader;

use serde::Deserialize;

/// Top-level broadcaster configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before the first broadcast.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Process identity and logging.
  pub bot: BotConfig,
  /// Oracle node API endpoint.
  pub api: ApiConfig,
  /// Status polling parameters.
  #[serde(default)]
  pub monitor: MonitorConfig,
  /// Symbol/price pairs to broadcast, in order.
  pub submissions: Vec<SubmissionConfig>,
}

/// Process identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
  /// Human-readable process name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// API endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// Oracle node REST API base URL.
  pub base_url: String,
  /// Request timeout in milliseconds.
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
}

/// Status polling configuration.
///
/// Mirrors the monitor's runtime parameters; the fixed 5-second poll
/// cadence and 12-retry budget live here rather than in code.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
  /// Fixed delay between status checks (milliseconds).
  #[serde(default = "default_poll_interval_ms")]
  pub poll_interval_ms: u64,
  /// Re-checks allowed while still pending, beyond the initial check.
  #[serde(default = "default_max_retries")]
  pub max_retries: u32,
}

impl Default for MonitorConfig {
  fn default() -> Self {
    Self {
      poll_interval_ms: default_poll_interval_ms(),
      max_retries: default_max_retries(),
    }
  }
}

/// A single symbol/price pair to broadcast.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
  /// Asset symbol, e.g. `BTC`.
  pub symbol: String,
  /// Price to report.
  pub price: f64,
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_timeout_ms() -> u64 {
  30_000
}

fn default_poll_interval_ms() -> u64 {
  5_000
}

fn default_max_retries() -> u32 {
  12
}
