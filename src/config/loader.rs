//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  info!(
    submissions = config.submissions.len(),
    base_url = %config.api.base_url,
    poll_interval_ms = config.monitor.poll_interval_ms,
    max_retries = config.monitor.max_retries,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty endpoint URL and positive timeouts
/// - A usable polling cadence
/// - Well-formed submission entries
fn validate_config(config: &AppConfig) -> Result<()> {
  // API validation
  anyhow::ensure!(
    !config.api.base_url.is_empty(),
    "API base_url must not be empty"
  );
  anyhow::ensure!(
    config.api.timeout_ms > 0,
    "API timeout_ms must be positive, got {}",
    config.api.timeout_ms
  );

  // Monitor validation
  anyhow::ensure!(
    config.monitor.poll_interval_ms > 0,
    "Monitor poll_interval_ms must be positive, got {}",
    config.monitor.poll_interval_ms
  );

  // Submission validation
  anyhow::ensure!(
    !config.submissions.is_empty(),
    "At least one submission must be configured"
  );

  for (i, submission) in config.submissions.iter().enumerate() {
    anyhow::ensure!(
      !submission.symbol.is_empty(),
      "Submission {} has empty symbol",
      i
    );
    anyhow::ensure!(
      submission.price.is_finite() && submission.price > 0.0,
      "Submission {} ({}) price must be positive, got {}",
      i,
      submission.symbol,
      submission.price
    );
  }

  Ok(())
}
