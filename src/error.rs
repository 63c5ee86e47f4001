//! Broadcaster error types.

use thiserror::Error;

/// Errors surfaced by broadcast and status-check operations.
///
/// Three kinds, matching where in the call chain things went wrong:
/// bad caller input (before any I/O), a failed network exchange, or a
/// node response missing the expected field. A `TIMEOUT` poll outcome
/// is a status, not an error.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Caller supplied malformed input. Detected before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The network call could not complete.
    #[error("transport error: {message}")]
    Transport {
        /// What failed, in human terms.
        message: String,
        /// Underlying cause when the failure came from the HTTP stack.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The node responded but the expected field was missing or unusable.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl OracleError {
    /// Build an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Build a `Transport` error with no underlying cause.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Build a `Protocol` error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Check if this is a caller-input error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a transport-layer failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            "request failed".to_string()
        };
        Self::Transport {
            message,
            source: Some(err),
        }
    }
}
