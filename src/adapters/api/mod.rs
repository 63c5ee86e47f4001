//! Oracle Node API Adapter
//!
//! Implements the HTTP client for the oracle node's broadcast and
//! status-check endpoints.
//!
//! Sub-modules:
//! - `client`: HTTP client implementing the `OracleNode` port
//! - `types`: API request/response type definitions

pub mod client;
pub mod types;
