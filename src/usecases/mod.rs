//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain types with the node port to implement the
//! broadcaster's workflows.
//!
//! Use cases:
//! - `StatusMonitor`: bounded transaction status polling
//! - `PriceBroadcaster`: submit-then-monitor orchestration

pub mod broadcaster;
pub mod monitor;
