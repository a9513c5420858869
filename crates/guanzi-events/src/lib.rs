//! Shared data types and serialization for the Guanzi simulation.
//!
//! This crate contains pure data structures with no simulation logic:
//! population snapshots and per-round metric records, as produced by the
//! engine and consumed by external plotting/analysis tooling.

pub mod metrics;
pub mod snapshot;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, AgentSnapshot, PopulationSnapshot};

// Re-export metrics types
pub use metrics::{MetricsHistory, RoundMetrics};
