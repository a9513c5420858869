//! Sample data fixtures for testing.
//!
//! This module provides a ready-made population snapshot for other crates
//! to use. Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // guanzi-events = { path = "../guanzi-events", features = ["test-fixtures"] }
//!
//! use guanzi_events::fixtures;
//!
//! let snapshot = fixtures::sample_population();
//! ```

use crate::{AgentSnapshot, PopulationSnapshot};

/// Returns the sample population from the fixtures file.
///
/// Contains 6 agents:
/// - agent 0, a rich and generous chieftain with two direct followers
/// - a chain of depth 3 (4 -> 3 -> 1 -> 0)
/// - agent 5, a leaderless outlier far from the cluster
pub fn sample_population() -> PopulationSnapshot {
    let json = include_str!("../tests/fixtures/sample_population.json");
    serde_json::from_str(json).expect("Failed to parse sample_population.json")
}

/// Returns a specific agent by id from the sample population.
pub fn get_agent(id: u32) -> Option<AgentSnapshot> {
    sample_population().find_agent(id).cloned()
}

/// Returns the chieftain (the agent with the most direct followers).
pub fn chieftain() -> AgentSnapshot {
    get_agent(0).expect("Chieftain should exist in fixtures")
}

/// Returns the bottom agent of the depth-3 chain.
pub fn chain_tail() -> AgentSnapshot {
    get_agent(4).expect("Chain tail should exist in fixtures")
}
