//! Snapshot Types
//!
//! Serialization structs for population snapshots.
//!
//! Snapshots capture the complete state of the population at the end of a
//! round, used for analysis, resuming, and debugging. The `leader` field is
//! an agent id within the same snapshot, never a live reference.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// One agent as captured at the end of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: u32,
    pub sulprus: f64,
    pub generosity: f64,
    pub location: f64,
    #[serde(default)]
    pub leader: Option<u32>,
}

/// Complete population snapshot for one round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub snapshot_id: String,
    /// Round the snapshot was taken after (0 = initial population).
    pub round: u64,
    pub triggered_by: String,
    pub agents: Vec<AgentSnapshot>,
}

impl PopulationSnapshot {
    /// Creates an empty snapshot with the given identity.
    pub fn new(snapshot_id: impl Into<String>, round: u64, triggered_by: impl Into<String>) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            round,
            triggered_by: triggered_by.into(),
            agents: Vec::new(),
        }
    }

    /// Finds an agent by id.
    pub fn find_agent(&self, id: u32) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Returns the agents whose leader is `id`.
    pub fn followers_of(&self, id: u32) -> Vec<&AgentSnapshot> {
        self.agents.iter().filter(|a| a.leader == Some(id)).collect()
    }

    /// Returns the number of agents with no leader.
    pub fn leaderless_count(&self) -> usize {
        self.agents.iter().filter(|a| a.leader.is_none()).count()
    }

    /// Serializes the snapshot to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the snapshot to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl AgentSnapshot {
    /// Creates a new AgentSnapshot.
    pub fn new(id: u32, sulprus: f64, generosity: f64, location: f64, leader: Option<u32>) -> Self {
        Self {
            id,
            sulprus,
            generosity,
            location,
            leader,
        }
    }
}
