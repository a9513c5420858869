//! Agent Entity
//!
//! The immutable per-round value record for one agent. A round never mutates
//! an agent in place; it builds a replacement with updated `sulprus`,
//! `location` and `leader`, carrying `id` and `generosity` forward.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable agent identifier: a dense index into the population vector of the
/// same snapshot generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Position of this agent in the population vector.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One agent of the population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// Redistributed resource. Unclamped; can go negative over many rounds.
    pub sulprus: f64,
    /// Fixed at creation, never mutated.
    pub generosity: f64,
    /// Position on the one-dimensional axis.
    pub location: f64,
    /// Leader within the same snapshot, or none. Never `Some(self.id)`.
    pub leader: Option<AgentId>,
}

impl Agent {
    pub fn new(
        id: AgentId,
        sulprus: f64,
        generosity: f64,
        location: f64,
        leader: Option<AgentId>,
    ) -> Self {
        Self {
            id,
            sulprus,
            generosity,
            location,
            leader,
        }
    }

    /// Attractiveness as a leader: generosity-weighted resource.
    pub fn score(&self) -> f64 {
        self.generosity * self.sulprus
    }

    /// Absolute distance to another agent on the axis.
    pub fn distance_to(&self, other: &Agent) -> f64 {
        (self.location - other.location).abs()
    }

    /// Whether this agent currently follows `id`.
    pub fn follows(&self, id: AgentId) -> bool {
        self.leader == Some(id)
    }
}
