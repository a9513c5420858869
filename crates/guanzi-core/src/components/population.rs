//! Population Snapshot
//!
//! The frozen, id-ordered set of agents for one round. All reads within a
//! round go through one `Population`; the round engine builds the next one
//! from scratch, so no agent ever observes another agent's new state.

use serde::{Deserialize, Serialize};

use super::agent::{Agent, AgentId};

/// An immutable population generation. Agents are stored in id order:
/// `agents[i].id == AgentId(i)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Wraps an id-ordered agent vector.
    pub fn new(agents: Vec<Agent>) -> Self {
        debug_assert!(
            agents.iter().enumerate().all(|(i, a)| a.id.index() == i),
            "population must be id-ordered"
        );
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    /// Looks up an agent by id.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Resolves an agent's current leader within this snapshot.
    pub fn leader_of(&self, agent: &Agent) -> Option<&Agent> {
        agent.leader.and_then(|id| self.get(id))
    }

    /// Number of agents in this snapshot whose leader is `id`.
    pub fn follower_count(&self, id: AgentId) -> usize {
        self.agents.iter().filter(|a| a.follows(id)).count()
    }
}
