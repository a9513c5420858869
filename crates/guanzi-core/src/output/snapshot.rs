//! Snapshot Generation
//!
//! Converts populations to/from their serializable snapshot form and writes
//! periodic snapshot files for external consumers.

use std::fs;
use std::io;
use std::path::Path;

use guanzi_events::{AgentSnapshot, PopulationSnapshot};
use thiserror::Error;

use crate::components::{Agent, AgentId, Population};

/// Directory for periodic snapshot files
pub const SNAPSHOT_DIR: &str = "output/snapshots";
/// Always-current state file, overwritten on every snapshot
pub const CURRENT_STATE_PATH: &str = "output/current_state.json";

/// Tracks snapshot cadence and id sequencing across the run.
pub struct SnapshotGenerator {
    next_snapshot_id: u64,
    snapshot_interval: u64,
}

impl SnapshotGenerator {
    pub fn new(snapshot_interval: u64) -> Self {
        Self {
            next_snapshot_id: 1,
            snapshot_interval,
        }
    }

    pub fn should_snapshot(&self, current_round: u64) -> bool {
        current_round == 0 || current_round % self.snapshot_interval == 0
    }

    pub fn next_id(&mut self) -> String {
        let id = guanzi_events::generate_snapshot_id(self.next_snapshot_id);
        self.next_snapshot_id += 1;
        id
    }

    pub fn snapshot_count(&self) -> u64 {
        self.next_snapshot_id - 1
    }
}

/// Captures the population as a serializable snapshot.
pub fn snapshot_population(
    population: &Population,
    snapshot_id: impl Into<String>,
    round: u64,
    triggered_by: &str,
) -> PopulationSnapshot {
    let mut snapshot = PopulationSnapshot::new(snapshot_id, round, triggered_by);
    snapshot.agents = population
        .iter()
        .map(|a| AgentSnapshot::new(a.id.0, a.sulprus, a.generosity, a.location, a.leader.map(|l| l.0)))
        .collect();
    snapshot
}

/// Rebuilds a population from a snapshot, validating the invariants the
/// engine relies on (dense id ordering, in-range non-self leaders).
pub fn population_from_snapshot(snapshot: &PopulationSnapshot) -> Result<Population, SnapshotError> {
    let count = snapshot.agents.len();

    let mut agents = Vec::with_capacity(count);
    for (index, agent) in snapshot.agents.iter().enumerate() {
        if agent.id as usize != index {
            return Err(SnapshotError::NonDenseIds {
                index,
                found: agent.id,
            });
        }
        if let Some(leader) = agent.leader {
            if leader as usize >= count {
                return Err(SnapshotError::LeaderOutOfRange {
                    agent: agent.id,
                    leader,
                });
            }
            if leader == agent.id {
                return Err(SnapshotError::SelfLeader { agent: agent.id });
            }
        }
        agents.push(Agent::new(
            AgentId(agent.id),
            agent.sulprus,
            agent.generosity,
            agent.location,
            agent.leader.map(AgentId),
        ));
    }

    Ok(Population::new(agents))
}

/// Write a snapshot into the snapshots directory
pub fn write_snapshot_to_dir(snapshot: &PopulationSnapshot) -> io::Result<()> {
    let dir = Path::new(SNAPSHOT_DIR);
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let json = snapshot
        .to_json_pretty()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(dir.join(format!("{}.json", snapshot.snapshot_id)), json)
}

/// Overwrite the always-current state file
pub fn write_current_state(snapshot: &PopulationSnapshot) -> io::Result<()> {
    let json = snapshot
        .to_json_pretty()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(CURRENT_STATE_PATH, json)
}

/// Snapshot decode error type
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("agent at index {index} has id {found}; snapshot ids must be dense and ordered")]
    NonDenseIds { index: usize, found: u32 },
    #[error("agent {agent} references leader {leader} outside the snapshot")]
    LeaderOutOfRange { agent: u32, leader: u32 },
    #[error("agent {agent} is its own leader")]
    SelfLeader { agent: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_population() -> Population {
        Population::new(vec![
            Agent::new(AgentId(0), 1000.0, 0.05, 30.0, Some(AgentId(1))),
            Agent::new(AgentId(1), 5000.0, 0.05, 100.0, None),
        ])
    }

    #[test]
    fn test_snapshot_generator_cadence() {
        let generator = SnapshotGenerator::new(10);
        assert!(generator.should_snapshot(0));
        assert!(generator.should_snapshot(10));
        assert!(generator.should_snapshot(100));
        assert!(!generator.should_snapshot(7));
    }

    #[test]
    fn test_snapshot_generator_ids() {
        let mut generator = SnapshotGenerator::new(10);
        assert_eq!(generator.next_id(), "snap_000001");
        assert_eq!(generator.next_id(), "snap_000002");
        assert_eq!(generator.snapshot_count(), 2);
    }

    #[test]
    fn test_population_snapshot_roundtrip() {
        let population = small_population();
        let snapshot = snapshot_population(&population, "snap_000001", 5, "periodic");

        assert_eq!(snapshot.round, 5);
        assert_eq!(snapshot.agents.len(), 2);
        assert_eq!(snapshot.agents[0].leader, Some(1));

        let rebuilt = population_from_snapshot(&snapshot).unwrap();
        assert_eq!(rebuilt, population);
    }

    #[test]
    fn test_rejects_non_dense_ids() {
        let mut snapshot = snapshot_population(&small_population(), "snap_000001", 0, "test");
        snapshot.agents[1].id = 5;

        assert!(matches!(
            population_from_snapshot(&snapshot),
            Err(SnapshotError::NonDenseIds { index: 1, found: 5 })
        ));
    }

    #[test]
    fn test_rejects_leader_outside_snapshot() {
        let mut snapshot = snapshot_population(&small_population(), "snap_000001", 0, "test");
        snapshot.agents[0].leader = Some(9);

        assert!(matches!(
            population_from_snapshot(&snapshot),
            Err(SnapshotError::LeaderOutOfRange { agent: 0, leader: 9 })
        ));
    }

    #[test]
    fn test_rejects_self_leadership() {
        let mut snapshot = snapshot_population(&small_population(), "snap_000001", 0, "test");
        snapshot.agents[0].leader = Some(0);

        assert!(matches!(
            population_from_snapshot(&snapshot),
            Err(SnapshotError::SelfLeader { agent: 0 })
        ));
    }
}
