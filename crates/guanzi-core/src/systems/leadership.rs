//! Leader Selection
//!
//! Decides, for one agent and the frozen pre-round population, which agent
//! (if any) it follows next round. A candidate's pull is its
//! generosity-weighted sulprus; the closest sufficiently attractive
//! candidate wins.

use crate::components::{Agent, AgentId, Population};

/// Returns the agent's leader for the next round.
///
/// Candidates are scanned by ascending distance from the agent; the first
/// one that is not the agent itself, does not currently follow the agent,
/// and strictly beats the current leader's score is adopted. When no
/// candidate qualifies the current leader is retained, except that a mutual
/// pair (the current leader itself follows this agent) is dissolved to
/// `None` rather than kept.
///
/// Distance ties resolve to the lower id: the sort is stable over the
/// id-ordered population vector.
pub fn find_leader_to_follow(population: &Population, agent: &Agent) -> Option<AgentId> {
    // A leader that follows you is no leader (2-cycle guard).
    let previous_leader = population
        .leader_of(agent)
        .filter(|leader| !leader.follows(agent.id));

    let previous_score = previous_leader.map_or(0.0, Agent::score);

    let mut candidates: Vec<&Agent> = population.iter().collect();
    candidates.sort_by(|a, b| agent.distance_to(a).total_cmp(&agent.distance_to(b)));

    for candidate in candidates {
        if candidate.id != agent.id
            && !candidate.follows(agent.id)
            && candidate.score() > previous_score
        {
            return Some(candidate.id);
        }
    }

    previous_leader.map(|leader| leader.id)
}
