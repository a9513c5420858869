//! Movement
//!
//! Positional update: each round an agent covers a fixed fraction of the
//! distance to its leader. Leaderless agents stay put.

use crate::components::Agent;

/// Returns the agent's location for the next round.
///
/// The two branches are the same linear interpolation written from either
/// side of the leader: both equal `agent + c * (leader - agent)` for
/// `c` in [0, 1].
pub fn location_closer_to_leader(
    agent: &Agent,
    leader: Option<&Agent>,
    move_coefficient: f64,
) -> f64 {
    let Some(leader) = leader else {
        return agent.location;
    };

    let agent_loc = agent.location;
    let leader_loc = leader.location;
    if agent_loc < leader_loc {
        (leader_loc - agent_loc) * move_coefficient + agent_loc
    } else {
        (agent_loc - leader_loc) * (1.0 - move_coefficient) + leader_loc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AgentId;

    fn agent_at(id: u32, location: f64) -> Agent {
        Agent::new(AgentId(id), 1000.0, 0.05, location, None)
    }

    #[test]
    fn test_no_leader_means_no_movement() {
        let agent = agent_at(0, 42.5);
        assert_eq!(location_closer_to_leader(&agent, None, 0.3), 42.5);
    }

    #[test]
    fn test_moves_fraction_toward_leader_from_left() {
        let agent = agent_at(0, 0.0);
        let leader = agent_at(1, 100.0);
        assert_eq!(location_closer_to_leader(&agent, Some(&leader), 0.3), 30.0);
    }

    #[test]
    fn test_moves_fraction_toward_leader_from_right() {
        let agent = agent_at(0, 100.0);
        let leader = agent_at(1, 0.0);
        assert_eq!(location_closer_to_leader(&agent, Some(&leader), 0.3), 70.0);
    }

    #[test]
    fn test_zero_coefficient_is_identity() {
        let agent = agent_at(0, 25.0);
        let leader = agent_at(1, 100.0);
        assert_eq!(location_closer_to_leader(&agent, Some(&leader), 0.0), 25.0);
    }

    #[test]
    fn test_full_coefficient_lands_on_leader() {
        let leader = agent_at(1, 64.0);

        let from_left = agent_at(0, 0.0);
        assert_eq!(location_closer_to_leader(&from_left, Some(&leader), 1.0), 64.0);

        let from_right = agent_at(2, 1000.0);
        assert_eq!(location_closer_to_leader(&from_right, Some(&leader), 1.0), 64.0);
    }

    #[test]
    fn test_movement_is_monotone_toward_leader() {
        let leader = agent_at(1, 500.0);
        for coefficient in [0.1, 0.3, 0.5, 0.9] {
            let agent = agent_at(0, 100.0);
            let moved = location_closer_to_leader(&agent, Some(&leader), coefficient);
            let old_distance = (leader.location - agent.location).abs();
            let new_distance = (leader.location - moved).abs();
            assert!(
                new_distance < old_distance,
                "coefficient {} should strictly shrink the distance",
                coefficient
            );
        }
    }

    #[test]
    fn test_agent_on_leader_stays_there() {
        let agent = agent_at(0, 500.0);
        let leader = agent_at(1, 500.0);
        assert_eq!(location_closer_to_leader(&agent, Some(&leader), 0.3), 500.0);
    }
}
