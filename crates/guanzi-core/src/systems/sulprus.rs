//! Sulprus Update
//!
//! Resource recalculation for one agent against the frozen pre-round
//! population: growth, a uniform random perturbation, and the leadership
//! tax paid out to followers.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::{Agent, Population};

/// Returns the agent's sulprus for the next round.
///
/// Followers are counted against the pre-round snapshot; the payout scales
/// with the leader's own sulprus and generosity, not with anything taken
/// from the followers. The result is unclamped and may go negative.
pub fn calculate_sulprus(
    agent: &Agent,
    population: &Population,
    growth_rate: f64,
    modifier_rate_min: f64,
    modifier_rate_max: f64,
    rng: &mut SmallRng,
) -> f64 {
    let follower_count = population.follower_count(agent.id);
    let amount_for_followers = follower_count as f64 * agent.sulprus * agent.generosity;

    let sulprus_after_growth = agent.sulprus * (1.0 + growth_rate);
    let modifier_rate = 1.0 + rng.gen_range(modifier_rate_min..=modifier_rate_max);

    sulprus_after_growth * modifier_rate - amount_for_followers
}
