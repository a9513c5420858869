//! Round Engine
//!
//! One synchronous update of the whole population. Every agent's new state
//! is computed against the frozen pre-round snapshot, then all results are
//! swapped in at once; no agent observes another agent's new state within
//! the same round.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::components::{Agent, Population};
use crate::config::Config;
use crate::systems::leadership::find_leader_to_follow;
use crate::systems::movement::location_closer_to_leader;
use crate::systems::sulprus::calculate_sulprus;

/// Numeric parameters consumed by one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundParams {
    pub move_coefficient: f64,
    pub growth_rate: f64,
    pub modifier_rate_min: f64,
    pub modifier_rate_max: f64,
}

impl RoundParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            move_coefficient: config.movement.move_coefficient,
            growth_rate: config.sulprus.growth_rate,
            modifier_rate_min: config.sulprus.modifier_rate_min,
            modifier_rate_max: config.sulprus.modifier_rate_max,
        }
    }
}

/// Computes the next population from the frozen snapshot.
///
/// Agents are processed in id order; the only order-sensitive part is the
/// RNG draw inside the sulprus update (one uniform draw per agent), which
/// keeps runs reproducible for a given seed.
pub fn run_round(population: &Population, params: &RoundParams, rng: &mut SmallRng) -> Population {
    let mut next = Vec::with_capacity(population.len());

    for old_agent in population.iter() {
        let new_leader = find_leader_to_follow(population, old_agent);
        let leader = new_leader.and_then(|id| population.get(id));

        let new_location = location_closer_to_leader(old_agent, leader, params.move_coefficient);
        let new_sulprus = calculate_sulprus(
            old_agent,
            population,
            params.growth_rate,
            params.modifier_rate_min,
            params.modifier_rate_max,
            rng,
        );

        next.push(Agent::new(
            old_agent.id,
            new_sulprus,
            old_agent.generosity,
            new_location,
            new_leader,
        ));
    }

    Population::new(next)
}

/// Owns the evolving population, round parameters and the seeded RNG.
pub struct Simulation {
    population: Population,
    params: RoundParams,
    rng: SmallRng,
    round: u64,
}

impl Simulation {
    pub fn new(population: Population, params: RoundParams, seed: u64) -> Self {
        Self {
            population,
            params,
            rng: SmallRng::seed_from_u64(seed),
            round: 0,
        }
    }

    /// The current snapshot.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Rounds completed so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Advances one round and returns the new snapshot.
    pub fn step(&mut self) -> &Population {
        self.population = run_round(&self.population, &self.params, &mut self.rng);
        self.round += 1;
        tracing::debug!(round = self.round, agents = self.population.len(), "round complete");
        &self.population
    }
}
