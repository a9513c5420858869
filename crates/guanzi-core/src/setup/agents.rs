//! Agent Spawning
//!
//! Builds the round-zero population: dense ids, uniformly sampled starting
//! attributes, nobody following anybody yet.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::{Agent, AgentId, Population};
use crate::config::Config;

/// Spawns the starting population described by the config.
///
/// Starting sulprus and location are whole numbers drawn from inclusive
/// ranges; generosity is a uniform float. One agent consumes three draws,
/// in that order, so a given seed always yields the same population.
pub fn spawn_population(config: &Config, rng: &mut SmallRng) -> Population {
    let agents = (0..config.simulation.num_people)
        .map(|i| random_agent(AgentId(i as u32), config, rng))
        .collect();

    let population = Population::new(agents);
    tracing::info!(agents = population.len(), "population spawned");
    population
}

fn random_agent(id: AgentId, config: &Config, rng: &mut SmallRng) -> Agent {
    let sulprus =
        rng.gen_range(config.agents.starting_sulprus_min..=config.agents.starting_sulprus_max);
    let generosity = rng.gen_range(config.agents.generosity_min..=config.agents.generosity_max);
    let location = rng.gen_range(config.agents.location_min..=config.agents.location_max);

    Agent::new(id, f64::from(sulprus), generosity, location as f64, None)
}
