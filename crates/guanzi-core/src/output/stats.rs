//! Statistics Output
//!
//! Scalar metrics derived from a population snapshot each round, plus the
//! metrics file writer consumed by external plotting.

use std::fs;
use std::io;
use std::path::Path;

use guanzi_events::{MetricsHistory, RoundMetrics};

use crate::components::{AgentId, Population};

/// Metrics output path
pub const METRICS_OUTPUT_PATH: &str = "output/metrics.json";

/// Population standard deviation of agent locations.
///
/// pstdev rather than the sample deviation: the snapshot is the whole
/// population, not a sample of it.
pub fn location_pstdev(population: &Population) -> f64 {
    if population.is_empty() {
        return 0.0;
    }

    let count = population.len() as f64;
    let mean = population.iter().map(|a| a.location).sum::<f64>() / count;
    let variance = population
        .iter()
        .map(|a| (a.location - mean) * (a.location - mean))
        .sum::<f64>()
        / count;
    variance.sqrt()
}

/// Length of the leader chain above an agent; 0 means no leader.
///
/// The walk is capped at the population size: both members of a mutual pair
/// can adopt each other within one synchronous round, and an uncapped walk
/// would never terminate on such a snapshot.
pub fn hierarchy_level(population: &Population, id: AgentId) -> usize {
    let mut level = 0;
    let mut current = population.get(id);

    while let Some(agent) = current.and_then(|a| population.leader_of(a)) {
        level += 1;
        if level >= population.len() {
            break;
        }
        current = Some(agent);
    }
    level
}

/// Deepest leader chain in the population.
pub fn max_hierarchy_depth(population: &Population) -> usize {
    population
        .iter()
        .map(|a| hierarchy_level(population, a.id))
        .max()
        .unwrap_or(0)
}

/// Direct follower count per agent, in id order.
pub fn follower_counts(population: &Population) -> Vec<(AgentId, usize)> {
    population
        .iter()
        .map(|a| (a.id, population.follower_count(a.id)))
        .collect()
}

/// Agents following nobody.
pub fn leaderless_count(population: &Population) -> usize {
    population.iter().filter(|a| a.leader.is_none()).count()
}

/// Mean sulprus across the population; 0 for an empty population.
pub fn mean_sulprus(population: &Population) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|a| a.sulprus).sum::<f64>() / population.len() as f64
}

/// Assembles the per-round metric record.
pub fn round_metrics(population: &Population, round: u64) -> RoundMetrics {
    RoundMetrics {
        round,
        location_pstdev: location_pstdev(population),
        leaderless_count: leaderless_count(population),
        max_hierarchy_depth: max_hierarchy_depth(population),
        mean_sulprus: mean_sulprus(population),
    }
}

/// Write the metrics history to the output file
pub fn write_metrics(history: &MetricsHistory) -> io::Result<()> {
    let output_dir = Path::new("output");
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let json = history
        .to_json_pretty()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    fs::write(METRICS_OUTPUT_PATH, json)?;
    Ok(())
}
