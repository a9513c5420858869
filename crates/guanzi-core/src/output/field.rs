//! Density Field
//!
//! Console rendering of agent density along the axis: the population is
//! bucketed into a fixed-width field and printed one line per round, which
//! makes clustering around leaders visible at a glance.

use crate::components::Population;

/// Buckets across the axis for console rendering.
pub const FIELD_SIZE: usize = 100;

/// Counts agents per bucket over `[location_min, location_max]`.
///
/// Locations at the very top of the range land in the last bucket rather
/// than one past it.
pub fn density_field(
    population: &Population,
    location_min: f64,
    location_max: f64,
    buckets: usize,
) -> Vec<usize> {
    let mut counts = vec![0usize; buckets];
    if buckets == 0 {
        return counts;
    }

    let span = location_max - location_min;
    for agent in population.iter() {
        let fraction = if span > 0.0 {
            ((agent.location - location_min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let bucket = ((fraction * buckets as f64) as usize).min(buckets - 1);
        counts[bucket] += 1;
    }
    counts
}

/// One character per bucket: `.` where anyone stands, space elsewhere.
pub fn render_dots(counts: &[usize]) -> String {
    counts
        .iter()
        .map(|&c| if c == 0 { ' ' } else { '.' })
        .collect()
}

/// Occupied buckets rendered as `-N-`, empty ones as a space.
pub fn render_counts(counts: &[usize]) -> String {
    counts
        .iter()
        .map(|&c| {
            if c == 0 {
                " ".to_string()
            } else {
                format!("-{}-", c)
            }
        })
        .collect()
}
