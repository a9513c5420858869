//! Metrics Types
//!
//! Per-round scalar metrics recorded for external plotting. The history is
//! the only state kept across rounds; full population history is not
//! retained.

use serde::{Deserialize, Serialize};

/// Scalar metrics derived from one round's resulting population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundMetrics {
    pub round: u64,
    /// Population standard deviation of agent locations.
    pub location_pstdev: f64,
    /// Agents following nobody.
    pub leaderless_count: usize,
    /// Longest leader chain in the population.
    pub max_hierarchy_depth: usize,
    pub mean_sulprus: f64,
}

/// Accumulated metrics over the whole run, one record per round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsHistory {
    pub rounds: Vec<RoundMetrics>,
}

impl MetricsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one round's metrics. Records are expected in round order.
    pub fn record(&mut self, metrics: RoundMetrics) {
        self.rounds.push(metrics);
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Returns the series of one metric across rounds, for plotting.
    pub fn series(&self, select: impl Fn(&RoundMetrics) -> f64) -> Vec<f64> {
        self.rounds.iter().map(select).collect()
    }

    /// Serializes the history to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a history from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics(round: u64, spread: f64) -> RoundMetrics {
        RoundMetrics {
            round,
            location_pstdev: spread,
            leaderless_count: 3,
            max_hierarchy_depth: 2,
            mean_sulprus: 4500.0,
        }
    }

    #[test]
    fn test_record_and_len() {
        let mut history = MetricsHistory::new();
        assert!(history.is_empty());

        history.record(sample_metrics(0, 290.0));
        history.record(sample_metrics(1, 210.5));

        assert_eq!(history.len(), 2);
        assert_eq!(history.rounds[1].round, 1);
    }

    #[test]
    fn test_series_extraction() {
        let mut history = MetricsHistory::new();
        history.record(sample_metrics(0, 290.0));
        history.record(sample_metrics(1, 210.5));

        let spreads = history.series(|m| m.location_pstdev);
        assert_eq!(spreads, vec![290.0, 210.5]);
    }

    #[test]
    fn test_history_roundtrip() {
        let mut history = MetricsHistory::new();
        history.record(sample_metrics(0, 290.0));

        let json = history.to_json_pretty().unwrap();
        let parsed = MetricsHistory::from_json(&json).unwrap();
        assert_eq!(parsed.rounds, history.rounds);
    }
}
