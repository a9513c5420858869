//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without
//! recompiling. Defaults reproduce the canonical experiment: 50 people,
//! 100 rounds, a 0..1000 axis.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub agents: AgentConfig,
    pub sulprus: SulprusConfig,
    pub movement: MovementConfig,
}

/// Simulation parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub rounds: u64,
    pub num_people: usize,
    pub snapshot_interval: u64,
}

/// Starting attribute ranges for spawned agents
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    pub generosity_min: f64,
    pub generosity_max: f64,
    pub starting_sulprus_min: u32,
    pub starting_sulprus_max: u32,
    pub location_min: i64,
    pub location_max: i64,
}

/// Sulprus growth and random-event perturbation
#[derive(Debug, Clone, Deserialize)]
pub struct SulprusConfig {
    /// Sulprus growth every round
    pub growth_rate: f64,
    /// Sulprus modifications due to random events
    pub modifier_rate_min: f64,
    pub modifier_rate_max: f64,
}

/// Per-round movement toward the leader
#[derive(Debug, Clone, Deserialize)]
pub struct MovementConfig {
    /// How much of the distance (as a fraction) to cover to the leader each round
    pub move_coefficient: f64,
}

impl Config {
    /// Load configuration from a TOML file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Self =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load tuning.toml: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Check the numeric constraints the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.num_people == 0 {
            return Err(ConfigError::Invalid("num_people must be at least 1".into()));
        }
        if self.simulation.snapshot_interval == 0 {
            return Err(ConfigError::Invalid("snapshot_interval must be at least 1".into()));
        }
        if self.agents.generosity_min > self.agents.generosity_max {
            return Err(ConfigError::Invalid("generosity range is inverted".into()));
        }
        if self.agents.starting_sulprus_min > self.agents.starting_sulprus_max {
            return Err(ConfigError::Invalid("starting sulprus range is inverted".into()));
        }
        if self.agents.location_min >= self.agents.location_max {
            return Err(ConfigError::Invalid("location range must be non-empty".into()));
        }
        if self.sulprus.modifier_rate_min > self.sulprus.modifier_rate_max {
            return Err(ConfigError::Invalid("sulprus modifier range is inverted".into()));
        }
        if !(0.0..=1.0).contains(&self.movement.move_coefficient) {
            return Err(ConfigError::Invalid("move_coefficient must be within [0, 1]".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rounds: 100,
                num_people: 50,
                snapshot_interval: 10,
            },
            agents: AgentConfig {
                generosity_min: 0.01,
                generosity_max: 0.10,
                starting_sulprus_min: 1000,
                starting_sulprus_max: 10000,
                location_min: 0,
                location_max: 1000,
            },
            sulprus: SulprusConfig {
                growth_rate: 0.05,
                modifier_rate_min: -0.20,
                modifier_rate_max: 0.20,
            },
            movement: MovementConfig {
                move_coefficient: 0.3,
            },
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
