//! Guanzi Simulation Engine Library
//!
//! Models the emergence of a leader/follower hierarchy and sulprus flow in a
//! fixed population on a one-dimensional axis. Each round is one synchronous
//! pass: every agent picks a leader, moves toward it, and has its sulprus
//! regrown, perturbed and taxed — all against the frozen previous snapshot.

pub mod components;
pub mod config;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::{Agent, AgentId, Population};
pub use config::Config;
pub use systems::{run_round, RoundParams, Simulation};
