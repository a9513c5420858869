//! Data entities: agents and the per-round population snapshot.

pub mod agent;
pub mod population;

pub use agent::{Agent, AgentId};
pub use population::Population;
