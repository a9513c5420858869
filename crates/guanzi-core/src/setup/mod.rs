//! World initialization: random population sampling.

pub mod agents;

pub use agents::spawn_population;
