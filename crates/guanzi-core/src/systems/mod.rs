//! Per-round update systems: leader selection, movement, sulprus
//! recalculation, and the round engine that applies them synchronously.

pub mod leadership;
pub mod movement;
pub mod round;
pub mod sulprus;

pub use leadership::find_leader_to_follow;
pub use movement::location_closer_to_leader;
pub use round::{run_round, RoundParams, Simulation};
pub use sulprus::calculate_sulprus;
