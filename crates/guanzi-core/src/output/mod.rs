//! Output surfaces: per-round statistics, console density field, and JSON
//! snapshots for external analysis and plotting.

pub mod field;
pub mod snapshot;
pub mod stats;

pub use field::{density_field, render_counts, render_dots, FIELD_SIZE};
pub use snapshot::{
    population_from_snapshot, snapshot_population, write_current_state, write_snapshot_to_dir,
    SnapshotError, SnapshotGenerator,
};
pub use stats::{location_pstdev, round_metrics, write_metrics};
