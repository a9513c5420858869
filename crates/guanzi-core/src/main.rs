//! Guanzi Simulation Engine
//!
//! A terrarium-style experiment where agents on a one-dimensional axis
//! adopt generous, wealthy leaders, drift toward them, and pay for their
//! own followers — producing emergent hierarchies and spatial clustering.

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use guanzi_core::config::Config;
use guanzi_core::output::{self, SnapshotGenerator};
use guanzi_core::setup;
use guanzi_core::systems::{RoundParams, Simulation};
use guanzi_events::MetricsHistory;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "guanzi_sim")]
#[command(about = "Leader/follower hierarchy emergence on a 1-D axis")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of rounds to simulate (overrides tuning.toml)
    #[arg(long)]
    rounds: Option<u64>,

    /// Population size (overrides tuning.toml)
    #[arg(long)]
    people: Option<usize>,

    /// Path to the tuning file
    #[arg(long, default_value = guanzi_core::config::DEFAULT_TUNING_PATH)]
    tuning: String,

    /// Per-round console density field style
    #[arg(long, value_enum, default_value_t = FieldStyle::Dots)]
    field: FieldStyle,

    /// Interval between population snapshots (in rounds, overrides tuning.toml)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Output the initial population as JSON before running
    #[arg(long)]
    output_initial_state: bool,
}

/// How to render agent density each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FieldStyle {
    Dots,
    Counts,
    None,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // An explicit --tuning path must exist; only the default path may fall
    // back to built-in defaults.
    let mut config = if args.tuning == guanzi_core::config::DEFAULT_TUNING_PATH {
        Config::load_or_default()
    } else {
        match Config::load(&args.tuning) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Error: could not load {}: {}", args.tuning, e);
                std::process::exit(1);
            }
        }
    };
    if let Some(rounds) = args.rounds {
        config.simulation.rounds = rounds;
    }
    if let Some(people) = args.people {
        config.simulation.num_people = people;
    }
    if let Some(interval) = args.snapshot_interval {
        config.simulation.snapshot_interval = interval;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Guanzi Simulation Engine");
    println!("========================");
    println!("Seed: {}", args.seed);
    println!("Rounds: {}", config.simulation.rounds);
    println!("People: {}", config.simulation.num_people);
    println!("Move coefficient: {}", config.movement.move_coefficient);
    println!();

    // Spawn the starting population
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let population = setup::spawn_population(&config, &mut rng);

    let params = RoundParams::from_config(&config);
    let mut simulation = Simulation::new(population, params, args.seed.wrapping_add(1));
    let mut generator = SnapshotGenerator::new(config.simulation.snapshot_interval);
    let mut metrics = MetricsHistory::new();

    // Initial snapshot (round 0)
    let initial =
        output::snapshot_population(simulation.population(), generator.next_id(), 0, "simulation_start");
    if args.output_initial_state {
        match initial.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Warning: Could not serialize initial state: {}", e),
        }
    }
    if let Err(e) = output::write_snapshot_to_dir(&initial) {
        eprintln!("Warning: Could not write initial snapshot: {}", e);
    }
    if let Err(e) = output::write_current_state(&initial) {
        eprintln!("Warning: Could not write current state: {}", e);
    }

    println!("Starting simulation...");
    println!();

    let field_min = config.agents.location_min as f64;
    let field_max = config.agents.location_max as f64;

    // Main round loop
    for round in 1..=config.simulation.rounds {
        let population = simulation.step();

        match args.field {
            FieldStyle::Dots => {
                let counts = output::density_field(population, field_min, field_max, output::FIELD_SIZE);
                println!("{}", output::render_dots(&counts));
            }
            FieldStyle::Counts => {
                let counts = output::density_field(population, field_min, field_max, output::FIELD_SIZE);
                println!("{}", output::render_counts(&counts));
            }
            FieldStyle::None => {}
        }

        metrics.record(output::round_metrics(population, round));

        if generator.should_snapshot(round) {
            let snapshot =
                output::snapshot_population(population, generator.next_id(), round, "periodic");
            if let Err(e) = output::write_snapshot_to_dir(&snapshot) {
                eprintln!("Warning: Could not write snapshot at round {}: {}", round, e);
            }
            if let Err(e) = output::write_current_state(&snapshot) {
                eprintln!("Warning: Could not write current state: {}", e);
            }
        }
    }

    // Final snapshot and metrics history
    let final_snapshot = output::snapshot_population(
        simulation.population(),
        generator.next_id(),
        config.simulation.rounds,
        "simulation_end",
    );
    if let Err(e) = output::write_snapshot_to_dir(&final_snapshot) {
        eprintln!("Warning: Could not write final snapshot: {}", e);
    }
    if let Err(e) = output::write_current_state(&final_snapshot) {
        eprintln!("Warning: Could not write final current state: {}", e);
    }
    if let Err(e) = output::write_metrics(&metrics) {
        eprintln!("Warning: Could not write metrics history: {}", e);
    }

    println!();
    println!(
        "Simulation complete. Ran {} rounds over {} agents.",
        simulation.round(),
        simulation.population().len()
    );
    if let Some(last) = metrics.rounds.last() {
        println!(
            "Final spread: {:.2}, leaderless: {}, deepest hierarchy: {}",
            last.location_pstdev, last.leaderless_count, last.max_hierarchy_depth
        );
    }
    println!("Generated {} snapshots.", generator.snapshot_count());
}
