//! Runtally headless run simulator.
//!
//! Plays random runs through a tracker and prints every milestone and
//! achievement it fires, followed by a summary.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulator                         # 10 runs, in-memory
//!   cargo run --bin simulator -- --runs 50 --seed 42  # reproducible batch
//!   cargo run --bin simulator -- --save-dir /tmp/rt   # persist between calls

use clap::Parser;
use runtally::simulator::{run_simulation, SimConfig};
use runtally::{JsonFileStorage, MemoryStorage, ProgressTracker, Storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "simulator", about = "Simulate runs against the goal catalog")]
struct Cli {
    /// Number of runs to play
    #[arg(long, short = 'n', default_value_t = 10)]
    runs: u32,

    /// RNG seed; each run uses seed + run index
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Persist progress as JSON in this directory instead of memory
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Wipe saved progress before simulating
    #[arg(long)]
    reset: bool,

    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = SimConfig {
        num_runs: cli.runs,
        seed: cli.seed,
        ..SimConfig::default()
    };

    match cli.save_dir {
        Some(dir) => simulate(ProgressTracker::new(JsonFileStorage::new(dir)), &config, cli.reset),
        None => simulate(ProgressTracker::new(MemoryStorage::new()), &config, cli.reset),
    }
}

fn simulate<S: Storage>(mut tracker: ProgressTracker<S>, config: &SimConfig, reset: bool) {
    if reset {
        tracker.reset_progress();
    }

    tracker.set_milestone_complete_callback(|def, reward| {
        println!(
            "  {} Milestone: {} (+{} {:?})",
            def.icon, def.name, reward.amount, reward.kind
        );
    });
    tracker.set_achievement_unlock_callback(|def| {
        println!("  {} Achievement unlocked: {}", def.icon, def.name);
    });

    println!("Simulating {} runs...", config.num_runs);
    let report = run_simulation(config, &mut tracker);

    let claimed = tracker.claim_all_rewards();
    if !claimed.is_empty() {
        println!();
        println!("Claimed {} rewards:", claimed.len());
        for reward in &claimed {
            println!("  {:?} {}: {}", reward.kind, reward.amount, reward.description);
        }
    }

    println!();
    report.print_summary();
}
