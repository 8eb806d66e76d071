//! Headless run simulator.
//!
//! Plays seeded random runs through a [`ProgressTracker`](crate::ProgressTracker)
//! using only the public event API, the same way a game loop would. Useful
//! for tuning goal thresholds and for exercising the tracker end to end.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunResult, SimReport};
pub use runner::{run_simulation, simulate_single_run};
