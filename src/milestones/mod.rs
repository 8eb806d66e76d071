//! In-run milestones.
//!
//! Milestone progress lives only as long as the current run and is never
//! written to storage.

pub mod run_state;

pub use run_state::{MilestoneProgress, RunState, RunStats};
