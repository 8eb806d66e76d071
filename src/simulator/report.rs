//! Simulation report generation.

use crate::achievements::{LifetimeStats, RunSummary};
use crate::storage::Storage;
use crate::tracker::ProgressTracker;

/// Outcome of one simulated run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub summary: RunSummary,
    pub milestones_completed: usize,
}

/// Aggregated results from a batch of simulated runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    pub avg_kills: f64,
    pub avg_survival_seconds: f64,
    pub avg_milestones_completed: f64,
    pub achievements_unlocked: usize,
    pub completion_percentage: u32,
    pub lifetime: LifetimeStats,
    pub runs: Vec<RunResult>,
}

impl SimReport {
    /// Build a report from finished runs and the tracker they were played on.
    pub fn from_runs<S: Storage>(runs: Vec<RunResult>, tracker: &ProgressTracker<S>) -> Self {
        let num_runs = runs.len() as u32;
        let victories = runs.iter().filter(|r| r.summary.was_victory).count() as u32;

        let average = |f: &dyn Fn(&RunResult) -> f64| {
            if runs.is_empty() {
                0.0
            } else {
                runs.iter().map(f).sum::<f64>() / runs.len() as f64
            }
        };
        let avg_kills = average(&|r| r.summary.kills as f64);
        let avg_survival_seconds = average(&|r| r.summary.survival_time_seconds);
        let avg_milestones_completed = average(&|r| r.milestones_completed as f64);

        Self {
            num_runs,
            victories,
            avg_kills,
            avg_survival_seconds,
            avg_milestones_completed,
            achievements_unlocked: tracker.unlocked_achievements().len(),
            completion_percentage: tracker.completion_percentage(),
            lifetime: tracker.lifetime_stats(),
            runs,
        }
    }

    /// Print a human-readable summary.
    pub fn print_summary(&self) {
        println!("=== Simulation Report ===");
        println!(
            "Runs: {} ({} victories, {:.1}%)",
            self.num_runs,
            self.victories,
            if self.num_runs == 0 {
                0.0
            } else {
                self.victories as f64 / self.num_runs as f64 * 100.0
            }
        );
        println!("Avg kills:       {:.1}", self.avg_kills);
        println!("Avg survival:    {:.1}s", self.avg_survival_seconds);
        println!("Avg milestones:  {:.1}", self.avg_milestones_completed);
        println!();
        println!("--- Lifetime ---");
        println!("Runs started:    {}", self.lifetime.runs_started);
        println!("Total kills:     {}", self.lifetime.total_kills);
        println!("Highest level:   {}", self.lifetime.highest_level);
        println!("Longest run:     {:.0}s", self.lifetime.longest_survival_seconds);
        if self.lifetime.fastest_victory_seconds.is_finite() {
            println!("Fastest victory: {:.0}s", self.lifetime.fastest_victory_seconds);
        } else {
            println!("Fastest victory: -");
        }
        println!(
            "Speed / perfect: {} / {}",
            self.lifetime.speed_runs, self.lifetime.perfect_runs
        );
        println!();
        println!(
            "Achievements:    {} unlocked ({}%)",
            self.achievements_unlocked, self.completion_percentage
        );
    }
}
