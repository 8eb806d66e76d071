//! Per-run state: milestone progress and run statistics.

use crate::catalog::MilestoneDef;
use crate::evaluator::GoalProgress;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Counters accumulated over a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    pub kills: u64,
    pub damage_dealt: f64,
    pub crits: u64,
    pub minibosses_killed: u64,
    pub bosses_killed: u64,
    pub upgrades_acquired: u64,
    pub weapons_acquired: u64,
    pub damage_taken: f64,
    /// Hits that left the player below the low-HP fraction. Drives no goal yet.
    pub times_low_hp: u64,
}

/// Progress on a single milestone during the current run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub id: String,
    pub current_value: f64,
    pub is_completed: bool,
    /// Seconds since run start when the milestone completed.
    pub completed_at: Option<f64>,
}

impl MilestoneProgress {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current_value: 0.0,
            is_completed: false,
            completed_at: None,
        }
    }
}

impl GoalProgress for MilestoneProgress {
    fn is_complete(&self) -> bool {
        self.is_completed
    }

    fn current_value(&self) -> f64 {
        self.current_value
    }

    fn set_current_value(&mut self, value: f64) {
        self.current_value = value;
    }
}

/// Everything that resets when a new run starts.
#[derive(Debug, Clone)]
pub struct RunState {
    pub milestones: HashMap<String, MilestoneProgress>,
    pub stats: RunStats,
    pub started_at: DateTime<Utc>,
    /// Last absolute game time reported by the time tick.
    pub time_survived_seconds: f64,
    /// Last level reported by a level-up. Every run starts at level 1.
    pub level: u32,
}

impl RunState {
    /// Fresh run with a zeroed record for every milestone, starting now.
    pub fn new(milestones: &[MilestoneDef]) -> Self {
        Self::starting_at(milestones, Utc::now())
    }

    pub fn starting_at(milestones: &[MilestoneDef], started_at: DateTime<Utc>) -> Self {
        Self {
            milestones: milestones
                .iter()
                .map(|def| (def.id.to_string(), MilestoneProgress::new(def.id)))
                .collect(),
            stats: RunStats::default(),
            started_at,
            time_survived_seconds: 0.0,
            level: 1,
        }
    }

    /// Wall-clock seconds since the run started.
    pub fn elapsed_seconds(&self) -> f64 {
        let elapsed = Utc::now().signed_duration_since(self.started_at);
        (elapsed.num_milliseconds() as f64 / 1000.0).max(0.0)
    }
}
