//! Achievement system types and data structures.

use crate::catalog::AchievementDef;
use crate::core::constants::SCHEMA_VERSION;
use crate::evaluator::GoalProgress;
use crate::milestones::RunStats;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Progress on a single achievement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementProgress {
    pub id: String,
    pub current_value: f64,
    pub is_unlocked: bool,
    /// Unix timestamp (seconds) of the unlock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<i64>,
    pub reward_claimed: bool,
}

impl AchievementProgress {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl GoalProgress for AchievementProgress {
    fn is_complete(&self) -> bool {
        self.is_unlocked
    }

    fn current_value(&self) -> f64 {
        self.current_value
    }

    fn set_current_value(&mut self, value: f64) {
        self.current_value = value;
    }
}

/// What gameplay reports when a run ends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub was_victory: bool,
    pub kills: u64,
    pub level_reached: u32,
    pub survival_time_seconds: f64,
    pub world_level: u32,
    pub damage_dealt: f64,
    pub damage_taken: f64,
    pub gold_earned: u64,
}

/// Which special victories a run qualified for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub speed_run: bool,
    pub perfect_run: bool,
}

/// Totals and records across every run the player has played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifetimeStats {
    pub total_kills: u64,
    pub total_damage_dealt: f64,
    pub total_crits: u64,
    pub total_play_time_seconds: f64,
    pub runs_started: u64,
    pub runs_completed: u64,
    pub victories: u64,
    pub total_gold_earned: u64,
    pub highest_level: u32,
    pub highest_world_level: u32,
    pub longest_survival_seconds: f64,
    /// Infinite until the first victory. Stored as `null` while infinite.
    #[serde(with = "infinite_as_null")]
    pub fastest_victory_seconds: f64,
    pub perfect_runs: u64,
    pub speed_runs: u64,
    /// Fields written by a newer build, carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for LifetimeStats {
    fn default() -> Self {
        Self {
            total_kills: 0,
            total_damage_dealt: 0.0,
            total_crits: 0,
            total_play_time_seconds: 0.0,
            runs_started: 0,
            runs_completed: 0,
            victories: 0,
            total_gold_earned: 0,
            highest_level: 0,
            highest_world_level: 0,
            longest_survival_seconds: 0.0,
            fastest_victory_seconds: f64::INFINITY,
            perfect_runs: 0,
            speed_runs: 0,
            extra: BTreeMap::new(),
        }
    }
}

impl LifetimeStats {
    /// Fold a finished run into the lifetime totals.
    ///
    /// Sums for cumulative fields, max/min for records. Speed and perfect
    /// counters are bumped here; the returned outcome tells the caller
    /// which incremental goals to feed.
    pub fn fold_run(
        &mut self,
        summary: &RunSummary,
        run: &RunStats,
        speed_run_threshold_seconds: f64,
    ) -> RunOutcome {
        let survival_known = summary.survival_time_seconds.is_finite();
        let survival = finite_or_zero("survival_time_seconds", summary.survival_time_seconds);
        let damage_dealt = finite_or_zero("damage_dealt", summary.damage_dealt);
        let damage_taken_known = summary.damage_taken.is_finite();
        if !damage_taken_known {
            warn!(value = summary.damage_taken, "Ignoring non-finite damage_taken");
        }

        self.total_kills = self.total_kills.saturating_add(summary.kills);
        self.total_damage_dealt = add_finite(self.total_damage_dealt, damage_dealt);
        self.total_crits = self.total_crits.saturating_add(run.crits);
        self.total_play_time_seconds = add_finite(self.total_play_time_seconds, survival);
        self.runs_completed = self.runs_completed.saturating_add(1);
        self.total_gold_earned = self.total_gold_earned.saturating_add(summary.gold_earned);

        self.highest_level = self.highest_level.max(summary.level_reached);
        self.highest_world_level = self.highest_world_level.max(summary.world_level);
        self.longest_survival_seconds = self.longest_survival_seconds.max(survival);

        let mut outcome = RunOutcome::default();
        if summary.was_victory {
            self.victories = self.victories.saturating_add(1);
            if survival_known {
                self.fastest_victory_seconds = self.fastest_victory_seconds.min(survival);
            }

            if survival_known && survival < speed_run_threshold_seconds {
                self.speed_runs = self.speed_runs.saturating_add(1);
                outcome.speed_run = true;
            }
            if damage_taken_known && summary.damage_taken <= 0.0 {
                self.perfect_runs = self.perfect_runs.saturating_add(1);
                outcome.perfect_run = true;
            }
        }
        outcome
    }
}

/// NaN and infinities cannot be saved as plain numbers; count them as zero.
fn finite_or_zero(field: &'static str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(field, value, "Ignoring non-finite run value");
        0.0
    }
}

/// Adds `value` unless the total would stop being finite.
fn add_finite(total: f64, value: f64) -> f64 {
    let sum = total + value;
    if sum.is_finite() {
        sum
    } else {
        total
    }
}

/// The unit of durability: everything written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentState {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub achievements: HashMap<String, AchievementProgress>,
    #[serde(default)]
    pub lifetime_stats: LifetimeStats,
}

impl PersistentState {
    /// Zeroed state with a record for every achievement.
    pub fn new(achievements: &[AchievementDef]) -> Self {
        Self {
            version: SCHEMA_VERSION,
            achievements: achievements
                .iter()
                .map(|def| (def.id.to_string(), AchievementProgress::new(def.id)))
                .collect(),
            lifetime_stats: LifetimeStats::default(),
        }
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.achievements.get(id).is_some_and(|p| p.is_unlocked)
    }

    /// Number of catalog achievements that are unlocked.
    pub fn unlocked_count(&self, achievements: &[AchievementDef]) -> usize {
        achievements
            .iter()
            .filter(|def| self.is_unlocked(def.id))
            .count()
    }
}

mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::ALL_ACHIEVEMENTS;

    fn victory(seconds: f64, damage_taken: f64) -> RunSummary {
        RunSummary {
            was_victory: true,
            kills: 400,
            level_reached: 18,
            survival_time_seconds: seconds,
            world_level: 1,
            damage_dealt: 12_000.0,
            damage_taken,
            gold_earned: 75,
        }
    }

    #[test]
    fn test_new_state_has_every_achievement() {
        let state = PersistentState::new(ALL_ACHIEVEMENTS);
        assert_eq!(state.version, SCHEMA_VERSION);
        assert_eq!(state.achievements.len(), ALL_ACHIEVEMENTS.len());
        assert_eq!(state.unlocked_count(ALL_ACHIEVEMENTS), 0);
        assert!(state.lifetime_stats.fastest_victory_seconds.is_infinite());
    }

    #[test]
    fn test_fold_sums_and_extremes() {
        let mut stats = LifetimeStats::default();
        let run = RunStats {
            crits: 12,
            ..RunStats::default()
        };

        stats.fold_run(&victory(700.0, 50.0), &run, 480.0);
        stats.fold_run(
            &RunSummary {
                kills: 100,
                level_reached: 9,
                survival_time_seconds: 200.0,
                world_level: 3,
                ..RunSummary::default()
            },
            &run,
            480.0,
        );

        assert_eq!(stats.total_kills, 500);
        assert_eq!(stats.total_crits, 24);
        assert_eq!(stats.runs_completed, 2);
        assert_eq!(stats.victories, 1);
        assert_eq!(stats.total_gold_earned, 75);
        assert_eq!(stats.highest_level, 18);
        assert_eq!(stats.highest_world_level, 3);
        assert_eq!(stats.longest_survival_seconds, 700.0);
        assert_eq!(stats.fastest_victory_seconds, 700.0);
        assert_eq!(stats.total_play_time_seconds, 900.0);
    }

    #[test]
    fn test_fold_fast_flawless_victory() {
        let mut stats = LifetimeStats::default();
        let outcome = stats.fold_run(&victory(300.0, 0.0), &RunStats::default(), 480.0);
        assert_eq!(
            outcome,
            RunOutcome {
                speed_run: true,
                perfect_run: true
            }
        );
        assert_eq!(stats.speed_runs, 1);
        assert_eq!(stats.perfect_runs, 1);
        assert_eq!(stats.fastest_victory_seconds, 300.0);
    }

    #[test]
    fn test_speed_threshold_is_exclusive() {
        let mut stats = LifetimeStats::default();
        let outcome = stats.fold_run(&victory(480.0, 10.0), &RunStats::default(), 480.0);
        assert!(!outcome.speed_run);
        assert_eq!(stats.speed_runs, 0);
    }

    #[test]
    fn test_defeat_never_counts_as_special() {
        let mut stats = LifetimeStats::default();
        let summary = RunSummary {
            was_victory: false,
            survival_time_seconds: 100.0,
            ..RunSummary::default()
        };
        let outcome = stats.fold_run(&summary, &RunStats::default(), 480.0);
        assert_eq!(outcome, RunOutcome::default());
        assert!(stats.fastest_victory_seconds.is_infinite());
        assert_eq!(stats.victories, 0);
    }

    #[test]
    fn test_fastest_victory_only_lowers() {
        let mut stats = LifetimeStats::default();
        stats.fold_run(&victory(300.0, 5.0), &RunStats::default(), 480.0);
        stats.fold_run(&victory(900.0, 5.0), &RunStats::default(), 480.0);
        assert_eq!(stats.fastest_victory_seconds, 300.0);
    }

    #[test]
    fn test_fold_ignores_non_finite_run_values() {
        let mut stats = LifetimeStats::default();
        let summary = RunSummary {
            damage_dealt: f64::NAN,
            survival_time_seconds: f64::INFINITY,
            damage_taken: f64::NAN,
            ..victory(0.0, 0.0)
        };

        let outcome = stats.fold_run(&summary, &RunStats::default(), 480.0);
        assert_eq!(outcome, RunOutcome::default());
        assert_eq!(stats.victories, 1);
        assert_eq!(stats.total_kills, 400);
        assert_eq!(stats.total_damage_dealt, 0.0);
        assert_eq!(stats.total_play_time_seconds, 0.0);
        assert_eq!(stats.longest_survival_seconds, 0.0);
        assert!(stats.fastest_victory_seconds.is_infinite());

        let json = serde_json::to_string(&stats).unwrap();
        let reloaded: LifetimeStats = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, stats);
    }

    #[test]
    fn test_fold_keeps_float_totals_finite() {
        let mut stats = LifetimeStats::default();
        let huge = RunSummary {
            damage_dealt: f64::MAX,
            ..RunSummary::default()
        };
        stats.fold_run(&huge, &RunStats::default(), 480.0);
        stats.fold_run(&huge, &RunStats::default(), 480.0);
        assert_eq!(stats.total_damage_dealt, f64::MAX);
    }

    #[test]
    fn test_fold_saturates_counters() {
        let mut stats = LifetimeStats {
            total_kills: u64::MAX - 1,
            total_gold_earned: u64::MAX,
            ..LifetimeStats::default()
        };
        let summary = RunSummary {
            kills: 10,
            gold_earned: 10,
            ..RunSummary::default()
        };
        let run = RunStats {
            crits: u64::MAX,
            ..RunStats::default()
        };

        stats.fold_run(&summary, &run, 480.0);
        stats.fold_run(&summary, &run, 480.0);
        assert_eq!(stats.total_kills, u64::MAX);
        assert_eq!(stats.total_gold_earned, u64::MAX);
        assert_eq!(stats.total_crits, u64::MAX);
        assert_eq!(stats.runs_completed, 2);
    }

    #[test]
    fn test_infinite_fastest_victory_serializes_as_null() {
        let json = serde_json::to_value(LifetimeStats::default()).unwrap();
        assert!(json["fastestVictorySeconds"].is_null());

        let parsed: LifetimeStats = serde_json::from_value(json).unwrap();
        assert!(parsed.fastest_victory_seconds.is_infinite());
    }

    #[test]
    fn test_unknown_lifetime_fields_survive() {
        let json = r#"{"totalKills": 5, "bestCombo": 42}"#;
        let parsed: LifetimeStats = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.total_kills, 5);
        assert_eq!(parsed.extra["bestCombo"], serde_json::json!(42));

        let written = serde_json::to_value(&parsed).unwrap();
        assert_eq!(written["bestCombo"], serde_json::json!(42));
    }

    #[test]
    fn test_progress_wire_format() {
        let progress = AchievementProgress {
            id: "slayer_1".to_string(),
            current_value: 100.0,
            is_unlocked: true,
            unlocked_at: Some(1_700_000_000),
            reward_claimed: false,
        };
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["currentValue"], serde_json::json!(100.0));
        assert_eq!(json["isUnlocked"], serde_json::json!(true));
        assert_eq!(json["unlockedAt"], serde_json::json!(1_700_000_000));
        assert_eq!(json["rewardClaimed"], serde_json::json!(false));

        let locked = serde_json::to_value(AchievementProgress::new("x")).unwrap();
        assert!(locked.get("unlockedAt").is_none());
    }
}
