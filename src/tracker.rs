//! The progress tracker: owns run and persistent state and routes gameplay
//! events through the evaluator.
//!
//! A tracker is built once per game session and passed to whatever drives
//! the game loop. Every operation is synchronous and infallible; storage
//! problems are logged and the in-memory state stays authoritative.
//!
//! ```
//! use runtally::{MemoryStorage, ProgressTracker, RunSummary};
//!
//! let mut tracker = ProgressTracker::new(MemoryStorage::new());
//! tracker.start_new_run();
//! for _ in 0..50 {
//!     tracker.record_kill();
//! }
//! assert!(tracker.milestone_progress("kills_50").unwrap().is_completed);
//!
//! tracker.record_run_end(RunSummary {
//!     kills: 50,
//!     survival_time_seconds: 95.0,
//!     ..RunSummary::default()
//! });
//! assert_eq!(tracker.lifetime_stats().total_kills, 50);
//! ```

use crate::achievements::rewards;
use crate::achievements::{
    load_state, save_state, AchievementProgress, LifetimeStats, PersistentState, RunSummary,
};
use crate::catalog::{
    AchievementCategory, AchievementDef, Catalog, MilestoneDef, Reward, TrackingType,
};
use crate::core::TrackerConfig;
use crate::evaluator;
use crate::milestones::{MilestoneProgress, RunState, RunStats};
use crate::notify::Notifier;
use crate::storage::Storage;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tracks milestones for the current run and achievements for the lifetime.
#[derive(Debug)]
pub struct ProgressTracker<S: Storage> {
    catalog: Arc<Catalog>,
    config: TrackerConfig,
    storage: S,
    run: RunState,
    persistent: PersistentState,
    notifier: Notifier,
    run_active: bool,
}

impl<S: Storage> ProgressTracker<S> {
    /// Tracker over the built-in catalog with default configuration.
    ///
    /// Loads saved progress from `storage` immediately.
    pub fn new(storage: S) -> Self {
        Self::with_catalog(Arc::new(Catalog::builtin()), storage, TrackerConfig::default())
    }

    pub fn with_config(storage: S, config: TrackerConfig) -> Self {
        Self::with_catalog(Arc::new(Catalog::builtin()), storage, config)
    }

    pub fn with_catalog(catalog: Arc<Catalog>, storage: S, config: TrackerConfig) -> Self {
        let persistent = load_state(&storage, &config.storage_key, catalog.achievements());
        let run = RunState::new(catalog.milestones());
        Self {
            catalog,
            config,
            storage,
            run,
            persistent,
            notifier: Notifier::new(),
            run_active: false,
        }
    }

    // =========================================================================
    // Run Lifecycle
    // =========================================================================

    /// Throw away the previous run and start a fresh one now.
    ///
    /// Counts toward lifetime runs started and saves.
    pub fn start_new_run(&mut self) {
        self.run = RunState::new(self.catalog.milestones());
        self.run_active = true;
        self.persistent.lifetime_stats.runs_started += 1;
        info!(
            runs_started = self.persistent.lifetime_stats.runs_started,
            "Run started"
        );
        self.save();
    }

    /// Fold a finished run into lifetime stats and re-check achievements.
    ///
    /// Speed and perfect victories feed their incremental goals once. The
    /// absolute goals are re-checked against lifetime values, except boss
    /// kills, which use the finished run's own count. Always saves.
    pub fn record_run_end(&mut self, summary: RunSummary) {
        self.run_active = false;
        let outcome = self.persistent.lifetime_stats.fold_run(
            &summary,
            &self.run.stats,
            self.config.speed_run_threshold_seconds,
        );
        info!(
            victory = summary.was_victory,
            kills = summary.kills,
            survival_seconds = summary.survival_time_seconds,
            speed_run = outcome.speed_run,
            perfect_run = outcome.perfect_run,
            "Run ended"
        );

        if outcome.speed_run {
            self.check_achievement_progress(TrackingType::SpeedRun, 1.0);
        }
        if outcome.perfect_run {
            self.check_achievement_progress(TrackingType::PerfectRun, 1.0);
        }

        let lifetime = &self.persistent.lifetime_stats;
        let checks = [
            (TrackingType::Kills, lifetime.total_kills as f64),
            (TrackingType::TimeSurvived, lifetime.longest_survival_seconds),
            (TrackingType::Victories, lifetime.victories as f64),
            (TrackingType::BossesKilled, self.run.stats.bosses_killed as f64),
            (TrackingType::RunsStarted, lifetime.runs_started as f64),
            (TrackingType::WorldLevel, lifetime.highest_world_level as f64),
            (TrackingType::Level, lifetime.highest_level as f64),
        ];
        for (tracking, value) in checks {
            self.update_achievement_progress(tracking, value);
        }

        self.save();
    }

    // =========================================================================
    // In-Run Event Recording
    // =========================================================================

    pub fn record_kill(&mut self) {
        self.run.stats.kills += 1;
        self.check_milestone_progress(TrackingType::Kills, self.run.stats.kills as f64);
    }

    pub fn record_miniboss_kill(&mut self) {
        self.run.stats.minibosses_killed += 1;
        self.check_milestone_progress(
            TrackingType::MinibossesKilled,
            self.run.stats.minibosses_killed as f64,
        );
    }

    pub fn record_boss_kill(&mut self) {
        self.run.stats.bosses_killed += 1;
        self.check_milestone_progress(
            TrackingType::BossesKilled,
            self.run.stats.bosses_killed as f64,
        );
    }

    pub fn record_damage_dealt(&mut self, amount: f64, is_crit: bool) {
        self.run.stats.damage_dealt += amount;
        self.check_milestone_progress(TrackingType::DamageDealt, self.run.stats.damage_dealt);

        if is_crit {
            self.run.stats.crits += 1;
            self.check_milestone_progress(TrackingType::Crits, self.run.stats.crits as f64);
        }
    }

    /// `health_fraction` is the player's remaining health after the hit, 0.0..=1.0.
    pub fn record_damage_taken(&mut self, amount: f64, health_fraction: f64) {
        self.run.stats.damage_taken += amount;
        if health_fraction < self.config.low_hp_fraction {
            self.run.stats.times_low_hp += 1;
        }
    }

    /// Report absolute game time in seconds, not a delta.
    pub fn record_time_survived(&mut self, seconds: f64) {
        self.run.time_survived_seconds = seconds;
        self.check_milestone_progress(TrackingType::TimeSurvived, seconds);
    }

    pub fn record_level_up(&mut self, level: u32) {
        self.run.level = level;
        self.check_milestone_progress(TrackingType::Level, level as f64);
    }

    pub fn record_upgrade_acquired(&mut self) {
        self.run.stats.upgrades_acquired += 1;
        self.check_milestone_progress(
            TrackingType::UpgradesAcquired,
            self.run.stats.upgrades_acquired as f64,
        );
    }

    pub fn record_weapon_acquired(&mut self) {
        self.run.stats.weapons_acquired += 1;
        self.check_milestone_progress(
            TrackingType::WeaponsAcquired,
            self.run.stats.weapons_acquired as f64,
        );
    }

    // =========================================================================
    // Evaluation and Triggers
    // =========================================================================

    /// Absolute-mode check of this run's milestones.
    pub fn check_milestone_progress(&mut self, tracking: TrackingType, value: f64) {
        let catalog = Arc::clone(&self.catalog);
        let crossed =
            evaluator::apply_absolute(catalog.milestones(), &mut self.run.milestones, tracking, value);
        for id in crossed {
            self.complete_milestone(id);
        }
    }

    /// Absolute-mode check of lifetime achievements. Idempotent.
    pub fn update_achievement_progress(&mut self, tracking: TrackingType, value: f64) {
        let catalog = Arc::clone(&self.catalog);
        let crossed = evaluator::apply_absolute(
            catalog.achievements(),
            &mut self.persistent.achievements,
            tracking,
            value,
        );
        for id in crossed {
            self.unlock_achievement(id);
        }
    }

    /// Incremental-mode check of lifetime achievements.
    ///
    /// Every call adds `increment` again; report each qualifying event once.
    pub fn check_achievement_progress(&mut self, tracking: TrackingType, increment: f64) {
        let catalog = Arc::clone(&self.catalog);
        let crossed = evaluator::apply_increment(
            catalog.achievements(),
            &mut self.persistent.achievements,
            tracking,
            increment,
        );
        for id in crossed {
            self.unlock_achievement(id);
        }
    }

    /// Complete a milestone. Returns true if newly completed.
    ///
    /// Unknown ids and already-completed milestones are ignored.
    pub fn complete_milestone(&mut self, id: &str) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let def = match catalog.milestone(id) {
            Some(def) => def,
            None => return false,
        };
        let elapsed = self.run.elapsed_seconds();
        match self.run.milestones.get_mut(id) {
            Some(progress) if !progress.is_completed => {
                progress.is_completed = true;
                progress.completed_at = Some(elapsed);
            }
            _ => return false,
        }

        debug!(id, elapsed_seconds = elapsed, "Milestone completed");
        self.notifier.milestone_completed(def);
        true
    }

    /// Unlock an achievement and save. Returns true if newly unlocked.
    ///
    /// Unknown ids and already-unlocked achievements are ignored.
    pub fn unlock_achievement(&mut self, id: &str) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let def = match catalog.achievement(id) {
            Some(def) => def,
            None => return false,
        };
        match self.persistent.achievements.get_mut(id) {
            Some(progress) if !progress.is_unlocked => {
                progress.is_unlocked = true;
                progress.unlocked_at = Some(Utc::now().timestamp());
            }
            _ => return false,
        }

        debug!(id, "Achievement unlocked");
        self.notifier.achievement_unlocked(def);
        self.save();
        true
    }

    // =========================================================================
    // Rewards
    // =========================================================================

    /// Claim an unlocked achievement's reward once. Saves on success.
    pub fn claim_achievement_reward(&mut self, id: &str) -> Option<Reward> {
        let reward = rewards::claim(&mut self.persistent, &self.catalog, id)?;
        debug!(id, "Achievement reward claimed");
        self.save();
        Some(reward)
    }

    /// Claim every waiting reward in catalog order, saving once.
    pub fn claim_all_rewards(&mut self) -> Vec<Reward> {
        let catalog = Arc::clone(&self.catalog);
        let claimed: Vec<Reward> = catalog
            .achievements()
            .iter()
            .filter_map(|def| rewards::claim(&mut self.persistent, &catalog, def.id))
            .collect();
        if !claimed.is_empty() {
            self.save();
        }
        claimed
    }

    /// Achievements unlocked but not yet claimed, in catalog order.
    pub fn unclaimed_rewards(&self) -> Vec<&AchievementDef> {
        rewards::unclaimed(&self.persistent, &self.catalog)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Replace the milestone listener.
    pub fn set_milestone_complete_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&MilestoneDef, &Reward) + 'static,
    {
        self.notifier.set_milestone_complete(callback);
    }

    /// Replace the achievement listener.
    pub fn set_achievement_unlock_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&AchievementDef) + 'static,
    {
        self.notifier.set_achievement_unlock(callback);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn milestone_progress(&self, id: &str) -> Option<MilestoneProgress> {
        self.run.milestones.get(id).cloned()
    }

    pub fn achievement_progress(&self, id: &str) -> Option<AchievementProgress> {
        self.persistent.achievements.get(id).cloned()
    }

    pub fn run_stats(&self) -> RunStats {
        self.run.stats
    }

    /// Game time last reported through `record_time_survived`.
    pub fn run_time_survived_seconds(&self) -> f64 {
        self.run.time_survived_seconds
    }

    /// Current in-run level, 1 until the first level-up.
    pub fn run_level(&self) -> u32 {
        self.run.level
    }

    pub fn lifetime_stats(&self) -> LifetimeStats {
        self.persistent.lifetime_stats.clone()
    }

    /// A copy of everything that gets persisted.
    pub fn persistent_state(&self) -> PersistentState {
        self.persistent.clone()
    }

    pub fn completed_milestones(&self) -> Vec<&MilestoneDef> {
        self.catalog
            .milestones()
            .iter()
            .filter(|def| {
                self.run
                    .milestones
                    .get(def.id)
                    .is_some_and(|p| p.is_completed)
            })
            .collect()
    }

    pub fn unlocked_achievements(&self) -> Vec<&AchievementDef> {
        self.catalog
            .achievements()
            .iter()
            .filter(|def| self.persistent.is_unlocked(def.id))
            .collect()
    }

    /// Unlocked share of the catalog, rounded to a whole percent.
    pub fn completion_percentage(&self) -> u32 {
        let total = self.catalog.achievements().len();
        if total == 0 {
            return 0;
        }
        let unlocked = self.persistent.unlocked_count(self.catalog.achievements());
        ((unlocked as f64 / total as f64) * 100.0).round() as u32
    }

    /// Count of unlocked/total by category.
    pub fn count_by_category(&self, category: AchievementCategory) -> (usize, usize) {
        let in_category = self.catalog.achievements_by_category(category);
        let unlocked = in_category
            .iter()
            .filter(|def| self.persistent.is_unlocked(def.id))
            .count();
        (unlocked, in_category.len())
    }

    /// Whether an achievement's prerequisites and level gate are met.
    ///
    /// Presentation only; it does not stop the achievement from unlocking.
    /// Unknown ids and unresolvable prerequisites count as unavailable.
    pub fn is_achievement_available(&self, id: &str) -> bool {
        let def = match self.catalog.achievement(id) {
            Some(def) => def,
            None => return false,
        };
        let level_ok = def
            .unlock_level
            .map_or(true, |level| self.persistent.lifetime_stats.highest_level >= level);
        level_ok
            && def
                .prerequisites
                .iter()
                .all(|prereq| self.persistent.is_unlocked(prereq))
    }

    pub fn is_run_active(&self) -> bool {
        self.run_active
    }

    /// Wall-clock seconds since the current run started.
    pub fn run_elapsed_seconds(&self) -> f64 {
        self.run.elapsed_seconds()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Wipe all progress, both lifetime and current run, and save.
    pub fn reset_progress(&mut self) {
        self.persistent = PersistentState::new(self.catalog.achievements());
        self.run = RunState::new(self.catalog.milestones());
        self.run_active = false;
        info!("Progress reset");
        self.save();
    }

    /// Write persistent state to storage. Failures are logged, not returned.
    pub fn save(&mut self) {
        if let Err(e) = save_state(&mut self.storage, &self.config.storage_key, &self.persistent) {
            warn!("Failed to save achievement progress: {}", e);
        }
    }
}
