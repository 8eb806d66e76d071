//! Integration test: run lifecycle through the public tracker API
//!
//! Covers milestone completion during a run, lifetime folding at run end,
//! speed/perfect victory detection, reset, and tolerance of a storage
//! backend that always fails.

use runtally::{
    AchievementProgress, LifetimeStats, MemoryStorage, ProgressTracker, RunSummary, Storage,
    StorageError, TrackingType,
};
use std::cell::RefCell;
use std::rc::Rc;

fn tracker() -> ProgressTracker<MemoryStorage> {
    ProgressTracker::new(MemoryStorage::new())
}

fn victory(seconds: f64, damage_taken: f64) -> RunSummary {
    RunSummary {
        was_victory: true,
        kills: 120,
        level_reached: 8,
        survival_time_seconds: seconds,
        world_level: 1,
        damage_dealt: 5_000.0,
        damage_taken,
        gold_earned: 40,
    }
}

/// Storage that refuses every read and write.
struct BrokenStorage;

impl Storage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disk on fire".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk on fire".into()))
    }
}

// =============================================================================
// Milestones
// =============================================================================

#[test]
fn test_thousand_kills_completes_milestone_once() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);

    let mut tracker = tracker();
    tracker.set_milestone_complete_callback(move |def, _| sink.borrow_mut().push(def.id));
    tracker.start_new_run();

    for _ in 0..1000 {
        tracker.record_kill();
    }

    let completed: Vec<_> = tracker.completed_milestones().iter().map(|d| d.id).collect();
    assert_eq!(completed.iter().filter(|id| **id == "kills_1000").count(), 1);
    assert_eq!(fired.borrow().iter().filter(|id| **id == "kills_1000").count(), 1);

    // More kills never re-fire
    for _ in 0..50 {
        tracker.record_kill();
    }
    assert_eq!(fired.borrow().iter().filter(|id| **id == "kills_1000").count(), 1);
    assert_eq!(tracker.milestone_progress("kills_1000").unwrap().current_value, 1000.0);
}

#[test]
fn test_kill_milestones_fire_in_threshold_order() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);

    let mut tracker = tracker();
    tracker.set_milestone_complete_callback(move |def, _| {
        if def.id.starts_with("kills_") {
            sink.borrow_mut().push(def.id);
        }
    });
    tracker.start_new_run();
    for _ in 0..500 {
        tracker.record_kill();
    }

    assert_eq!(
        *fired.borrow(),
        vec!["kills_50", "kills_100", "kills_250", "kills_500"]
    );
}

#[test]
fn test_new_run_resets_milestones_only() {
    let mut tracker = tracker();
    tracker.start_new_run();
    for _ in 0..100 {
        tracker.record_kill();
    }
    tracker.record_run_end(RunSummary {
        kills: 100,
        survival_time_seconds: 60.0,
        ..RunSummary::default()
    });
    assert!(tracker.milestone_progress("kills_100").unwrap().is_completed);

    tracker.start_new_run();
    assert!(tracker.completed_milestones().is_empty());
    assert_eq!(tracker.run_stats().kills, 0);
    assert_eq!(tracker.lifetime_stats().total_kills, 100);
    assert!(tracker.achievement_progress("slayer_1").unwrap().is_unlocked);
}

#[test]
fn test_low_hp_counter_drives_no_goal() {
    let mut tracker = tracker();
    tracker.start_new_run();
    tracker.record_damage_taken(30.0, 0.5);
    tracker.record_damage_taken(30.0, 0.1);
    tracker.record_damage_taken(30.0, 0.05);

    let stats = tracker.run_stats();
    assert_eq!(stats.times_low_hp, 2);
    assert_eq!(stats.damage_taken, 90.0);
    assert!(tracker.completed_milestones().is_empty());
}

// =============================================================================
// Run End
// =============================================================================

#[test]
fn test_fast_flawless_victory_counts_as_speed_and_perfect() {
    let mut tracker = tracker();
    tracker.start_new_run();
    tracker.record_run_end(victory(300.0, 0.0));

    let lifetime = tracker.lifetime_stats();
    assert_eq!(lifetime.speed_runs, 1);
    assert_eq!(lifetime.perfect_runs, 1);
    assert_eq!(lifetime.fastest_victory_seconds, 300.0);
    assert_eq!(lifetime.victories, 1);

    assert!(tracker.achievement_progress("speedrunner").unwrap().is_unlocked);
    assert!(tracker.achievement_progress("untouchable").unwrap().is_unlocked);
    assert!(tracker.achievement_progress("champion_1").unwrap().is_unlocked);
    assert_eq!(tracker.achievement_progress("blitz").unwrap().current_value, 1.0);
}

#[test]
fn test_slow_damaged_victory_is_neither_speed_nor_perfect() {
    let mut tracker = tracker();
    tracker.start_new_run();
    tracker.record_run_end(victory(600.0, 12.5));

    let lifetime = tracker.lifetime_stats();
    assert_eq!(lifetime.speed_runs, 0);
    assert_eq!(lifetime.perfect_runs, 0);
    assert_eq!(lifetime.victories, 1);
    assert_eq!(lifetime.fastest_victory_seconds, 600.0);
    assert!(!tracker.achievement_progress("speedrunner").unwrap().is_unlocked);
    assert!(!tracker.achievement_progress("untouchable").unwrap().is_unlocked);
    assert!(tracker.achievement_progress("survivor_1").unwrap().is_unlocked);
}

#[test]
fn test_speed_threshold_is_exclusive() {
    let mut tracker = tracker();
    tracker.start_new_run();
    tracker.record_run_end(victory(480.0, 5.0));
    assert_eq!(tracker.lifetime_stats().speed_runs, 0);
}

#[test]
fn test_defeat_never_counts_as_victory() {
    let mut tracker = tracker();
    tracker.start_new_run();
    tracker.record_run_end(RunSummary {
        was_victory: false,
        survival_time_seconds: 100.0,
        ..RunSummary::default()
    });

    let lifetime = tracker.lifetime_stats();
    assert_eq!(lifetime.victories, 0);
    assert_eq!(lifetime.perfect_runs, 0);
    assert_eq!(lifetime.runs_completed, 1);
    assert!(lifetime.fastest_victory_seconds.is_infinite());
}

#[test]
fn test_fastest_victory_keeps_minimum() {
    let mut tracker = tracker();
    for seconds in [700.0, 400.0, 650.0] {
        tracker.start_new_run();
        tracker.record_run_end(victory(seconds, 1.0));
    }
    assert_eq!(tracker.lifetime_stats().fastest_victory_seconds, 400.0);
}

/// Boss kills are checked against the finished run's count rather than a
/// lifetime total, so bosses spread over several runs do not add up.
#[test]
fn test_boss_achievements_use_run_local_count() {
    let mut tracker = tracker();
    for _ in 0..2 {
        tracker.start_new_run();
        tracker.record_boss_kill();
        tracker.record_boss_kill();
        tracker.record_run_end(RunSummary::default());
    }
    assert!(tracker.achievement_progress("boss_hunter_1").unwrap().is_unlocked);
    assert!(!tracker.achievement_progress("boss_hunter_2").unwrap().is_unlocked);

    tracker.start_new_run();
    for _ in 0..3 {
        tracker.record_boss_kill();
    }
    tracker.record_run_end(RunSummary::default());
    assert!(tracker.achievement_progress("boss_hunter_2").unwrap().is_unlocked);
}

// =============================================================================
// Evaluator Modes
// =============================================================================

#[test]
fn test_absolute_update_is_idempotent() {
    let mut tracker = tracker();
    tracker.update_achievement_progress(TrackingType::Kills, 100.0);
    let once = tracker.persistent_state();

    for _ in 0..5 {
        tracker.update_achievement_progress(TrackingType::Kills, 100.0);
    }
    assert_eq!(tracker.persistent_state(), once);
    assert!(once.achievements["slayer_1"].is_unlocked);
    assert_eq!(once.achievements["slayer_2"].current_value, 100.0);
}

#[test]
fn test_absolute_update_never_uncompletes() {
    let mut tracker = tracker();
    tracker.update_achievement_progress(TrackingType::Kills, 50.0);
    tracker.update_achievement_progress(TrackingType::Kills, 100.0);
    tracker.update_achievement_progress(TrackingType::Kills, 10.0);

    let slayer = tracker.achievement_progress("slayer_1").unwrap();
    assert!(slayer.is_unlocked);
    assert_eq!(slayer.current_value, 100.0);
}

#[test]
fn test_incremental_update_accumulates() {
    let unlocked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&unlocked);

    let mut tracker = tracker();
    tracker.set_achievement_unlock_callback(move |def| sink.borrow_mut().push(def.id));
    tracker.check_achievement_progress(TrackingType::PerfectRun, 1.0);
    tracker.check_achievement_progress(TrackingType::PerfectRun, 1.0);

    assert_eq!(tracker.achievement_progress("flawless").unwrap().current_value, 2.0);
    assert_eq!(tracker.achievement_progress("untouchable").unwrap().current_value, 1.0);
    assert_eq!(*unlocked.borrow(), vec!["untouchable"]);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut tracker = tracker();
    assert!(!tracker.complete_milestone("no_such_milestone"));
    assert!(!tracker.unlock_achievement("no_such_achievement"));
    assert!(tracker.claim_achievement_reward("no_such_achievement").is_none());
}

// =============================================================================
// Reset and Storage Failure
// =============================================================================

#[test]
fn test_reset_returns_everything_to_defaults() {
    let mut tracker = tracker();
    tracker.start_new_run();
    for _ in 0..150 {
        tracker.record_kill();
    }
    tracker.record_level_up(12);
    tracker.record_run_end(victory(300.0, 0.0));
    tracker.claim_all_rewards();

    tracker.reset_progress();

    for def in tracker.catalog().achievements() {
        assert_eq!(
            tracker.achievement_progress(def.id).unwrap(),
            AchievementProgress::new(def.id)
        );
    }
    for def in tracker.catalog().milestones() {
        let progress = tracker.milestone_progress(def.id).unwrap();
        assert!(!progress.is_completed);
        assert_eq!(progress.current_value, 0.0);
        assert!(progress.completed_at.is_none());
    }
    assert_eq!(tracker.lifetime_stats(), LifetimeStats::default());
    assert_eq!(tracker.completion_percentage(), 0);
    assert!(!tracker.is_run_active());
}

#[test]
fn test_broken_storage_keeps_in_memory_progress() {
    let mut tracker = ProgressTracker::new(BrokenStorage);
    assert_eq!(tracker.lifetime_stats(), LifetimeStats::default());

    tracker.start_new_run();
    for _ in 0..100 {
        tracker.record_kill();
    }
    tracker.record_run_end(victory(300.0, 0.0));

    assert!(tracker.achievement_progress("slayer_1").unwrap().is_unlocked);
    assert!(tracker.claim_achievement_reward("slayer_1").is_some());
    assert_eq!(tracker.lifetime_stats().runs_completed, 1);
}
