//! Integration test: claiming achievement rewards
//!
//! Rewards become claimable when their achievement unlocks and can be
//! claimed exactly once, individually or in bulk.

use runtally::{AchievementCategory, MemoryStorage, ProgressTracker, RewardKind, RunSummary};

fn tracker_after_fast_victory() -> ProgressTracker<MemoryStorage> {
    let mut tracker = ProgressTracker::new(MemoryStorage::new());
    tracker.start_new_run();
    tracker.record_run_end(RunSummary {
        was_victory: true,
        kills: 150,
        level_reached: 6,
        survival_time_seconds: 240.0,
        world_level: 1,
        damage_dealt: 4_000.0,
        damage_taken: 0.0,
        gold_earned: 20,
    });
    tracker
}

#[test]
fn test_claim_is_single_fire() {
    let mut tracker = tracker_after_fast_victory();

    let reward = tracker.claim_achievement_reward("champion_1").unwrap();
    assert_eq!(reward.kind, RewardKind::Unlock);
    assert!(tracker.claim_achievement_reward("champion_1").is_none());
    assert!(tracker.achievement_progress("champion_1").unwrap().reward_claimed);
}

#[test]
fn test_locked_achievement_has_nothing_to_claim() {
    let mut tracker = tracker_after_fast_victory();
    assert!(tracker.claim_achievement_reward("slayer_2").is_none());
    assert!(!tracker.achievement_progress("slayer_2").unwrap().reward_claimed);
}

#[test]
fn test_unclaimed_follows_catalog_order() {
    let mut tracker = tracker_after_fast_victory();
    let ids: Vec<_> = tracker.unclaimed_rewards().iter().map(|d| d.id).collect();
    assert_eq!(
        ids,
        vec!["slayer_1", "champion_1", "first_steps", "untouchable", "speedrunner"]
    );

    tracker.claim_achievement_reward("first_steps");
    let ids: Vec<_> = tracker.unclaimed_rewards().iter().map(|d| d.id).collect();
    assert!(!ids.contains(&"first_steps"));
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_claim_all_empties_ledger_and_persists() {
    let mut tracker = tracker_after_fast_victory();
    let waiting = tracker.unclaimed_rewards().len();

    let claimed = tracker.claim_all_rewards();
    assert_eq!(claimed.len(), waiting);
    assert!(tracker.unclaimed_rewards().is_empty());
    assert!(tracker.claim_all_rewards().is_empty());

    let reloaded = ProgressTracker::new(tracker.into_storage());
    assert!(reloaded.unclaimed_rewards().is_empty());
    assert!(reloaded.achievement_progress("speedrunner").unwrap().reward_claimed);
}

#[test]
fn test_category_counts_and_availability() {
    let tracker = tracker_after_fast_victory();

    let (unlocked, total) = tracker.count_by_category(AchievementCategory::Mastery);
    assert_eq!(unlocked, 2);
    assert_eq!(total, 4);

    // world_2 needs champion_1, level_50 needs level 25 and level_25
    assert!(tracker.is_achievement_available("world_2"));
    assert!(!tracker.is_achievement_available("level_50"));
    assert!(tracker.completion_percentage() > 0);
}
