//! Simulation runner driving a tracker through random runs.

use super::config::SimConfig;
use super::report::{RunResult, SimReport};
use crate::achievements::RunSummary;
use crate::storage::Storage;
use crate::tracker::ProgressTracker;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

const MINIBOSS_INTERVAL_SECONDS: u32 = 120;
const BOSS_INTERVAL_SECONDS: u32 = 300;
const REGEN_PER_SECOND: f64 = 0.002;

/// Run the full batch and return a report.
pub fn run_simulation<S: Storage>(
    config: &SimConfig,
    tracker: &mut ProgressTracker<S>,
) -> SimReport {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let result = simulate_single_run(config, tracker, &mut rng);
        debug!(
            run = run_idx + 1,
            victory = result.summary.was_victory,
            kills = result.summary.kills,
            survival_seconds = result.summary.survival_time_seconds,
            milestones = result.milestones_completed,
            "Simulated run finished"
        );
        runs.push(result);
    }

    SimReport::from_runs(runs, tracker)
}

/// Play one run second by second and report it to the tracker.
pub fn simulate_single_run<S: Storage, R: Rng>(
    config: &SimConfig,
    tracker: &mut ProgressTracker<S>,
    rng: &mut R,
) -> RunResult {
    tracker.start_new_run();

    let min = config.min_run_seconds.min(config.max_run_seconds);
    let run_length = rng.gen_range(min..=config.max_run_seconds);

    let mut health = 1.0_f64;
    let mut level = 1_u32;
    let mut xp = 0_u32;
    let mut kills = 0_u64;
    let mut damage_dealt = 0.0_f64;
    let mut damage_taken = 0.0_f64;
    let mut gold = 0_u64;
    let mut survived = 0_u32;

    for second in 1..=run_length {
        for _ in 0..rng.gen_range(0..=config.max_kills_per_second) {
            let crit = rng.gen_bool(config.crit_chance);
            let base = rng.gen_range(20.0..60.0);
            let dealt = if crit { base * 2.0 } else { base };
            tracker.record_damage_dealt(dealt, crit);
            tracker.record_kill();
            kills += 1;
            damage_dealt += dealt;
            if rng.gen_bool(0.1) {
                gold += 1;
            }

            xp += 1;
            if xp >= level * 10 {
                xp = 0;
                level += 1;
                tracker.record_level_up(level);
                tracker.record_upgrade_acquired();
                if level % 5 == 0 {
                    tracker.record_weapon_acquired();
                }
            }
        }

        if second % MINIBOSS_INTERVAL_SECONDS == 0 {
            tracker.record_miniboss_kill();
            gold += 10;
        }
        if second % BOSS_INTERVAL_SECONDS == 0 {
            tracker.record_boss_kill();
            gold += 50;
        }

        if rng.gen_bool(config.hit_chance) {
            let hit = rng.gen_range(1.0..8.0);
            health -= hit / 100.0;
            damage_taken += hit;
            tracker.record_damage_taken(hit, health.max(0.0));
        }
        health = (health + REGEN_PER_SECOND).min(1.0);

        tracker.record_time_survived(second as f64);
        survived = second;
        if health <= 0.0 {
            break;
        }
    }

    let summary = RunSummary {
        was_victory: survived == run_length && health > 0.0,
        kills,
        level_reached: level,
        survival_time_seconds: survived as f64,
        world_level: config.world_level,
        damage_dealt,
        damage_taken,
        gold_earned: gold,
    };
    let milestones_completed = tracker.completed_milestones().len();
    tracker.record_run_end(summary);

    RunResult {
        summary,
        milestones_completed,
    }
}
