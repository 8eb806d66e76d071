//! Runtally - milestone and achievement tracking for run-based games
//!
//! Turns gameplay events into two kinds of goals: milestones that reset
//! every run, and achievements that persist across the player's lifetime
//! and carry claimable rewards.

pub mod achievements;
pub mod catalog;
pub mod core;
pub mod error;
pub mod evaluator;
pub mod milestones;
pub mod notify;
pub mod simulator;
pub mod storage;
pub mod tracker;
pub mod utils;

pub use achievements::{AchievementProgress, LifetimeStats, PersistentState, RunSummary};
pub use catalog::{
    AchievementCategory, AchievementDef, Catalog, MilestoneCategory, MilestoneDef, Reward,
    RewardKind, TrackingType,
};
pub use crate::core::TrackerConfig;
pub use error::{PersistError, StorageError};
pub use milestones::{MilestoneProgress, RunStats};
pub use storage::{MemoryStorage, Storage};
pub use tracker::ProgressTracker;
pub use utils::JsonFileStorage;
