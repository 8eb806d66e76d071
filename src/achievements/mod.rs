//! Achievement system module.
//!
//! Achievements accumulate across every run and are persisted through a
//! [`Storage`](crate::storage::Storage) backend as a single JSON blob.

pub mod persistence;
pub mod rewards;
pub mod types;

pub use persistence::{load_state, merge_with_defaults, save_state};
pub use types::{
    AchievementProgress, LifetimeStats, PersistentState, RunOutcome, RunSummary,
};
