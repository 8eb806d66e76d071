//! Tracker configuration.

use super::constants::{LOW_HP_FRACTION, SPEED_RUN_THRESHOLD_SECONDS, STORAGE_KEY};

/// Tunables for a [`ProgressTracker`](crate::ProgressTracker).
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Key the persistent state blob is stored under.
    pub storage_key: String,
    /// A victory strictly faster than this counts as a speed run.
    pub speed_run_threshold_seconds: f64,
    /// Remaining health fraction below which a hit counts as "low HP".
    pub low_hp_fraction: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            speed_run_threshold_seconds: SPEED_RUN_THRESHOLD_SECONDS,
            low_hp_fraction: LOW_HP_FRACTION,
        }
    }
}

impl TrackerConfig {
    /// Use a different storage key, e.g. one per profile slot.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
