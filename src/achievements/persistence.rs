//! Achievement persistence (load/merge/save through a [`Storage`]).
//!
//! Loading never fails: a missing, unreadable or malformed blob yields a
//! fresh default state. A readable blob is merged over the defaults so
//! achievements added in a later release start at zero while everything
//! the player already earned is kept.

use super::types::PersistentState;
use crate::catalog::AchievementDef;
use crate::core::constants::SCHEMA_VERSION;
use crate::error::PersistResult;
use crate::storage::Storage;
use tracing::{debug, warn};

/// Load persistent state, falling back to defaults on any failure.
pub fn load_state<S: Storage>(
    storage: &S,
    key: &str,
    achievements: &[AchievementDef],
) -> PersistentState {
    match read_state(storage, key) {
        Ok(Some(loaded)) => {
            debug!(
                version = loaded.version,
                records = loaded.achievements.len(),
                "Loaded achievement progress"
            );
            merge_with_defaults(loaded, achievements)
        }
        Ok(None) => {
            debug!(key, "No saved achievement progress, starting fresh");
            PersistentState::new(achievements)
        }
        Err(e) => {
            warn!("Failed to load achievement progress, starting fresh: {}", e);
            PersistentState::new(achievements)
        }
    }
}

/// Read and parse the raw blob without merging.
pub fn read_state<S: Storage>(storage: &S, key: &str) -> PersistResult<Option<PersistentState>> {
    match storage.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Overlay a loaded state on a fresh default.
///
/// The version is always forced to [`SCHEMA_VERSION`]. Records for ids the
/// catalog no longer has are kept as they are. Missing lifetime fields were
/// already defaulted during deserialization.
pub fn merge_with_defaults(
    loaded: PersistentState,
    achievements: &[AchievementDef],
) -> PersistentState {
    let mut merged = PersistentState::new(achievements);
    merged.version = SCHEMA_VERSION;

    for (id, mut progress) in loaded.achievements {
        if progress.id.is_empty() {
            progress.id = id.clone();
        }
        merged.achievements.insert(id, progress);
    }
    merged.lifetime_stats = loaded.lifetime_stats;
    merged
}

/// Serialize and write the full state.
pub fn save_state<S: Storage>(
    storage: &mut S,
    key: &str,
    state: &PersistentState,
) -> PersistResult<()> {
    let json = serde_json::to_string(state)?;
    storage.set(key, &json)?;
    Ok(())
}
