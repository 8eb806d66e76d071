//! Reward ledger: unlocked-but-unclaimed rewards and single-claim guard.

use super::types::PersistentState;
use crate::catalog::{AchievementDef, Catalog, Reward};

/// Claim the reward for `id` if it is unlocked and not yet claimed.
///
/// Returns `None` for unknown ids, locked achievements, and rewards that
/// were already claimed. The caller is responsible for persisting.
pub fn claim(state: &mut PersistentState, catalog: &Catalog, id: &str) -> Option<Reward> {
    let def = catalog.achievement(id)?;
    let progress = state.achievements.get_mut(id)?;
    if !progress.is_unlocked || progress.reward_claimed {
        return None;
    }
    progress.reward_claimed = true;
    Some(def.reward)
}

/// Unlocked achievements whose reward is still waiting, in catalog order.
pub fn unclaimed<'a>(state: &PersistentState, catalog: &'a Catalog) -> Vec<&'a AchievementDef> {
    catalog
        .achievements()
        .iter()
        .filter(|def| {
            state
                .achievements
                .get(def.id)
                .is_some_and(|p| p.is_unlocked && !p.reward_claimed)
        })
        .collect()
}
