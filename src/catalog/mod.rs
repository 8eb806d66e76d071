//! Goal catalog: the read-only milestone and achievement tables.
//!
//! Definitions keep their declaration order, which is also the order the
//! progress evaluator scans them in. Id lookups go through an index built
//! once at construction.

pub mod data;
pub mod types;

pub use types::{
    AchievementCategory, AchievementDef, GoalDef, MilestoneCategory, MilestoneDef, Reward,
    RewardKind, TrackingType,
};

use std::collections::HashMap;

/// Immutable milestone and achievement tables with id indexes.
#[derive(Debug, Clone)]
pub struct Catalog {
    milestones: Vec<MilestoneDef>,
    achievements: Vec<AchievementDef>,
    milestone_index: HashMap<&'static str, usize>,
    achievement_index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog from definitions in display order.
    ///
    /// A duplicated id resolves to its first declaration.
    pub fn new(milestones: Vec<MilestoneDef>, achievements: Vec<AchievementDef>) -> Self {
        let mut milestone_index = HashMap::with_capacity(milestones.len());
        for (i, def) in milestones.iter().enumerate() {
            milestone_index.entry(def.id).or_insert(i);
        }
        let mut achievement_index = HashMap::with_capacity(achievements.len());
        for (i, def) in achievements.iter().enumerate() {
            achievement_index.entry(def.id).or_insert(i);
        }
        Self {
            milestones,
            achievements,
            milestone_index,
            achievement_index,
        }
    }

    /// The catalog shipped with the game.
    pub fn builtin() -> Self {
        Self::new(data::ALL_MILESTONES.to_vec(), data::ALL_ACHIEVEMENTS.to_vec())
    }

    pub fn milestones(&self) -> &[MilestoneDef] {
        &self.milestones
    }

    pub fn achievements(&self) -> &[AchievementDef] {
        &self.achievements
    }

    pub fn milestone(&self, id: &str) -> Option<&MilestoneDef> {
        self.milestone_index.get(id).map(|&i| &self.milestones[i])
    }

    pub fn achievement(&self, id: &str) -> Option<&AchievementDef> {
        self.achievement_index.get(id).map(|&i| &self.achievements[i])
    }

    /// Follow a milestone's `next_tier_id`, if it names a real entry.
    pub fn next_milestone_tier(&self, id: &str) -> Option<&MilestoneDef> {
        self.milestone(id)?
            .next_tier_id
            .and_then(|next| self.milestone(next))
    }

    /// Follow an achievement's `next_tier_id`, if it names a real entry.
    pub fn next_achievement_tier(&self, id: &str) -> Option<&AchievementDef> {
        self.achievement(id)?
            .next_tier_id
            .and_then(|next| self.achievement(next))
    }

    /// Achievements in one category, in display order.
    pub fn achievements_by_category(&self, category: AchievementCategory) -> Vec<&AchievementDef> {
        self.achievements
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
