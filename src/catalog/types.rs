//! Goal definition types shared by milestones and achievements.

use serde::{Deserialize, Serialize};

/// Which gameplay counter drives a goal's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingType {
    Kills,
    TimeSurvived,
    Level,
    DamageDealt,
    Crits,
    MinibossesKilled,
    BossesKilled,
    UpgradesAcquired,
    WeaponsAcquired,
    Victories,
    RunsStarted,
    WorldLevel,
    /// Fed by explicit increments, one per zero-damage victory.
    PerfectRun,
    /// Fed by explicit increments, one per fast victory.
    SpeedRun,
}

impl TrackingType {
    /// Tags fed by increments instead of an absolute counter.
    pub fn is_incremental(&self) -> bool {
        matches!(self, TrackingType::PerfectRun | TrackingType::SpeedRun)
    }
}

/// What kind of payout a reward describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Xp,
    Gold,
    Heal,
    StatBoost,
    Cosmetic,
    Unlock,
}

/// Reward descriptor. Applying it to gameplay is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reward {
    pub kind: RewardKind,
    pub amount: u32,
    pub description: &'static str,
}

impl Reward {
    pub const fn new(kind: RewardKind, amount: u32, description: &'static str) -> Self {
        Self {
            kind,
            amount,
            description,
        }
    }
}

/// Milestone categories for grouping in the run HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneCategory {
    Combat,
    Survival,
    Growth,
}

impl MilestoneCategory {
    pub fn name(&self) -> &'static str {
        match self {
            MilestoneCategory::Combat => "Combat",
            MilestoneCategory::Survival => "Survival",
            MilestoneCategory::Growth => "Growth",
        }
    }
}

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Combat,
    Survival,
    Progression,
    Mastery,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 4] = [
        AchievementCategory::Combat,
        AchievementCategory::Survival,
        AchievementCategory::Progression,
        AchievementCategory::Mastery,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Combat => "Combat",
            AchievementCategory::Survival => "Survival",
            AchievementCategory::Progression => "Progression",
            AchievementCategory::Mastery => "Mastery",
        }
    }
}

/// Static definition of an in-run milestone.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: MilestoneCategory,
    pub tracking: TrackingType,
    pub target: f64,
    pub reward: Reward,
    pub tier: Option<u8>,
    pub next_tier_id: Option<&'static str>,
}

/// Static definition of a lifetime achievement.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub tracking: TrackingType,
    pub target: f64,
    pub reward: Reward,
    pub tier: Option<u8>,
    pub next_tier_id: Option<&'static str>,
    /// Hidden in the browser until unlocked.
    pub secret: bool,
    /// Lifetime highest level required before the achievement is shown as available.
    pub unlock_level: Option<u32>,
    pub prerequisites: &'static [&'static str],
}

/// The parts of a definition the progress evaluator needs.
pub trait GoalDef {
    fn id(&self) -> &'static str;
    fn tracking(&self) -> TrackingType;
    fn target(&self) -> f64;
}

impl GoalDef for MilestoneDef {
    fn id(&self) -> &'static str {
        self.id
    }

    fn tracking(&self) -> TrackingType {
        self.tracking
    }

    fn target(&self) -> f64 {
        self.target
    }
}

impl GoalDef for AchievementDef {
    fn id(&self) -> &'static str {
        self.id
    }

    fn tracking(&self) -> TrackingType {
        self.tracking
    }

    fn target(&self) -> f64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_tags() {
        assert!(TrackingType::PerfectRun.is_incremental());
        assert!(TrackingType::SpeedRun.is_incremental());
        assert!(!TrackingType::Kills.is_incremental());
        assert!(!TrackingType::BossesKilled.is_incremental());
    }

    #[test]
    fn test_tracking_type_wire_names() {
        let json = serde_json::to_string(&TrackingType::PerfectRun).unwrap();
        assert_eq!(json, "\"perfect_run\"");
        let parsed: TrackingType = serde_json::from_str("\"time_survived\"").unwrap();
        assert_eq!(parsed, TrackingType::TimeSurvived);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(AchievementCategory::Combat.name(), "Combat");
        assert_eq!(AchievementCategory::Survival.name(), "Survival");
        assert_eq!(AchievementCategory::Progression.name(), "Progression");
        assert_eq!(AchievementCategory::Mastery.name(), "Mastery");
        assert_eq!(MilestoneCategory::Growth.name(), "Growth");
    }
}
