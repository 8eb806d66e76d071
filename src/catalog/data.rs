//! Static milestone and achievement definitions.

use super::types::{
    AchievementCategory, AchievementDef, MilestoneCategory, MilestoneDef, Reward, RewardKind,
    TrackingType,
};

/// All milestone definitions in display order.
pub const ALL_MILESTONES: &[MilestoneDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COMBAT
    // ═══════════════════════════════════════════════════════════════
    MilestoneDef {
        id: "kills_50",
        name: "Warming Up",
        description: "Defeat 50 enemies in a single run",
        icon: "🗡️",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::Kills,
        target: 50.0,
        reward: Reward::new(RewardKind::Xp, 50, "+50 XP"),
        tier: Some(1),
        next_tier_id: Some("kills_100"),
    },
    MilestoneDef {
        id: "kills_100",
        name: "Culling",
        description: "Defeat 100 enemies in a single run",
        icon: "🗡️",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::Kills,
        target: 100.0,
        reward: Reward::new(RewardKind::Xp, 100, "+100 XP"),
        tier: Some(2),
        next_tier_id: Some("kills_250"),
    },
    MilestoneDef {
        id: "kills_250",
        name: "Thinning the Horde",
        description: "Defeat 250 enemies in a single run",
        icon: "⚔️",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::Kills,
        target: 250.0,
        reward: Reward::new(RewardKind::Gold, 25, "+25 gold"),
        tier: Some(3),
        next_tier_id: Some("kills_500"),
    },
    MilestoneDef {
        id: "kills_500",
        name: "Massacre",
        description: "Defeat 500 enemies in a single run",
        icon: "⚔️",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::Kills,
        target: 500.0,
        reward: Reward::new(RewardKind::Heal, 25, "Restore 25% health"),
        tier: Some(4),
        next_tier_id: Some("kills_1000"),
    },
    MilestoneDef {
        id: "kills_1000",
        name: "Thousand Cuts",
        description: "Defeat 1,000 enemies in a single run",
        icon: "💀",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::Kills,
        target: 1000.0,
        reward: Reward::new(RewardKind::StatBoost, 10, "+10% damage for this run"),
        tier: Some(5),
        next_tier_id: None,
    },
    MilestoneDef {
        id: "damage_1000",
        name: "Heavy Hitter",
        description: "Deal 1,000 damage in a single run",
        icon: "💥",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::DamageDealt,
        target: 1000.0,
        reward: Reward::new(RewardKind::Xp, 50, "+50 XP"),
        tier: Some(1),
        next_tier_id: Some("damage_10000"),
    },
    MilestoneDef {
        id: "damage_10000",
        name: "Devastator",
        description: "Deal 10,000 damage in a single run",
        icon: "💥",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::DamageDealt,
        target: 10000.0,
        reward: Reward::new(RewardKind::Gold, 50, "+50 gold"),
        tier: Some(2),
        next_tier_id: None,
    },
    MilestoneDef {
        id: "crits_10",
        name: "Sharp Eye",
        description: "Land 10 critical hits in a single run",
        icon: "🎯",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::Crits,
        target: 10.0,
        reward: Reward::new(RewardKind::Xp, 30, "+30 XP"),
        tier: Some(1),
        next_tier_id: Some("crits_50"),
    },
    MilestoneDef {
        id: "crits_50",
        name: "Precision",
        description: "Land 50 critical hits in a single run",
        icon: "🎯",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::Crits,
        target: 50.0,
        reward: Reward::new(RewardKind::StatBoost, 5, "+5% crit chance for this run"),
        tier: Some(2),
        next_tier_id: None,
    },
    MilestoneDef {
        id: "miniboss_1",
        name: "Giant Slayer",
        description: "Defeat a miniboss",
        icon: "👺",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::MinibossesKilled,
        target: 1.0,
        reward: Reward::new(RewardKind::Gold, 20, "+20 gold"),
        tier: None,
        next_tier_id: None,
    },
    MilestoneDef {
        id: "boss_1",
        name: "Boss Breaker",
        description: "Defeat a boss",
        icon: "👹",
        category: MilestoneCategory::Combat,
        tracking: TrackingType::BossesKilled,
        target: 1.0,
        reward: Reward::new(RewardKind::Heal, 50, "Restore 50% health"),
        tier: None,
        next_tier_id: None,
    },
    // ═══════════════════════════════════════════════════════════════
    // SURVIVAL
    // ═══════════════════════════════════════════════════════════════
    MilestoneDef {
        id: "survive_60",
        name: "First Minute",
        description: "Survive for 1 minute",
        icon: "⏱️",
        category: MilestoneCategory::Survival,
        tracking: TrackingType::TimeSurvived,
        target: 60.0,
        reward: Reward::new(RewardKind::Xp, 20, "+20 XP"),
        tier: Some(1),
        next_tier_id: Some("survive_180"),
    },
    MilestoneDef {
        id: "survive_180",
        name: "Holding On",
        description: "Survive for 3 minutes",
        icon: "⏱️",
        category: MilestoneCategory::Survival,
        tracking: TrackingType::TimeSurvived,
        target: 180.0,
        reward: Reward::new(RewardKind::Xp, 60, "+60 XP"),
        tier: Some(2),
        next_tier_id: Some("survive_300"),
    },
    MilestoneDef {
        id: "survive_300",
        name: "Enduring",
        description: "Survive for 5 minutes",
        icon: "⏳",
        category: MilestoneCategory::Survival,
        tracking: TrackingType::TimeSurvived,
        target: 300.0,
        reward: Reward::new(RewardKind::Heal, 30, "Restore 30% health"),
        tier: Some(3),
        next_tier_id: Some("survive_600"),
    },
    MilestoneDef {
        id: "survive_600",
        name: "Unbroken",
        description: "Survive for 10 minutes",
        icon: "⏳",
        category: MilestoneCategory::Survival,
        tracking: TrackingType::TimeSurvived,
        target: 600.0,
        reward: Reward::new(RewardKind::Gold, 100, "+100 gold"),
        tier: Some(4),
        next_tier_id: None,
    },
    // ═══════════════════════════════════════════════════════════════
    // GROWTH
    // ═══════════════════════════════════════════════════════════════
    MilestoneDef {
        id: "level_5",
        name: "Getting Stronger",
        description: "Reach level 5",
        icon: "⭐",
        category: MilestoneCategory::Growth,
        tracking: TrackingType::Level,
        target: 5.0,
        reward: Reward::new(RewardKind::Gold, 10, "+10 gold"),
        tier: Some(1),
        next_tier_id: Some("level_10"),
    },
    MilestoneDef {
        id: "level_10",
        name: "Seasoned",
        description: "Reach level 10",
        icon: "⭐",
        category: MilestoneCategory::Growth,
        tracking: TrackingType::Level,
        target: 10.0,
        reward: Reward::new(RewardKind::Gold, 25, "+25 gold"),
        tier: Some(2),
        next_tier_id: Some("level_20"),
    },
    MilestoneDef {
        id: "level_20",
        name: "Veteran",
        description: "Reach level 20",
        icon: "🌟",
        category: MilestoneCategory::Growth,
        tracking: TrackingType::Level,
        target: 20.0,
        reward: Reward::new(RewardKind::StatBoost, 10, "+10% max health for this run"),
        tier: Some(3),
        next_tier_id: None,
    },
    MilestoneDef {
        id: "upgrades_5",
        name: "Tinkerer",
        description: "Acquire 5 upgrades",
        icon: "🔧",
        category: MilestoneCategory::Growth,
        tracking: TrackingType::UpgradesAcquired,
        target: 5.0,
        reward: Reward::new(RewardKind::Xp, 40, "+40 XP"),
        tier: Some(1),
        next_tier_id: Some("upgrades_10"),
    },
    MilestoneDef {
        id: "upgrades_10",
        name: "Engineer",
        description: "Acquire 10 upgrades",
        icon: "🔧",
        category: MilestoneCategory::Growth,
        tracking: TrackingType::UpgradesAcquired,
        target: 10.0,
        reward: Reward::new(RewardKind::Gold, 40, "+40 gold"),
        tier: Some(2),
        next_tier_id: None,
    },
    MilestoneDef {
        id: "weapons_3",
        name: "Arsenal",
        description: "Carry 3 weapons",
        icon: "🏹",
        category: MilestoneCategory::Growth,
        tracking: TrackingType::WeaponsAcquired,
        target: 3.0,
        reward: Reward::new(RewardKind::StatBoost, 5, "+5% attack speed for this run"),
        tier: None,
        next_tier_id: None,
    },
];

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COMBAT
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "slayer_1",
        name: "Slayer I",
        description: "Defeat 100 enemies",
        icon: "💀",
        category: AchievementCategory::Combat,
        tracking: TrackingType::Kills,
        target: 100.0,
        reward: Reward::new(RewardKind::Gold, 100, "+100 gold"),
        tier: Some(1),
        next_tier_id: Some("slayer_2"),
        secret: false,
        unlock_level: None,
        prerequisites: &[],
    },
    AchievementDef {
        id: "slayer_2",
        name: "Slayer II",
        description: "Defeat 1,000 enemies",
        icon: "💀",
        category: AchievementCategory::Combat,
        tracking: TrackingType::Kills,
        target: 1000.0,
        reward: Reward::new(RewardKind::Gold, 500, "+500 gold"),
        tier: Some(2),
        next_tier_id: Some("slayer_3"),
        secret: false,
        unlock_level: None,
        prerequisites: &["slayer_1"],
    },
    AchievementDef {
        id: "slayer_3",
        name: "Slayer III",
        description: "Defeat 10,000 enemies",
        icon: "💀",
        category: AchievementCategory::Combat,
        tracking: TrackingType::Kills,
        target: 10000.0,
        reward: Reward::new(RewardKind::Cosmetic, 1, "Bone crown skin"),
        tier: Some(3),
        next_tier_id: None,
        secret: false,
        unlock_level: None,
        prerequisites: &["slayer_2"],
    },
    AchievementDef {
        id: "boss_hunter_1",
        name: "Boss Hunter I",
        description: "Defeat a boss",
        icon: "👹",
        category: AchievementCategory::Combat,
        tracking: TrackingType::BossesKilled,
        target: 1.0,
        reward: Reward::new(RewardKind::Gold, 150, "+150 gold"),
        tier: Some(1),
        next_tier_id: Some("boss_hunter_2"),
        secret: false,
        unlock_level: None,
        prerequisites: &[],
    },
    AchievementDef {
        id: "boss_hunter_2",
        name: "Boss Hunter II",
        description: "Defeat 3 bosses in a single run",
        icon: "👹",
        category: AchievementCategory::Combat,
        tracking: TrackingType::BossesKilled,
        target: 3.0,
        reward: Reward::new(RewardKind::Unlock, 1, "Unlocks the Warlord character"),
        tier: Some(2),
        next_tier_id: None,
        secret: false,
        unlock_level: None,
        prerequisites: &["boss_hunter_1"],
    },
    // ═══════════════════════════════════════════════════════════════
    // SURVIVAL
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "survivor_1",
        name: "Survivor I",
        description: "Survive for 10 minutes",
        icon: "⏳",
        category: AchievementCategory::Survival,
        tracking: TrackingType::TimeSurvived,
        target: 600.0,
        reward: Reward::new(RewardKind::StatBoost, 5, "+5% max health"),
        tier: Some(1),
        next_tier_id: Some("survivor_2"),
        secret: false,
        unlock_level: None,
        prerequisites: &[],
    },
    AchievementDef {
        id: "survivor_2",
        name: "Survivor II",
        description: "Survive for 20 minutes",
        icon: "⏳",
        category: AchievementCategory::Survival,
        tracking: TrackingType::TimeSurvived,
        target: 1200.0,
        reward: Reward::new(RewardKind::StatBoost, 10, "+10% max health"),
        tier: Some(2),
        next_tier_id: None,
        secret: false,
        unlock_level: None,
        prerequisites: &["survivor_1"],
    },
    AchievementDef {
        id: "champion_1",
        name: "Champion",
        description: "Win a run",
        icon: "🏆",
        category: AchievementCategory::Survival,
        tracking: TrackingType::Victories,
        target: 1.0,
        reward: Reward::new(RewardKind::Unlock, 1, "Unlocks world level 2"),
        tier: Some(1),
        next_tier_id: Some("champion_2"),
        secret: false,
        unlock_level: None,
        prerequisites: &[],
    },
    AchievementDef {
        id: "champion_2",
        name: "Conqueror",
        description: "Win 10 runs",
        icon: "🏆",
        category: AchievementCategory::Survival,
        tracking: TrackingType::Victories,
        target: 10.0,
        reward: Reward::new(RewardKind::Gold, 1000, "+1,000 gold"),
        tier: Some(2),
        next_tier_id: Some("champion_3"),
        secret: false,
        unlock_level: None,
        prerequisites: &["champion_1"],
    },
    AchievementDef {
        id: "champion_3",
        name: "Legend",
        description: "Win 50 runs",
        icon: "👑",
        category: AchievementCategory::Survival,
        tracking: TrackingType::Victories,
        target: 50.0,
        reward: Reward::new(RewardKind::Cosmetic, 1, "Golden aura"),
        tier: Some(3),
        next_tier_id: None,
        secret: false,
        unlock_level: None,
        prerequisites: &["champion_2"],
    },
    // ═══════════════════════════════════════════════════════════════
    // PROGRESSION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_steps",
        name: "First Steps",
        description: "Start your first run",
        icon: "👣",
        category: AchievementCategory::Progression,
        tracking: TrackingType::RunsStarted,
        target: 1.0,
        reward: Reward::new(RewardKind::Gold, 25, "+25 gold"),
        tier: Some(1),
        next_tier_id: Some("regular"),
        secret: false,
        unlock_level: None,
        prerequisites: &[],
    },
    AchievementDef {
        id: "regular",
        name: "Regular",
        description: "Start 10 runs",
        icon: "🔁",
        category: AchievementCategory::Progression,
        tracking: TrackingType::RunsStarted,
        target: 10.0,
        reward: Reward::new(RewardKind::Gold, 200, "+200 gold"),
        tier: Some(2),
        next_tier_id: Some("devoted"),
        secret: false,
        unlock_level: None,
        prerequisites: &["first_steps"],
    },
    AchievementDef {
        id: "devoted",
        name: "Devoted",
        description: "Start 100 runs",
        icon: "🔁",
        category: AchievementCategory::Progression,
        tracking: TrackingType::RunsStarted,
        target: 100.0,
        reward: Reward::new(RewardKind::Cosmetic, 1, "Veteran banner"),
        tier: Some(3),
        next_tier_id: None,
        secret: false,
        unlock_level: None,
        prerequisites: &["regular"],
    },
    AchievementDef {
        id: "level_25",
        name: "Ascendant",
        description: "Reach level 25 in a run",
        icon: "🌟",
        category: AchievementCategory::Progression,
        tracking: TrackingType::Level,
        target: 25.0,
        reward: Reward::new(RewardKind::StatBoost, 5, "+5% XP gain"),
        tier: Some(1),
        next_tier_id: Some("level_50"),
        secret: false,
        unlock_level: None,
        prerequisites: &[],
    },
    AchievementDef {
        id: "level_50",
        name: "Transcendent",
        description: "Reach level 50 in a run",
        icon: "🌟",
        category: AchievementCategory::Progression,
        tracking: TrackingType::Level,
        target: 50.0,
        reward: Reward::new(RewardKind::StatBoost, 10, "+10% XP gain"),
        tier: Some(2),
        next_tier_id: None,
        secret: false,
        unlock_level: Some(25),
        prerequisites: &["level_25"],
    },
    AchievementDef {
        id: "world_2",
        name: "Beyond the Gate",
        description: "Reach world level 2",
        icon: "🌍",
        category: AchievementCategory::Progression,
        tracking: TrackingType::WorldLevel,
        target: 2.0,
        reward: Reward::new(RewardKind::Gold, 300, "+300 gold"),
        tier: Some(1),
        next_tier_id: Some("world_5"),
        secret: false,
        unlock_level: None,
        prerequisites: &["champion_1"],
    },
    AchievementDef {
        id: "world_5",
        name: "Worldwalker",
        description: "Reach world level 5",
        icon: "🌌",
        category: AchievementCategory::Progression,
        tracking: TrackingType::WorldLevel,
        target: 5.0,
        reward: Reward::new(RewardKind::Unlock, 1, "Unlocks endless mode"),
        tier: Some(2),
        next_tier_id: None,
        secret: false,
        unlock_level: Some(30),
        prerequisites: &["world_2"],
    },
    // ═══════════════════════════════════════════════════════════════
    // MASTERY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "untouchable",
        name: "Untouchable",
        description: "Win a run without taking damage",
        icon: "🛡️",
        category: AchievementCategory::Mastery,
        tracking: TrackingType::PerfectRun,
        target: 1.0,
        reward: Reward::new(RewardKind::Cosmetic, 1, "Ghost trail"),
        tier: Some(1),
        next_tier_id: Some("flawless"),
        secret: true,
        unlock_level: None,
        prerequisites: &[],
    },
    AchievementDef {
        id: "flawless",
        name: "Flawless",
        description: "Win 5 runs without taking damage",
        icon: "🛡️",
        category: AchievementCategory::Mastery,
        tracking: TrackingType::PerfectRun,
        target: 5.0,
        reward: Reward::new(RewardKind::StatBoost, 10, "+10% armor"),
        tier: Some(2),
        next_tier_id: None,
        secret: true,
        unlock_level: None,
        prerequisites: &["untouchable"],
    },
    AchievementDef {
        id: "speedrunner",
        name: "Speedrunner",
        description: "Win a run in under 8 minutes",
        icon: "⚡",
        category: AchievementCategory::Mastery,
        tracking: TrackingType::SpeedRun,
        target: 1.0,
        reward: Reward::new(RewardKind::StatBoost, 5, "+5% move speed"),
        tier: Some(1),
        next_tier_id: Some("blitz"),
        secret: false,
        unlock_level: None,
        prerequisites: &[],
    },
    AchievementDef {
        id: "blitz",
        name: "Blitz",
        description: "Win 5 runs in under 8 minutes",
        icon: "⚡",
        category: AchievementCategory::Mastery,
        tracking: TrackingType::SpeedRun,
        target: 5.0,
        reward: Reward::new(RewardKind::Cosmetic, 1, "Lightning trail"),
        tier: Some(2),
        next_tier_id: None,
        secret: false,
        unlock_level: None,
        prerequisites: &["speedrunner"],
    },
];
