//! Single-slot completion and unlock notifications.

use crate::catalog::{AchievementDef, MilestoneDef, Reward};
use std::fmt;

pub type MilestoneCallback = Box<dyn FnMut(&MilestoneDef, &Reward)>;
pub type AchievementCallback = Box<dyn FnMut(&AchievementDef)>;

/// Holds at most one listener per event kind.
///
/// Registering a listener replaces the previous one. Fan-out, if wanted,
/// belongs inside the registered closure.
#[derive(Default)]
pub struct Notifier {
    milestone_complete: Option<MilestoneCallback>,
    achievement_unlock: Option<AchievementCallback>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_milestone_complete<F>(&mut self, callback: F)
    where
        F: FnMut(&MilestoneDef, &Reward) + 'static,
    {
        self.milestone_complete = Some(Box::new(callback));
    }

    pub fn set_achievement_unlock<F>(&mut self, callback: F)
    where
        F: FnMut(&AchievementDef) + 'static,
    {
        self.achievement_unlock = Some(Box::new(callback));
    }

    pub fn milestone_completed(&mut self, def: &MilestoneDef) {
        if let Some(callback) = self.milestone_complete.as_mut() {
            callback(def, &def.reward);
        }
    }

    pub fn achievement_unlocked(&mut self, def: &AchievementDef) {
        if let Some(callback) = self.achievement_unlock.as_mut() {
            callback(def);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("milestone_complete", &self.milestone_complete.is_some())
            .field("achievement_unlock", &self.achievement_unlock.is_some())
            .finish()
    }
}
