//! Threshold evaluation shared by milestones and achievements.
//!
//! The evaluator only moves `current_value` and reports which goals crossed
//! their target. Flipping the completion flag, stamping time and notifying
//! is left to the tracker's trigger functions so a crossing reported twice
//! still completes once.

use crate::catalog::{GoalDef, TrackingType};
use std::collections::HashMap;
use tracing::warn;

/// The parts of a progress record the evaluator reads and writes.
pub trait GoalProgress {
    fn is_complete(&self) -> bool;
    fn current_value(&self) -> f64;
    fn set_current_value(&mut self, value: f64);
}

/// Absolute mode: set every matching incomplete record to `value`.
///
/// Returns the ids whose target was met, in declaration order. Calling it
/// again with the same value changes nothing. Definitions without a record
/// are skipped, and so is a non-finite value.
pub fn apply_absolute<D, P>(
    defs: &[D],
    records: &mut HashMap<String, P>,
    tracking: TrackingType,
    value: f64,
) -> Vec<&'static str>
where
    D: GoalDef,
    P: GoalProgress,
{
    if !value.is_finite() {
        warn!(?tracking, value, "Ignoring non-finite progress value");
        return Vec::new();
    }
    let mut crossed = Vec::new();
    for def in defs.iter().filter(|d| d.tracking() == tracking) {
        if let Some(record) = records.get_mut(def.id()) {
            if record.is_complete() {
                continue;
            }
            record.set_current_value(value);
            if value >= def.target() {
                crossed.push(def.id());
            }
        }
    }
    crossed
}

/// Incremental mode: add `increment` to every matching incomplete record.
///
/// Not idempotent. Each qualifying event must be reported exactly once.
/// A non-finite increment is ignored.
pub fn apply_increment<D, P>(
    defs: &[D],
    records: &mut HashMap<String, P>,
    tracking: TrackingType,
    increment: f64,
) -> Vec<&'static str>
where
    D: GoalDef,
    P: GoalProgress,
{
    if !increment.is_finite() {
        warn!(?tracking, increment, "Ignoring non-finite progress increment");
        return Vec::new();
    }
    let mut crossed = Vec::new();
    for def in defs.iter().filter(|d| d.tracking() == tracking) {
        if let Some(record) = records.get_mut(def.id()) {
            if record.is_complete() {
                continue;
            }
            let value = record.current_value() + increment;
            record.set_current_value(value);
            if value >= def.target() {
                crossed.push(def.id());
            }
        }
    }
    crossed
}
