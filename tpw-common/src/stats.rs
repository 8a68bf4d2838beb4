//! Aggregate statistics derivation
//!
//! Pure functions of the tracking store; nothing here is persisted.

use crate::tracking::TrackingStore;
use serde::Serialize;
use std::collections::BTreeSet;

/// Weekly goal: distinct plants per week
pub const WEEKLY_GOAL: usize = 30;

/// Derived aggregate metrics over the whole tracking history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Weeks whose record met the goal
    pub weeks_achieved: usize,
    /// Weeks with at least one recorded plant
    pub total_weeks: usize,
    /// Size of the union of all recorded plant-name sets (case-sensitive,
    /// names compared as stored)
    pub unique_plants: usize,
    /// Exact ratio weeks_achieved / total_weeks, 0.0 for an empty history
    pub success_rate: f64,
}

impl AggregateStats {
    /// Success rate as a whole-number percentage for display
    pub fn success_percent(&self) -> u32 {
        (self.success_rate * 100.0).round() as u32
    }
}

/// Compute aggregate statistics for `store` against `goal`
pub fn aggregate(store: &TrackingStore, goal: usize) -> AggregateStats {
    let total_weeks = store.recorded_weeks();
    let weeks_achieved = store.iter().filter(|(_, set)| set.len() >= goal).count();
    let unique: BTreeSet<&str> = store
        .iter()
        .flat_map(|(_, set)| set.iter().map(String::as_str))
        .collect();
    let success_rate = if total_weeks == 0 {
        0.0
    } else {
        weeks_achieved as f64 / total_weeks as f64
    };

    AggregateStats {
        weeks_achieved,
        total_weeks,
        unique_plants: unique.len(),
        success_rate,
    }
}
