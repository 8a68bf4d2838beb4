//! Consecutive-week streak derivation

use crate::tracking::TrackingStore;
use crate::week::WeekKey;

/// Count consecutive weeks meeting `goal`, walking backward from `current`.
///
/// The in-progress current week is counted only once it already meets the
/// goal; short of the goal it is skipped rather than treated as a break, so
/// a streak neither resets nor inflates mid-week. The walk stops at the
/// first earlier week below the goal (a week with no record counts as 0).
pub fn current_streak(store: &TrackingStore, current: &WeekKey, goal: usize) -> u32 {
    let mut streak = 0;
    if store.count_for(current) >= goal {
        streak += 1;
    }
    let mut week = current.previous();
    while store.count_for(&week) >= goal {
        streak += 1;
        week = week.previous();
    }
    streak
}
