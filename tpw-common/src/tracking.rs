//! Weekly tracking store
//!
//! Maps week keys to the set of plant names consumed that week. Weeks with
//! no recorded plants are never materialized; toggling off the last plant of
//! a week removes the record entirely. Names are stored as recorded, with no
//! normalization, and need not exist in the catalog.

use crate::week::WeekKey;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingStore {
    weeks: BTreeMap<WeekKey, BTreeSet<String>>,
}

impl TrackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sole mutation entry point: remove the plant if present, add it
    /// otherwise. Returns the week's resulting set.
    pub fn toggle(&mut self, week: &WeekKey, plant: &str) -> BTreeSet<String> {
        let set = self.weeks.entry(week.clone()).or_default();
        if !set.remove(plant) {
            set.insert(plant.to_string());
        }
        let result = set.clone();
        if result.is_empty() {
            self.weeks.remove(week);
        }
        result
    }

    /// Plants recorded for a week; absent weeks are implicitly empty
    pub fn plants_for(&self, week: &WeekKey) -> BTreeSet<String> {
        self.weeks.get(week).cloned().unwrap_or_default()
    }

    pub fn count_for(&self, week: &WeekKey) -> usize {
        self.weeks.get(week).map_or(0, BTreeSet::len)
    }

    /// Load-time insertion. Set semantics de-duplicate repeated names, and
    /// an empty list stores nothing.
    pub fn insert_week<I>(&mut self, week: WeekKey, plants: I)
    where
        I: IntoIterator<Item = String>,
    {
        let set: BTreeSet<String> = plants.into_iter().collect();
        if !set.is_empty() {
            self.weeks.insert(week, set);
        }
    }

    /// Number of weeks with at least one recorded plant
    pub fn recorded_weeks(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WeekKey, &BTreeSet<String>)> {
        self.weeks.iter()
    }
}
