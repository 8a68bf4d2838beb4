//! Session facade
//!
//! Owns the catalog and tracking store for one interactive session. There is
//! exactly one writer at a time; every mutation runs to completion and then
//! persists the affected entry. Persistence is fire-and-forget: a failed
//! save is logged, never escalated.

use crate::catalog::{Plant, PlantCatalog};
use crate::import::{self, ImportSummary};
use crate::migrate;
use crate::stats::{self, AggregateStats, WEEKLY_GOAL};
use crate::store::{StateStore, PLANTS_KEY, WEEKLY_KEY};
use crate::streak;
use crate::tracking::TrackingStore;
use crate::week::WeekKey;
use crate::Result;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

pub struct Tracker<S: StateStore> {
    catalog: PlantCatalog,
    weeks: TrackingStore,
    store: S,
}

impl<S: StateStore> Tracker<S> {
    /// Load a session from the host store, upgrading legacy shapes and
    /// recovering from corrupt entries.
    pub fn load(store: S) -> Self {
        let (catalog, weeks) = migrate::load_state(&store);
        Tracker {
            catalog,
            weeks,
            store,
        }
    }

    pub fn catalog(&self) -> &PlantCatalog {
        &self.catalog
    }

    pub fn weeks(&self) -> &TrackingStore {
        &self.weeks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Toggle a plant for a week and persist the history. Returns the
    /// week's resulting set.
    pub fn toggle_plant(&mut self, week: &WeekKey, plant: &str) -> BTreeSet<String> {
        let set = self.weeks.toggle(week, plant);
        self.persist_weeks();
        set
    }

    /// Add a plant to the catalog and persist it
    pub fn add_plant(&mut self, name: &str, category: Option<&str>) -> Result<Plant> {
        let plant = self.catalog.add_plant(name, category)?;
        self.persist_catalog();
        Ok(plant)
    }

    /// Merge an imported plant list into the catalog; persists when
    /// anything was added
    pub fn import_plants(&mut self, text: &str) -> ImportSummary {
        let summary = import::import_csv(&mut self.catalog, text);
        if summary.imported > 0 {
            self.persist_catalog();
        }
        summary
    }

    /// Replace the catalog with the built-in defaults and persist it
    pub fn reset_catalog(&mut self) {
        self.catalog.reset_to_defaults();
        info!("Catalog reset to the built-in defaults");
        self.persist_catalog();
    }

    pub fn stats(&self) -> AggregateStats {
        stats::aggregate(&self.weeks, WEEKLY_GOAL)
    }

    pub fn streak(&self, current: &WeekKey) -> u32 {
        streak::current_streak(&self.weeks, current, WEEKLY_GOAL)
    }

    fn persist_catalog(&mut self) {
        match serde_json::to_string(self.catalog.plants()) {
            Ok(json) => {
                if let Err(e) = self.store.set(PLANTS_KEY, &json) {
                    warn!("Failed to save {PLANTS_KEY}: {e}");
                }
            }
            Err(e) => warn!("Failed to serialize {PLANTS_KEY}: {e}"),
        }
    }

    fn persist_weeks(&mut self) {
        let map: BTreeMap<&str, Vec<&str>> = self
            .weeks
            .iter()
            .map(|(week, set)| (week.as_str(), set.iter().map(String::as_str).collect()))
            .collect();
        match serde_json::to_string(&map) {
            Ok(json) => {
                if let Err(e) = self.store.set(WEEKLY_KEY, &json) {
                    warn!("Failed to save {WEEKLY_KEY}: {e}");
                }
            }
            Err(e) => warn!("Failed to serialize {WEEKLY_KEY}: {e}"),
        }
    }
}
