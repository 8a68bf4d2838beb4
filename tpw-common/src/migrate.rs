//! Legacy-format migration
//!
//! Runs once at load time over the raw persisted entries, producing a valid
//! catalog and tracking store regardless of which historical shape was
//! stored. Migration is idempotent. Corrupt entries are recovered with
//! defaults rather than failing the load; data loss there is accepted
//! behavior, a crash is not.

use crate::catalog::{PlantCatalog, UNCATEGORIZED};
use crate::store::{StateStore, PLANTS_KEY, WEEKLY_KEY};
use crate::tracking::TrackingStore;
use crate::week::WeekKey;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// A persisted catalog entry in either supported shape.
///
/// Older versions stored bare name strings; current versions store
/// `{name, category}` objects. The shape is resolved here, once, instead of
/// being re-detected on every read path.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPlant {
    Legacy(String),
    Named {
        name: String,
        #[serde(default)]
        category: Option<String>,
    },
}

/// Upgrade raw catalog entries to the current shape.
///
/// Legacy names take their category from the built-in default list, falling
/// back to "Uncategorized". Entries violating the catalog invariant
/// (blank or duplicate names) are dropped with a warning so the invariant
/// holds even for inconsistent persisted data.
pub fn migrate_catalog(raw: Vec<RawPlant>) -> PlantCatalog {
    let mut upgraded = 0usize;
    let mut catalog = PlantCatalog::new();
    for entry in raw {
        let (name, category) = match entry {
            RawPlant::Legacy(name) => {
                upgraded += 1;
                let category = PlantCatalog::lookup_category(&name)
                    .unwrap_or(UNCATEGORIZED)
                    .to_string();
                (name, category)
            }
            RawPlant::Named { name, category } => {
                let category = category
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| UNCATEGORIZED.to_string());
                (name, category)
            }
        };
        if let Err(e) = catalog.add_plant(&name, Some(category.as_str())) {
            warn!("Dropping catalog entry {name:?} during migration: {e}");
        }
    }
    if upgraded > 0 {
        info!("Upgraded {upgraded} legacy catalog entries");
    }
    catalog
}

/// Load raw weekly data, de-duplicating names within each week and dropping
/// records whose key is not a real ISO week.
pub fn migrate_weeks(raw: BTreeMap<String, Vec<String>>) -> TrackingStore {
    let mut store = TrackingStore::new();
    for (key, plants) in raw {
        match WeekKey::parse(&key) {
            Ok(week) => store.insert_week(week, plants),
            Err(e) => warn!("Dropping weekly record {key:?}: {e}"),
        }
    }
    store
}

/// Load both stores from the persistence collaborator.
///
/// A missing entry yields the default catalog / an empty tracking store; a
/// corrupt entry is logged and recovered the same way.
pub fn load_state<S: StateStore>(store: &S) -> (PlantCatalog, TrackingStore) {
    let catalog = match store.get(PLANTS_KEY) {
        Ok(Some(json)) => match serde_json::from_str::<Vec<RawPlant>>(&json) {
            Ok(raw) => migrate_catalog(raw),
            Err(e) => {
                warn!("Corrupt {PLANTS_KEY} entry ({e}); falling back to default catalog");
                PlantCatalog::defaults()
            }
        },
        Ok(None) => PlantCatalog::defaults(),
        Err(e) => {
            warn!("Failed to read {PLANTS_KEY} ({e}); falling back to default catalog");
            PlantCatalog::defaults()
        }
    };

    let weeks = match store.get(WEEKLY_KEY) {
        Ok(Some(json)) => match serde_json::from_str::<BTreeMap<String, Vec<String>>>(&json) {
            Ok(raw) => migrate_weeks(raw),
            Err(e) => {
                warn!("Corrupt {WEEKLY_KEY} entry ({e}); starting with an empty history");
                TrackingStore::new()
            }
        },
        Ok(None) => TrackingStore::new(),
        Err(e) => {
            warn!("Failed to read {WEEKLY_KEY} ({e}); starting with an empty history");
            TrackingStore::new()
        }
    };

    (catalog, weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_legacy_strings_are_upgraded_with_default_categories() {
        let raw: Vec<RawPlant> =
            serde_json::from_str(r#"["Kale", "Durian"]"#).unwrap();
        let catalog = migrate_catalog(raw);

        let plants = catalog.plants();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].name, "Kale");
        assert_eq!(plants[0].category, "Vegetables");
        assert_eq!(plants[1].name, "Durian");
        assert_eq!(plants[1].category, UNCATEGORIZED);
    }

    #[test]
    fn test_migration_is_idempotent_on_current_shape() {
        let raw: Vec<RawPlant> =
            serde_json::from_str(r#"["Kale", "Durian"]"#).unwrap();
        let once = migrate_catalog(raw);

        let json = serde_json::to_string(once.plants()).unwrap();
        let again: Vec<RawPlant> = serde_json::from_str(&json).unwrap();
        let twice = migrate_catalog(again);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_mixed_shapes_load_in_one_pass() {
        let raw: Vec<RawPlant> = serde_json::from_str(
            r#"["Kale", {"name": "Nori", "category": "Sea Vegetables"}, {"name": "Durian"}]"#,
        )
        .unwrap();
        let catalog = migrate_catalog(raw);

        let plants = catalog.plants();
        assert_eq!(plants[0].category, "Vegetables");
        assert_eq!(plants[1].category, "Sea Vegetables");
        assert_eq!(plants[2].category, UNCATEGORIZED);
    }

    #[test]
    fn test_duplicate_persisted_entries_are_dropped() {
        let raw: Vec<RawPlant> =
            serde_json::from_str(r#"["Kale", "kale", " Kale "]"#).unwrap();
        let catalog = migrate_catalog(raw);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_weekly_records_dedup_within_a_week() {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(
            r#"{"2025-W10": ["Kale", "Kale", "Mango"], "2025-W11": []}"#,
        )
        .unwrap();
        let store = migrate_weeks(raw);

        assert_eq!(store.count_for(&WeekKey::parse("2025-W10").unwrap()), 2);
        assert_eq!(store.recorded_weeks(), 1);
    }

    #[test]
    fn test_weekly_records_with_bad_keys_are_dropped() {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(
            r#"{"2025-W10": ["Kale"], "not-a-week": ["Mango"]}"#,
        )
        .unwrap();
        let store = migrate_weeks(raw);
        assert_eq!(store.recorded_weeks(), 1);
    }

    #[test]
    fn test_missing_entries_load_defaults() {
        let store = MemoryStore::new();
        let (catalog, weeks) = load_state(&store);
        assert_eq!(catalog.len(), 118);
        assert!(weeks.is_empty());
    }

    #[test]
    fn test_corrupt_entries_fall_back_instead_of_failing() {
        let mut store = MemoryStore::new();
        store.set(PLANTS_KEY, "{not json").unwrap();
        store.set(WEEKLY_KEY, "also not json").unwrap();

        let (catalog, weeks) = load_state(&store);
        assert_eq!(catalog.len(), 118);
        assert!(weeks.is_empty());
    }
}
