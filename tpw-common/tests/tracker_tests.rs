//! End-to-end tests for the session facade
//!
//! Exercises load, mutation, and persistence against the in-memory store
//! with a fixed clock, including the legacy-shape and corrupt-data load
//! paths.

use chrono::{TimeZone, Utc};
use tpw_common::clock::FixedClock;
use tpw_common::store::{MemoryStore, StateStore, PLANTS_KEY, WEEKLY_KEY};
use tpw_common::tracker::Tracker;
use tpw_common::week::WeekKey;
use tpw_common::WEEKLY_GOAL;

fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
}

fn week(s: &str) -> WeekKey {
    WeekKey::parse(s).unwrap()
}

#[test]
fn test_first_load_seeds_default_catalog_and_empty_history() {
    let tracker = Tracker::load(MemoryStore::new());
    assert_eq!(tracker.catalog().len(), 118);
    assert!(tracker.weeks().is_empty());
}

#[test]
fn test_toggle_persists_and_reloads() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let w = week("2025-W10");

    tracker.toggle_plant(&w, "Kale");
    tracker.toggle_plant(&w, "Mango");

    let reloaded = Tracker::load(tracker.store().clone());
    assert_eq!(reloaded.weeks().count_for(&w), 2);
    assert!(reloaded.weeks().plants_for(&w).contains("Kale"));
}

#[test]
fn test_toggle_twice_round_trips_to_empty() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let w = week("2025-W10");

    tracker.toggle_plant(&w, "Kale");
    tracker.toggle_plant(&w, "Kale");

    // The empty week must not be materialized in the persisted entry
    let json = tracker.store().get(WEEKLY_KEY).unwrap().unwrap();
    assert_eq!(json, "{}");

    let reloaded = Tracker::load(tracker.store().clone());
    assert!(reloaded.weeks().is_empty());
}

#[test]
fn test_every_mutation_rewrites_the_affected_key() {
    let mut tracker = Tracker::load(MemoryStore::new());

    assert_eq!(tracker.store().get(PLANTS_KEY).unwrap(), None);
    tracker.add_plant("Durian", None).unwrap();
    let after_add = tracker.store().get(PLANTS_KEY).unwrap().unwrap();
    assert!(after_add.contains("Durian"));

    tracker.reset_catalog();
    let after_reset = tracker.store().get(PLANTS_KEY).unwrap().unwrap();
    assert!(!after_reset.contains("Durian"));
}

#[test]
fn test_add_plant_failures_do_not_persist() {
    let mut tracker = Tracker::load(MemoryStore::new());
    assert!(tracker.add_plant("   ", None).is_err());
    assert!(tracker.add_plant("Kale", None).is_err());
    assert_eq!(tracker.store().get(PLANTS_KEY).unwrap(), None);
}

#[test]
fn test_import_merges_and_persists() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let summary = tracker.import_plants("Fruits,Durian\nKale\nRambutan");

    // Kale already exists in the default catalog
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 1);

    let reloaded = Tracker::load(tracker.store().clone());
    assert_eq!(reloaded.catalog().len(), 120);
    assert!(reloaded.catalog().contains("Rambutan"));
}

#[test]
fn test_legacy_plants_entry_is_upgraded_on_load() {
    let mut store = MemoryStore::new();
    store.set(PLANTS_KEY, r#"["Kale", "Durian"]"#).unwrap();

    let tracker = Tracker::load(store);
    let plants = tracker.catalog().plants();
    assert_eq!(plants.len(), 2);
    assert_eq!(plants[0].category, "Vegetables");
    assert_eq!(plants[1].category, "Uncategorized");
}

#[test]
fn test_corrupt_entries_fall_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set(PLANTS_KEY, "{definitely not json").unwrap();
    store.set(WEEKLY_KEY, "[1, 2").unwrap();

    let tracker = Tracker::load(store);
    assert_eq!(tracker.catalog().len(), 118);
    assert!(tracker.weeks().is_empty());
}

#[test]
fn test_history_survives_catalog_deletion() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let w = week("2025-W10");

    tracker.add_plant("Durian", None).unwrap();
    tracker.toggle_plant(&w, "Durian");
    tracker.reset_catalog();

    // Catalog no longer knows Durian; the week still records it
    assert!(!tracker.catalog().contains("Durian"));
    assert!(tracker.weeks().plants_for(&w).contains("Durian"));
}

#[test]
fn test_stats_and_streak_through_the_facade() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let current = WeekKey::current(&clock_at(2025, 3, 5)); // 2025-W10

    let mut w = current.previous();
    for _ in 0..3 {
        for i in 0..WEEKLY_GOAL {
            tracker.toggle_plant(&w, &format!("Plant {i}"));
        }
        w = w.previous();
    }
    // Current week in progress, below goal
    tracker.toggle_plant(&current, "Kale");

    assert_eq!(tracker.streak(&current), 3);

    let stats = tracker.stats();
    assert_eq!(stats.total_weeks, 4);
    assert_eq!(stats.weeks_achieved, 3);
    assert_eq!(stats.success_percent(), 75);
}
