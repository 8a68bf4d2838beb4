//! Subcommand implementations
//!
//! Plain-text output only; all tracking semantics live in tpw-common.

use crate::db::SqliteStore;
use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};
use tpw_common::clock::Clock;
use tpw_common::tracker::Tracker;
use tpw_common::week::{self, WeekKey};
use tpw_common::WEEKLY_GOAL;

#[derive(Subcommand)]
pub enum Command {
    /// Show one week's recorded plants
    Week {
        /// Week key (YYYY-Wnn); defaults to the current week
        #[arg(long)]
        week: Option<String>,
    },
    /// Toggle a plant on or off for a week
    Toggle {
        plant: String,
        /// Week key (YYYY-Wnn); defaults to the current week
        #[arg(long)]
        week: Option<String>,
    },
    /// Add a plant to the catalog
    Add {
        name: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Import plants from a CSV file (category,name or bare name per line)
    Import { file: PathBuf },
    /// List the catalog by category
    Catalog,
    /// Replace the catalog with the built-in defaults
    ResetCatalog {
        /// Confirm the reset; all user-added plants are discarded
        #[arg(long)]
        yes: bool,
    },
    /// Show aggregate statistics
    Stats,
    /// Show the current goal streak
    Streak,
    /// Show the 52-week achievement grid for a year
    Grid {
        /// Defaults to the current ISO week-numbering year
        #[arg(long)]
        year: Option<i32>,
    },
}

pub fn dispatch(
    tracker: &mut Tracker<SqliteStore>,
    clock: &dyn Clock,
    command: Command,
) -> Result<()> {
    match command {
        Command::Week { week } => show_week(tracker, clock, week.as_deref()),
        Command::Toggle { plant, week } => toggle(tracker, clock, &plant, week.as_deref()),
        Command::Add { name, category } => add(tracker, &name, category.as_deref()),
        Command::Import { file } => import(tracker, &file),
        Command::Catalog => catalog(tracker),
        Command::ResetCatalog { yes } => reset_catalog(tracker, yes),
        Command::Stats => stats(tracker),
        Command::Streak => streak(tracker, clock),
        Command::Grid { year } => grid(tracker, clock, year),
    }
}

fn resolve_week(arg: Option<&str>, clock: &dyn Clock) -> Result<WeekKey> {
    match arg {
        Some(s) => Ok(WeekKey::parse(s)?),
        None => Ok(WeekKey::current(clock)),
    }
}

fn show_week(
    tracker: &Tracker<SqliteStore>,
    clock: &dyn Clock,
    week: Option<&str>,
) -> Result<()> {
    let week = resolve_week(week, clock)?;
    let plants = tracker.weeks().plants_for(&week);
    println!("{week}: {} / {WEEKLY_GOAL} plants", plants.len());
    for plant in &plants {
        println!("  {plant}");
    }
    Ok(())
}

fn toggle(
    tracker: &mut Tracker<SqliteStore>,
    clock: &dyn Clock,
    plant: &str,
    week: Option<&str>,
) -> Result<()> {
    let week = resolve_week(week, clock)?;
    let set = tracker.toggle_plant(&week, plant);
    if set.contains(plant) {
        println!("Added {plant:?} to {week} ({} / {WEEKLY_GOAL})", set.len());
    } else {
        println!(
            "Removed {plant:?} from {week} ({} / {WEEKLY_GOAL})",
            set.len()
        );
    }
    Ok(())
}

fn add(tracker: &mut Tracker<SqliteStore>, name: &str, category: Option<&str>) -> Result<()> {
    match tracker.add_plant(name, category) {
        Ok(plant) => println!("Added {} ({})", plant.name, plant.category),
        Err(e) => println!("Not added: {e}"),
    }
    Ok(())
}

fn import(tracker: &mut Tracker<SqliteStore>, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let summary = tracker.import_plants(&text);
    println!(
        "Imported {} plants, skipped {}",
        summary.imported, summary.skipped
    );
    Ok(())
}

fn catalog(tracker: &Tracker<SqliteStore>) -> Result<()> {
    for category in tracker.catalog().categories() {
        println!("{category}:");
        for plant in tracker.catalog().iter().filter(|p| p.category == category) {
            println!("  {}", plant.name);
        }
    }
    println!("{} plants", tracker.catalog().len());
    Ok(())
}

fn reset_catalog(tracker: &mut Tracker<SqliteStore>, yes: bool) -> Result<()> {
    if !yes {
        println!("Reset discards every user-added plant; re-run with --yes to confirm.");
        return Ok(());
    }
    tracker.reset_catalog();
    println!("Catalog reset ({} plants)", tracker.catalog().len());
    Ok(())
}

fn stats(tracker: &Tracker<SqliteStore>) -> Result<()> {
    let stats = tracker.stats();
    println!("Weeks tracked:   {}", stats.total_weeks);
    println!("Weeks at goal:   {}", stats.weeks_achieved);
    println!("Success rate:    {}%", stats.success_percent());
    println!("Distinct plants: {}", stats.unique_plants);
    Ok(())
}

fn streak(tracker: &Tracker<SqliteStore>, clock: &dyn Clock) -> Result<()> {
    let current = WeekKey::current(clock);
    let streak = tracker.streak(&current);
    println!("Current streak: {streak} week(s) at {WEEKLY_GOAL}+ plants");
    Ok(())
}

fn grid(tracker: &Tracker<SqliteStore>, clock: &dyn Clock, year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(|| WeekKey::current(clock).year());
    let weeks = week::grid_weeks(year);
    let achieved = weeks
        .iter()
        .filter(|w| tracker.weeks().count_for(w) >= WEEKLY_GOAL)
        .count();

    println!("{year}: {achieved} of {} weeks at goal", weeks.len());
    for row in weeks.chunks(13) {
        let line: Vec<&str> = row
            .iter()
            .map(|w| {
                if tracker.weeks().count_for(w) >= WEEKLY_GOAL {
                    "X"
                } else {
                    "."
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}
