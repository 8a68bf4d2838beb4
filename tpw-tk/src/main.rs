//! tpw-tk (Tracker) - command-line host for the weekly plant tracker
//!
//! Wires the engine to a SQLite-backed key-value store, the system clock,
//! and a plain-text subcommand surface.

use anyhow::Result;
use clap::Parser;
use tpw_common::clock::SystemClock;
use tpw_common::config;
use tpw_common::tracker::Tracker;
use tpw_tk::commands::{self, Command};
use tpw_tk::db::SqliteStore;
use tracing::info;

#[derive(Parser)]
#[command(name = "tpw-tk", version, about = "Weekly food-plant tracker")]
struct Cli {
    /// Data folder (defaults: TPW_ROOT_FOLDER, config file, OS data dir)
    #[arg(long, global = true)]
    root_folder: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    info!("Starting TPW Tracker (tpw-tk) v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let root_folder = config::resolve_root_folder(cli.root_folder.as_deref());
    config::ensure_root_folder(&root_folder)?;
    let db_path = config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let store = SqliteStore::open(&db_path)?;
    let mut tracker = Tracker::load(store);

    commands::dispatch(&mut tracker, &SystemClock, cli.command)
}
