//! tpw-tk library - Tracker host module
//!
//! The SQLite-backed key-value store and the subcommand surface, exposed as
//! a library so the integration tests can drive them directly.

pub mod commands;
pub mod db;
