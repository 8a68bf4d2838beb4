//! Persistence collaborator
//!
//! The engine persists through a single injected string key-value store.
//! The raw medium is the host's concern; no atomicity across keys is
//! assumed.

use crate::Result;
use std::collections::HashMap;

/// Storage key for the plant catalog entry
pub const PLANTS_KEY: &str = "plantsList";
/// Storage key for the weekly tracking entry
pub const WEEKLY_KEY: &str = "weeklyData";

/// String key-value store supplied by the host environment
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and examples
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
