//! In-memory Store

use std::collections::HashMap;

use super::error::{StoreError, StoreResult};
use super::traits::KeyValueStore;

/// `KeyValueStore` backed by a map, for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before handing the store over
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every `set` fail, leaving contents unchanged
    pub fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.reject_writes {
            return Err(StoreError::Write(format!("{} is read-only", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
