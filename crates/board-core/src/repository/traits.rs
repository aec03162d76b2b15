//! Repository Layer - Core Traits

use super::error::StoreResult;

/// String-keyed, string-valued persistent store
///
/// Synchronous: every read and write completes before the next event runs.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if never written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
