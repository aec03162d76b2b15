//! Board Repository
//!
//! JSON encoding of the board and the dark-mode flag under their storage keys.

use super::error::{StoreError, StoreResult};
use super::traits::KeyValueStore;
use crate::config::StorageKeys;
use crate::domain::Board;

/// Reads and writes board state through a `KeyValueStore`
#[derive(Debug, Clone)]
pub struct BoardRepository<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> BoardRepository<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted board, `None` if nothing was saved yet
    pub fn load_board(&self) -> StoreResult<Option<Board>> {
        let Some(raw) = self.store.get(&self.keys.board)? else {
            return Ok(None);
        };
        let board: Board = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            key: self.keys.board.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(board.normalized()))
    }

    pub fn save_board(&mut self, board: &Board) -> StoreResult<()> {
        let json = serde_json::to_string(board).map_err(|e| StoreError::Write(e.to_string()))?;
        self.store.set(&self.keys.board, &json)
    }

    /// Load the persisted dark-mode flag, `None` if never toggled
    pub fn load_dark_mode(&self) -> StoreResult<Option<bool>> {
        let Some(raw) = self.store.get(&self.keys.dark_mode)? else {
            return Ok(None);
        };
        serde_json::from_str::<bool>(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: self.keys.dark_mode.clone(),
                reason: e.to_string(),
            })
    }

    pub fn save_dark_mode(&mut self, dark: bool) -> StoreResult<()> {
        let json = serde_json::to_string(&dark).map_err(|e| StoreError::Write(e.to_string()))?;
        self.store.set(&self.keys.dark_mode, &json)
    }
}
