//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`, plus the ambient color-scheme hint.

use board_core::{KeyValueStore, StoreError, StoreResult};

/// Handle to localStorage, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// `prefers-color-scheme: dark`, if the browser answers
pub fn prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media("(prefers-color-scheme: dark)").ok()??;
    Some(query.matches())
}
