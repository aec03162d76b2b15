//! Board Configuration

/// Storage keys for the persisted state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// JSON board snapshot
    pub board: String,
    /// JSON boolean
    pub dark_mode: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            board: "todoColumns".to_string(),
            dark_mode: "darkMode".to_string(),
        }
    }
}

/// Startup settings for a `BoardManager`
#[derive(Debug, Clone, Default)]
pub struct BoardConfig {
    pub keys: StorageKeys,
    /// Environment's color-scheme hint, used when no preference is stored
    pub prefers_dark: Option<bool>,
}

impl BoardConfig {
    pub fn with_prefers_dark(mut self, prefers_dark: Option<bool>) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }
}
