//! Store Errors

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No backing store in this environment
    Unavailable(String),
    Read(String),
    Write(String),
    /// A stored value could not be decoded
    Corrupt { key: String, reason: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
            StoreError::Read(msg) => write!(f, "Read failed: {}", msg),
            StoreError::Write(msg) => write!(f, "Write failed: {}", msg),
            StoreError::Corrupt { key, reason } => {
                write!(f, "Corrupt value under {}: {}", key, reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}
