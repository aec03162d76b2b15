//! Task Entity

use serde::{Deserialize, Serialize};

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, generated at creation time
    pub id: String,
    /// User text, never empty after trimming
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create an open task
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }
}
