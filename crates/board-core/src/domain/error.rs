//! Domain Errors

use super::column::ColumnId;

/// Common result type for board operations
pub type DomainResult<T> = Result<T, BoardError>;

/// Reasons a board operation was rejected.
///
/// The manager absorbs these as no-ops; they exist so the rejection can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    UnknownColumn(String),
    TaskNotFound { id: String, column: ColumnId },
    IndexOutOfRange { column: ColumnId, index: usize, len: usize },
    EmptyText,
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::UnknownColumn(key) => write!(f, "Unknown column: {}", key),
            BoardError::TaskNotFound { id, column } => {
                write!(f, "Task {} not found in column {}", id, column)
            }
            BoardError::IndexOutOfRange { column, index, len } => {
                write!(f, "Index {} out of range for column {} (len {})", index, column, len)
            }
            BoardError::EmptyText => write!(f, "Task text is empty"),
        }
    }
}

impl std::error::Error for BoardError {}
