//! Column Entity
//!
//! The four fixed task buckets and their ordered contents.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::BoardError;
use super::task::Task;

/// Column identifier, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    Idea,
    InProgress,
    Urgent,
    Done,
}

impl ColumnId {
    /// All columns in display order
    pub const ALL: [ColumnId; 4] = [
        ColumnId::Idea,
        ColumnId::InProgress,
        ColumnId::Urgent,
        ColumnId::Done,
    ];

    /// Key used in the persisted board and in the DOM
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Idea => "idea",
            ColumnId::InProgress => "inProgress",
            ColumnId::Urgent => "urgent",
            ColumnId::Done => "done",
        }
    }

    /// Default display label
    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Idea => "Idea",
            ColumnId::InProgress => "In Progress",
            ColumnId::Urgent => "Urgent",
            ColumnId::Done => "Done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, ColumnId::Done)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| BoardError::UnknownColumn(s.to_string()))
    }
}

/// An ordered bucket of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub todos: Vec<Task>,
}

impl Column {
    /// Empty column with its default title
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            todos: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Index of the task with `task_id`, if present
    pub fn position_of(&self, task_id: &str) -> Option<usize> {
        self.todos.iter().position(|task| task.id == task_id)
    }

    // serde defaults for columns missing from a persisted board
    pub(crate) fn idea() -> Self {
        Self::new(ColumnId::Idea)
    }

    pub(crate) fn in_progress() -> Self {
        Self::new(ColumnId::InProgress)
    }

    pub(crate) fn urgent() -> Self {
        Self::new(ColumnId::Urgent)
    }

    pub(crate) fn done() -> Self {
        Self::new(ColumnId::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_keys_round_trip() {
        for id in ColumnId::ALL {
            assert_eq!(id.as_str().parse::<ColumnId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_column_key() {
        assert_eq!(
            "backlog".parse::<ColumnId>(),
            Err(BoardError::UnknownColumn("backlog".to_string()))
        );
        // Keys are case sensitive
        assert!("InProgress".parse::<ColumnId>().is_err());
    }

    #[test]
    fn test_column_id_serializes_as_key() {
        let json = serde_json::to_string(&ColumnId::InProgress).unwrap();
        assert_eq!(json, "\"inProgress\"");
    }

    #[test]
    fn test_position_of() {
        let mut column = Column::new(ColumnId::Urgent);
        column.todos.push(Task::new("a", "A"));
        column.todos.push(Task::new("b", "B"));

        assert_eq!(column.position_of("b"), Some(1));
        assert_eq!(column.position_of("zzz"), None);
        assert_eq!(column.title, "Urgent");
    }
}
