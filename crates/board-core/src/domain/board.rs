//! Board Aggregate
//!
//! Four fixed columns. Mutating operations never edit in place: each one
//! returns a fresh snapshot so the caller can swap it in atomically.

use serde::{Deserialize, Serialize};

use super::column::{Column, ColumnId};
use super::error::{BoardError, DomainResult};
use super::task::Task;

/// The complete state of all four columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default = "Column::idea")]
    idea: Column,
    #[serde(default = "Column::in_progress")]
    in_progress: Column,
    #[serde(default = "Column::urgent")]
    urgent: Column,
    #[serde(default = "Column::done")]
    done: Column,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            idea: Column::idea(),
            in_progress: Column::in_progress(),
            urgent: Column::urgent(),
            done: Column::done(),
        }
    }
}

impl Board {
    pub fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Idea => &self.idea,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Urgent => &self.urgent,
            ColumnId::Done => &self.done,
        }
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Idea => &mut self.idea,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Urgent => &mut self.urgent,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        ColumnId::ALL.into_iter().map(move |id| self.column(id))
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns().map(Column::len).sum()
    }

    /// Locate a task by id anywhere on the board
    pub fn find(&self, task_id: &str) -> Option<(ColumnId, usize)> {
        ColumnId::ALL
            .into_iter()
            .find_map(|id| self.column(id).position_of(task_id).map(|index| (id, index)))
    }

    /// Force each column's id to match the key it was stored under.
    /// Blank titles fall back to the default label.
    pub(crate) fn normalized(mut self) -> Self {
        for id in ColumnId::ALL {
            let column = self.column_mut(id);
            column.id = id;
            if column.title.trim().is_empty() {
                column.title = id.title().to_string();
            }
        }
        self
    }

    /// Append `task` to the end of the Idea column
    pub fn with_task_added(&self, task: Task) -> DomainResult<Board> {
        if task.text.trim().is_empty() {
            return Err(BoardError::EmptyText);
        }
        let mut next = self.clone();
        next.idea.todos.push(task);
        Ok(next)
    }

    /// Flip `completed` on the task with `task_id` in `column`
    pub fn with_task_toggled(&self, task_id: &str, column: ColumnId) -> DomainResult<Board> {
        let index = self.locate(task_id, column)?;
        let mut next = self.clone();
        let task = &mut next.column_mut(column).todos[index];
        task.completed = !task.completed;
        Ok(next)
    }

    /// Remove the task with `task_id` from `column`, keeping the rest in order
    pub fn with_task_deleted(&self, task_id: &str, column: ColumnId) -> DomainResult<Board> {
        let index = self.locate(task_id, column)?;
        let mut next = self.clone();
        next.column_mut(column).todos.remove(index);
        Ok(next)
    }

    fn locate(&self, task_id: &str, column: ColumnId) -> DomainResult<usize> {
        self.column(column)
            .position_of(task_id)
            .ok_or_else(|| BoardError::TaskNotFound {
                id: task_id.to_string(),
                column,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(board: &Board, column: ColumnId) -> Vec<&str> {
        board.column(column).todos.iter().map(|t| t.text.as_str()).collect()
    }

    fn board_with_urgent(ids: &[&str]) -> Board {
        let mut board = Board::default();
        for id in ids {
            board
                .column_mut(ColumnId::Urgent)
                .todos
                .push(Task::new(*id, id.to_uppercase()));
        }
        board
    }

    #[test]
    fn test_default_board_has_four_empty_columns() {
        let board = Board::default();
        let ids: Vec<ColumnId> = board.columns().map(|c| c.id).collect();
        assert_eq!(ids, ColumnId::ALL.to_vec());
        assert_eq!(board.task_count(), 0);
        assert_eq!(board.column(ColumnId::InProgress).title, "In Progress");
    }

    #[test]
    fn test_add_appends_to_idea() {
        let board = Board::default()
            .with_task_added(Task::new("1", "first"))
            .unwrap()
            .with_task_added(Task::new("2", "second"))
            .unwrap();

        assert_eq!(texts(&board, ColumnId::Idea), vec!["first", "second"]);
        assert!(!board.column(ColumnId::Idea).todos[1].completed);
        assert_eq!(board.task_count(), 2);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let board = Board::default();
        assert_eq!(
            board.with_task_added(Task::new("1", "   ")),
            Err(BoardError::EmptyText)
        );
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let board = board_with_urgent(&["a", "b", "c"]);
        let next = board.with_task_toggled("b", ColumnId::Urgent).unwrap();

        let flags: Vec<bool> = next.column(ColumnId::Urgent).todos.iter().map(|t| t.completed).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(texts(&next, ColumnId::Urgent), vec!["A", "B", "C"]);
        // Original snapshot untouched
        assert!(!board.column(ColumnId::Urgent).todos[1].completed);
    }

    #[test]
    fn test_toggle_wrong_column_is_not_found() {
        let board = board_with_urgent(&["a"]);
        let err = board.with_task_toggled("a", ColumnId::Idea).unwrap_err();
        assert_eq!(
            err,
            BoardError::TaskNotFound { id: "a".to_string(), column: ColumnId::Idea }
        );
    }

    #[test]
    fn test_delete_preserves_order() {
        let board = board_with_urgent(&["a", "b", "c", "d"]);
        let next = board.with_task_deleted("b", ColumnId::Urgent).unwrap();
        assert_eq!(texts(&next, ColumnId::Urgent), vec!["A", "C", "D"]);
        assert!(board.with_task_deleted("zzz", ColumnId::Urgent).is_err());
    }

    #[test]
    fn test_find() {
        let board = board_with_urgent(&["a", "b"]);
        assert_eq!(board.find("b"), Some((ColumnId::Urgent, 1)));
        assert_eq!(board.find("nope"), None);
    }

    #[test]
    fn test_normalized_fixes_ids_and_blank_titles() {
        let mut board = Board::default();
        board.done.id = ColumnId::Idea;
        board.done.title = String::new();
        board.urgent.title = "Hot".to_string();

        let board = board.normalized();
        assert_eq!(board.column(ColumnId::Done).id, ColumnId::Done);
        assert_eq!(board.column(ColumnId::Done).title, "Done");
        assert_eq!(board.column(ColumnId::Urgent).title, "Hot");
    }
}
