//! Drag Moves
//!
//! Reorder within a column and migrate between columns. Entering Done marks
//! a task complete, leaving Done reopens it; other moves keep the flag.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::column::ColumnId;
use super::error::{BoardError, DomainResult};

/// A position inside a column: a task slot or a drop gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub column: ColumnId,
    pub index: usize,
}

impl Location {
    pub fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// Completion flag a task carries after moving from `from` to `to`
pub fn completion_after_move(from: ColumnId, to: ColumnId, completed: bool) -> bool {
    if from == to {
        completed
    } else if to.is_done() {
        true
    } else if from.is_done() {
        false
    } else {
        completed
    }
}

/// Convert a drop gap into the insertion index a move expects.
///
/// Gaps are numbered against the column as displayed, before the dragged
/// task is lifted out. Within the source column every gap after the task
/// shifts down by one once it is removed.
pub fn drop_destination(source: Location, gap: Location) -> Location {
    if gap.column == source.column && gap.index > source.index {
        Location::new(gap.column, gap.index - 1)
    } else {
        gap
    }
}

impl Board {
    /// Lift the task at `source` and insert it at `destination`.
    ///
    /// `destination.index` counts positions after the removal. Past-the-end
    /// destinations clamp to the end of the column; an empty source slot is
    /// an error.
    pub fn with_task_moved(&self, source: Location, destination: Location) -> DomainResult<Board> {
        let len = self.column(source.column).len();
        if source.index >= len {
            return Err(BoardError::IndexOutOfRange {
                column: source.column,
                index: source.index,
                len,
            });
        }

        let mut next = self.clone();
        let mut task = next.column_mut(source.column).todos.remove(source.index);
        task.completed = completion_after_move(source.column, destination.column, task.completed);

        let todos = &mut next.column_mut(destination.column).todos;
        let index = destination.index.min(todos.len());
        if index != destination.index {
            log::debug!(
                "clamped drop index {} to {} in column {}",
                destination.index,
                index,
                destination.column
            );
        }
        todos.insert(index, task);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;

    fn board(columns: Vec<(ColumnId, Vec<(&str, bool)>)>) -> Board {
        let mut board = Board::default();
        for (column, tasks) in columns {
            for (id, completed) in tasks {
                let mut task = Task::new(id, id.to_uppercase());
                task.completed = completed;
                board.column_mut(column).todos.push(task);
            }
        }
        board
    }

    fn ids(board: &Board, column: ColumnId) -> Vec<&str> {
        board.column(column).todos.iter().map(|t| t.id.as_str()).collect()
    }

    fn at(column: ColumnId, index: usize) -> Location {
        Location::new(column, index)
    }

    #[test]
    fn test_reorder_forward() {
        let b = board(vec![(ColumnId::Idea, vec![("a", false), ("b", false), ("c", false), ("d", false)])]);
        let next = b.with_task_moved(at(ColumnId::Idea, 0), at(ColumnId::Idea, 2)).unwrap();
        assert_eq!(ids(&next, ColumnId::Idea), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_reorder_backward() {
        let b = board(vec![(ColumnId::Idea, vec![("a", false), ("b", false), ("c", false), ("d", false)])]);
        let next = b.with_task_moved(at(ColumnId::Idea, 3), at(ColumnId::Idea, 1)).unwrap();
        assert_eq!(ids(&next, ColumnId::Idea), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_reorder_is_permutation() {
        let b = board(vec![(ColumnId::Urgent, vec![("a", true), ("b", false), ("c", true)])]);
        let next = b.with_task_moved(at(ColumnId::Urgent, 2), at(ColumnId::Urgent, 0)).unwrap();

        let mut before: Vec<_> = b.column(ColumnId::Urgent).todos.clone();
        let mut after: Vec<_> = next.column(ColumnId::Urgent).todos.clone();
        before.sort_by(|x, y| x.id.cmp(&y.id));
        after.sort_by(|x, y| x.id.cmp(&y.id));
        assert_eq!(before, after);
        assert_eq!(ids(&next, ColumnId::Urgent), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_in_done_keeps_completed() {
        let b = board(vec![(ColumnId::Done, vec![("a", false), ("b", true)])]);
        let next = b.with_task_moved(at(ColumnId::Done, 0), at(ColumnId::Done, 1)).unwrap();
        assert_eq!(ids(&next, ColumnId::Done), vec!["b", "a"]);
        // Same-column moves never force the flag, even in Done
        assert!(!next.column(ColumnId::Done).todos[1].completed);
    }

    #[test]
    fn test_move_into_done_completes() {
        let b = board(vec![(ColumnId::Idea, vec![("a", false)])]);
        let next = b.with_task_moved(at(ColumnId::Idea, 0), at(ColumnId::Done, 0)).unwrap();
        assert!(next.column(ColumnId::Idea).is_empty());
        assert_eq!(next.column(ColumnId::Done).todos, vec![Task {
            id: "a".to_string(),
            text: "A".to_string(),
            completed: true,
        }]);
    }

    #[test]
    fn test_move_out_of_done_reopens() {
        let b = board(vec![(ColumnId::Done, vec![("a", true)])]);
        let next = b.with_task_moved(at(ColumnId::Done, 0), at(ColumnId::Urgent, 0)).unwrap();
        assert!(next.column(ColumnId::Done).is_empty());
        assert_eq!(ids(&next, ColumnId::Urgent), vec!["a"]);
        assert!(!next.column(ColumnId::Urgent).todos[0].completed);
    }

    #[test]
    fn test_move_between_open_columns_keeps_flag() {
        let b = board(vec![
            (ColumnId::Idea, vec![("a", true), ("b", false)]),
            (ColumnId::InProgress, vec![("x", false)]),
        ]);
        let next = b.with_task_moved(at(ColumnId::Idea, 0), at(ColumnId::InProgress, 1)).unwrap();
        assert_eq!(ids(&next, ColumnId::InProgress), vec!["x", "a"]);
        assert!(next.column(ColumnId::InProgress).todos[1].completed);

        let next = next.with_task_moved(at(ColumnId::Idea, 0), at(ColumnId::Urgent, 0)).unwrap();
        assert!(!next.column(ColumnId::Urgent).todos[0].completed);
        assert_eq!(next.task_count(), 3);
    }

    #[test]
    fn test_destination_index_is_clamped() {
        let b = board(vec![
            (ColumnId::Idea, vec![("a", false)]),
            (ColumnId::Urgent, vec![("x", false), ("y", false)]),
        ]);
        let next = b.with_task_moved(at(ColumnId::Idea, 0), at(ColumnId::Urgent, 99)).unwrap();
        assert_eq!(ids(&next, ColumnId::Urgent), vec!["x", "y", "a"]);

        let next = next.with_task_moved(at(ColumnId::Urgent, 0), at(ColumnId::Urgent, 99)).unwrap();
        assert_eq!(ids(&next, ColumnId::Urgent), vec!["y", "a", "x"]);
    }

    #[test]
    fn test_source_out_of_range_is_rejected() {
        let b = board(vec![(ColumnId::Idea, vec![("a", false)])]);
        let err = b.with_task_moved(at(ColumnId::Idea, 1), at(ColumnId::Done, 0)).unwrap_err();
        assert_eq!(err, BoardError::IndexOutOfRange { column: ColumnId::Idea, index: 1, len: 1 });

        let err = b.with_task_moved(at(ColumnId::Urgent, 0), at(ColumnId::Done, 0)).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { len: 0, .. }));
    }

    #[test]
    fn test_completion_rule_table() {
        use ColumnId::*;
        assert!(completion_after_move(Idea, Done, false));
        assert!(completion_after_move(Urgent, Done, true));
        assert!(!completion_after_move(Done, Idea, true));
        assert!(!completion_after_move(Done, InProgress, false));
        assert!(completion_after_move(Idea, Urgent, true));
        assert!(!completion_after_move(InProgress, Idea, false));
        assert!(!completion_after_move(Done, Done, false));
    }

    #[test]
    fn test_drop_destination_shifts_gaps_after_source() {
        let source = at(ColumnId::Idea, 1);
        // Gaps 0..=len against [a, b, c]; b is being dragged
        assert_eq!(drop_destination(source, at(ColumnId::Idea, 0)), at(ColumnId::Idea, 0));
        assert_eq!(drop_destination(source, at(ColumnId::Idea, 1)), at(ColumnId::Idea, 1));
        assert_eq!(drop_destination(source, at(ColumnId::Idea, 2)), at(ColumnId::Idea, 1));
        assert_eq!(drop_destination(source, at(ColumnId::Idea, 3)), at(ColumnId::Idea, 2));
        // Other columns are unaffected
        assert_eq!(drop_destination(source, at(ColumnId::Done, 3)), at(ColumnId::Done, 3));
    }

    #[test]
    fn test_gap_after_last_moves_to_end() {
        let b = board(vec![(ColumnId::Idea, vec![("a", false), ("b", false), ("c", false)])]);
        let source = at(ColumnId::Idea, 0);
        let destination = drop_destination(source, at(ColumnId::Idea, 3));
        let next = b.with_task_moved(source, destination).unwrap();
        assert_eq!(ids(&next, ColumnId::Idea), vec!["b", "c", "a"]);
    }
}
