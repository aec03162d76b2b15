//! Task Id Generation

use chrono::Utc;

use crate::domain::Board;

/// Source of fresh task ids
pub trait TaskIdSource {
    fn next_id(&mut self) -> String;
}

/// Stored ids further ahead of the clock than this are not resumed from
const MAX_CLOCK_LEAD_MS: i64 = 24 * 60 * 60 * 1000;

/// Millisecond-timestamp ids, bumped so ids issued within one millisecond
/// (or after a clock step backwards) still increase.
#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: i64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after the largest numeric id already on `board`.
    /// Ids more than a day past the clock are ignored.
    pub fn resume_after(board: &Board) -> Self {
        let horizon = Utc::now().timestamp_millis().saturating_add(MAX_CLOCK_LEAD_MS);
        let last = board
            .columns()
            .flat_map(|column| column.todos.iter())
            .filter_map(|task| task.id.parse::<i64>().ok())
            .filter(|id| *id <= horizon)
            .max()
            .unwrap_or(0);
        Self { last }
    }
}

impl TaskIdSource for ClockIds {
    fn next_id(&mut self) -> String {
        let id = Utc::now().timestamp_millis().max(self.last.saturating_add(1));
        self.last = id;
        id.to_string()
    }
}

/// Deterministic ids `t1`, `t2`, ...
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct SequentialIds {
    next: u64,
}

#[cfg(test)]
impl TaskIdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("t{}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;

    #[test]
    fn test_clock_ids_are_strictly_increasing() {
        let mut ids = ClockIds::new();
        let issued: Vec<i64> = (0..50).map(|_| ids.next_id().parse().unwrap()).collect();
        assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_resume_after_skips_existing_ids() {
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        let board = Board::default()
            .with_task_added(Task::new(far_future.to_string(), "later"))
            .unwrap()
            .with_task_added(Task::new("not-a-number", "legacy"))
            .unwrap();

        let mut ids = ClockIds::resume_after(&board);
        assert_eq!(ids.next_id(), (far_future + 1).to_string());
    }

    #[test]
    fn test_resume_after_ignores_ids_far_past_the_clock() {
        let board = Board::default()
            .with_task_added(Task::new(i64::MAX.to_string(), "bogus"))
            .unwrap();

        let mut ids = ClockIds::resume_after(&board);
        let first: i64 = ids.next_id().parse().unwrap();
        let second: i64 = ids.next_id().parse().unwrap();
        assert!(first < i64::MAX);
        assert!(first < second);
    }

    #[test]
    fn test_next_id_at_max_does_not_overflow() {
        let mut ids = ClockIds { last: i64::MAX };
        assert_eq!(ids.next_id(), i64::MAX.to_string());
    }
}
