//! Board State Manager
//!
//! Owns the current board snapshot and color scheme. Each operation builds
//! the next snapshot, swaps it in, and writes it through to the store.
//! Rejected operations leave everything untouched and are only logged.

use crate::command::BoardCommand;
use crate::config::BoardConfig;
use crate::domain::{Board, ColorScheme, ColumnId, DomainResult, Location, Task};
use crate::id::{ClockIds, TaskIdSource};
use crate::repository::{BoardRepository, KeyValueStore};

pub struct BoardManager<S: KeyValueStore, I: TaskIdSource = ClockIds> {
    board: Board,
    scheme: ColorScheme,
    repo: BoardRepository<S>,
    ids: I,
}

impl<S: KeyValueStore> BoardManager<S> {
    /// Restore state from `store`, issuing timestamp ids for new tasks
    pub fn load(store: S, config: BoardConfig) -> Self {
        let repo = BoardRepository::new(store, config.keys);
        let (board, scheme) = restore(&repo, config.prefers_dark);
        let ids = ClockIds::resume_after(&board);
        Self { board, scheme, repo, ids }
    }
}

impl<S: KeyValueStore, I: TaskIdSource> BoardManager<S, I> {
    /// Restore state from `store` with a caller-supplied id source
    pub fn load_with_ids(store: S, config: BoardConfig, ids: I) -> Self {
        let repo = BoardRepository::new(store, config.keys);
        let (board, scheme) = restore(&repo, config.prefers_dark);
        Self { board, scheme, repo, ids }
    }

    /// Current snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dark_mode(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn repository(&self) -> &BoardRepository<S> {
        &self.repo
    }

    /// Apply one user intent; returns whether any state changed
    pub fn apply(&mut self, command: BoardCommand) -> bool {
        log::debug!("apply {}", command.name());
        match command {
            BoardCommand::AddTask { text } => self.add_task(&text),
            BoardCommand::ToggleTask { id, column } => self.toggle_task(&id, column),
            BoardCommand::DeleteTask { id, column } => self.delete_task(&id, column),
            BoardCommand::MoveTask { source, destination } => self.move_task(source, destination),
            BoardCommand::ToggleDarkMode => {
                self.toggle_dark_mode();
                true
            }
        }
    }

    /// Append a new open task to Idea. Blank text is ignored.
    pub fn add_task(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("add_task ignored: blank text");
            return false;
        }
        let task = Task::new(self.ids.next_id(), text);
        let result = self.board.with_task_added(task);
        self.commit("add_task", result)
    }

    pub fn toggle_task(&mut self, id: &str, column: ColumnId) -> bool {
        let result = self.board.with_task_toggled(id, column);
        self.commit("toggle_task", result)
    }

    pub fn delete_task(&mut self, id: &str, column: ColumnId) -> bool {
        let result = self.board.with_task_deleted(id, column);
        self.commit("delete_task", result)
    }

    /// Reconcile a finished drag.
    ///
    /// A cancelled drop (`None`) or a drop back onto its own slot changes nothing.
    pub fn move_task(&mut self, source: Location, destination: Option<Location>) -> bool {
        let Some(destination) = destination else {
            log::debug!("move_task ignored: dropped outside any column");
            return false;
        };
        if source == destination {
            return false;
        }
        let result = self.board.with_task_moved(source, destination);
        self.commit("move_task", result)
    }

    /// Flip the color scheme and persist it; returns the new dark flag
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.scheme = self.scheme.toggled();
        let dark = self.scheme.is_dark();
        if let Err(err) = self.repo.save_dark_mode(dark) {
            log::warn!("failed to persist dark mode: {}", err);
        }
        dark
    }

    fn commit(&mut self, op: &str, result: DomainResult<Board>) -> bool {
        match result {
            Ok(next) => {
                self.board = next;
                if let Err(err) = self.repo.save_board(&self.board) {
                    log::warn!("failed to persist board after {}: {}", op, err);
                }
                true
            }
            Err(err) => {
                log::warn!("{} ignored: {}", op, err);
                false
            }
        }
    }
}

/// Startup state: stored board or empty columns, stored or ambient scheme.
/// Unreadable values fall back to defaults.
fn restore<S: KeyValueStore>(repo: &BoardRepository<S>, prefers_dark: Option<bool>) -> (Board, ColorScheme) {
    let board = match repo.load_board() {
        Ok(Some(board)) => {
            log::info!("restored board with {} tasks", board.task_count());
            board
        }
        Ok(None) => Board::default(),
        Err(err) => {
            log::warn!("starting with an empty board: {}", err);
            Board::default()
        }
    };

    let persisted = repo.load_dark_mode().unwrap_or_else(|err| {
        log::warn!("ignoring stored dark mode: {}", err);
        None
    });

    (board, ColorScheme::resolve(persisted, prefers_dark))
}
