//! Board Commands
//!
//! User intents forwarded by the renderer, applied by `BoardManager::apply`.

use crate::domain::{ColumnId, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Form submit
    AddTask { text: String },
    /// Checkbox click
    ToggleTask { id: String, column: ColumnId },
    /// Delete click
    DeleteTask { id: String, column: ColumnId },
    /// Drag release; `destination` is `None` when dropped outside any column
    MoveTask {
        source: Location,
        destination: Option<Location>,
    },
    ToggleDarkMode,
}

impl BoardCommand {
    /// Short label for logs
    pub fn name(&self) -> &'static str {
        match self {
            BoardCommand::AddTask { .. } => "add_task",
            BoardCommand::ToggleTask { .. } => "toggle_task",
            BoardCommand::DeleteTask { .. } => "delete_task",
            BoardCommand::MoveTask { .. } => "move_task",
            BoardCommand::ToggleDarkMode => "toggle_dark_mode",
        }
    }
}
