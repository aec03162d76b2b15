//! Board Core
//!
//! Layered engine behind the priority board:
//! - domain: tasks, columns, the board and its move rules
//! - repository: key-value persistence of board and preference
//! - manager: owns the current snapshot and applies commands

mod command;
mod config;
mod id;
mod manager;
pub mod domain;
pub mod repository;

pub use command::BoardCommand;
pub use config::{BoardConfig, StorageKeys};
pub use domain::{
    drop_destination, Board, BoardError, ColorScheme, Column, ColumnId, DomainResult, Location,
    Task,
};
pub use id::{ClockIds, TaskIdSource};
pub use manager::BoardManager;
pub use repository::{BoardRepository, KeyValueStore, MemoryStore, StoreError, StoreResult};
