//! Domain Layer
//!
//! Board entities and the rules for changing them.
//! Every operation returns a new `Board`; nothing here touches storage.

mod board;
mod column;
mod error;
mod moves;
mod scheme;
mod task;

pub use board::Board;
pub use column::{Column, ColumnId};
pub use error::{BoardError, DomainResult};
pub use moves::{completion_after_move, drop_destination, Location};
pub use scheme::ColorScheme;
pub use task::Task;
