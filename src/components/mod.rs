//! UI Components
//!
//! Leptos components that render the board and forward user intents.

mod drop_zone;
mod priority_column;
mod theme_toggle;
mod todo_form;
mod todo_item;
mod todo_list;

pub use drop_zone::DropZone;
pub use priority_column::PriorityColumn;
pub use theme_toggle::ThemeToggle;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
