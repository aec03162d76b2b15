//! Theme Helpers
//!
//! Per-column class names and the document-level dark class.

use board_core::ColumnId;

/// Classes for a column container
pub fn column_class(id: ColumnId) -> &'static str {
    match id {
        ColumnId::Idea => "priority-column column-idea",
        ColumnId::InProgress => "priority-column column-in-progress",
        ColumnId::Urgent => "priority-column column-urgent",
        ColumnId::Done => "priority-column column-done",
    }
}

/// Classes for a column heading
pub fn title_class(id: ColumnId) -> &'static str {
    match id {
        ColumnId::Idea => "column-title title-idea",
        ColumnId::InProgress => "column-title title-in-progress",
        ColumnId::Urgent => "column-title title-urgent",
        ColumnId::Done => "column-title title-done",
    }
}

/// Heading text, e.g. "In Progress (2)"
pub fn column_heading(title: &str, count: usize) -> String {
    format!("{} ({})", title, count)
}

/// Toggle `dark` on the root `<html>` element
pub fn apply_dark_class(dark: bool) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
            log::warn!("failed to set dark class: {:?}", e);
        }
    }
}
