//! Priority Column Component
//!
//! One column of the board: heading with task count and its task list.

use leptos::prelude::*;

use board_core::{Column, ColumnId, Location};
use leptos_dragdrop::{make_on_mouseleave, DndSignals};

use crate::components::TodoList;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::theme;

#[component]
pub fn PriorityColumn(
    column_id: ColumnId,
    dnd: DndSignals<Location>,
) -> impl IntoView {
    let store = use_app_store();

    // Re-render only when this column changes
    let column = Memo::new(move |_| store.board().read().column(column_id).clone());
    let heading = move || column.with(|c: &Column| theme::column_heading(&c.title, c.len()));
    let todos = Signal::derive(move || column.with(|c: &Column| c.todos.clone()));

    // Leaving the column while dragging means no drop target
    let on_mouseleave = make_on_mouseleave(dnd);

    view! {
        <div class=theme::column_class(column_id) on:mouseleave=on_mouseleave>
            <h2 class=theme::title_class(column_id)>{heading}</h2>
            <TodoList column_id=column_id todos=todos dnd=dnd />
        </div>
    }
}
