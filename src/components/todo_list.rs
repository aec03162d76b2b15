//! Todo List Component
//!
//! Ordered tasks of one column followed by a trailing drop zone.

use leptos::prelude::*;

use board_core::{ColumnId, Location, Task};
use leptos_dragdrop::DndSignals;

use crate::components::todo_item::TodoItemProps;
use crate::components::{DropZone, TodoItem};

#[component]
pub fn TodoList(
    column_id: ColumnId,
    todos: Signal<Vec<Task>>,
    dnd: DndSignals<Location>,
) -> impl IntoView {
    let len = move || todos.with(Vec::len);

    view! {
        <ul class="todo-list">
            <For
                each=move || todos.get().into_iter().enumerate()
                key=|(index, task)| (task.id.clone(), task.text.clone(), task.completed, *index)
                children=move |(index, task)| {
                    TodoItem(
                        TodoItemProps::builder()
                            .task(task)
                            .slot(Location::new(column_id, index))
                            .dnd(dnd)
                            .build(),
                    )
                }
            />
            // Gap after the last task; an empty column is one big gap 0
            {move || {
                let gap = Location::new(column_id, len());
                view! { <DropZone gap=gap dnd=dnd empty={gap.index == 0} /> }
            }}
        </ul>
    }
}
