//! Todo Item Component
//!
//! A draggable task row with its checkbox and delete button.

use leptos::prelude::*;

use board_core::{BoardCommand, Location, Task};
use leptos_dragdrop::{make_on_mousedown, make_on_zone_mouseenter, DndSignals};

use crate::context::use_app_context;

/// Hovering a row during a drag targets the gap just above it
#[component]
pub fn TodoItem(
    task: Task,
    slot: Location,
    dnd: DndSignals<Location>,
) -> impl IntoView {
    let ctx = use_app_context();
    let Task { id, text, completed } = task;
    let column = slot.column;
    let toggle_id = id.clone();
    let delete_id = id;

    let on_mousedown = make_on_mousedown(dnd, slot);
    let on_mouseenter = make_on_zone_mouseenter(dnd, slot);

    let row_class = move || {
        let mut c = String::from("todo-item");
        if dnd.is_dragging(slot) {
            c.push_str(" dragging");
        } else if dnd.is_target(slot) {
            c.push_str(" drop-before");
        }
        c
    };

    view! {
        <li class=row_class on:mousedown=on_mousedown on:mouseenter=on_mouseenter>
            <div class="todo-main">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| {
                        ctx.dispatch(BoardCommand::ToggleTask { id: toggle_id.clone(), column });
                    }
                />
                <span class=if completed { "todo-text completed" } else { "todo-text" }>{text}</span>
            </div>
            <button
                class="delete-btn"
                aria-label="Delete todo"
                on:click=move |_| {
                    ctx.dispatch(BoardCommand::DeleteTask { id: delete_id.clone(), column });
                }
            >
                "×"
            </button>
        </li>
    }
}
