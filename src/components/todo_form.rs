//! Todo Form Component
//!
//! Text input that adds a task to the Idea column.

use leptos::prelude::*;

use board_core::BoardCommand;

use crate::context::use_app_context;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is dropped by the manager
        ctx.dispatch(BoardCommand::AddTask { text: new_text.get() });
        set_new_text.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
