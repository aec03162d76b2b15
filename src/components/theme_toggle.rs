//! Theme Toggle Component

use leptos::prelude::*;

use board_core::BoardCommand;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Sun/moon button switching between light and dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dark = move || store.dark_mode().get();

    view! {
        <button
            class="theme-toggle"
            aria-label=move || if dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| ctx.dispatch(BoardCommand::ToggleDarkMode)
        >
            {move || if dark() { "☀" } else { "☾" }}
        </button>
    }
}
