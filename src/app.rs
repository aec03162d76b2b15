//! Priority Board App
//!
//! Header with theme toggle, the add-task form, and the four priority columns.

use leptos::prelude::*;
use reactive_stores::Store;

use board_core::{drop_destination, BoardCommand, BoardConfig, BoardManager, ColumnId, Location};
use leptos_dragdrop::*;

use crate::components::{PriorityColumn, ThemeToggle, TodoForm};
use crate::context::AppContext;
use crate::storage::{self, BrowserStore};
use crate::store::{AppState, AppStateStoreFields};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // Restore persisted state once, at startup
    let config = BoardConfig::default().with_prefers_dark(storage::prefers_dark());
    let manager = BoardManager::load(BrowserStore, config);
    let store = Store::new(AppState::from_manager(&manager));
    let ctx = AppContext::new(store, StoredValue::new(manager));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Mirror the color scheme onto <html class="dark">
    Effect::new(move |_| theme::apply_dark_class(store.dark_mode().get()));

    // Drags carry the source task slot; targets are gaps in display numbering
    let dnd = create_dnd_signals::<Location>();
    bind_global_mouseup(dnd, move |source, gap| {
        let destination = gap.map(|gap| drop_destination(source, gap));
        log::debug!("[DND] drop: source={:?}, destination={:?}", source, destination);
        ctx.dispatch(BoardCommand::MoveTask { source, destination });
    });

    view! {
        <div class=move || if dnd.active() { "app-layout dragging" } else { "app-layout" }>
            <div class="app-inner">
                <header class="app-header">
                    <h1>"Todo App"</h1>
                    <ThemeToggle />
                </header>

                <section class="form-card">
                    <TodoForm />
                </section>

                <div class="board-grid">
                    {ColumnId::ALL
                        .into_iter()
                        .map(|column_id| view! { <PriorityColumn column_id=column_id dnd=dnd /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
