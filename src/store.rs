//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds the snapshot the view renders; `BoardManager` stays the source of truth.

use leptos::prelude::*;
use reactive_stores::Store;

use board_core::{Board, BoardManager, KeyValueStore, TaskIdSource};

/// Renderer-visible state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current board snapshot
    pub board: Board,
    /// Dark color scheme active
    pub dark_mode: bool,
}

impl AppState {
    pub fn from_manager<S: KeyValueStore, I: TaskIdSource>(manager: &BoardManager<S, I>) -> Self {
        Self {
            board: manager.board().clone(),
            dark_mode: manager.dark_mode(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the rendered snapshot wholesale
pub fn store_replace(store: &AppStore, state: AppState) {
    *store.board().write() = state.board;
    *store.dark_mode().write() = state.dark_mode;
}
