//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use board_core::{BoardCommand, BoardManager};

use crate::storage::BrowserStore;
use crate::store::{store_replace, AppState, AppStore};

/// The board manager as owned by the running app
pub type AppManager = BoardManager<BrowserStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Snapshot the view renders
    pub store: AppStore,
    /// Source of truth; only touched through `dispatch`
    manager: StoredValue<AppManager>,
}

impl AppContext {
    pub fn new(store: AppStore, manager: StoredValue<AppManager>) -> Self {
        Self { store, manager }
    }

    /// Apply a user intent and publish the new snapshot if anything changed
    pub fn dispatch(&self, command: BoardCommand) {
        let changed = self
            .manager
            .try_update_value(|manager| manager.apply(command))
            .unwrap_or(false);
        if changed {
            let state = self.manager.with_value(AppState::from_manager);
            store_replace(&self.store, state);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
