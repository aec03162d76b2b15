//! Repository Layer
//!
//! Persists the board and the color preference in a string key-value store.
//! The browser backs it with localStorage; tests use `MemoryStore`.

mod board_repo;
mod error;
mod memory;
mod traits;


pub use board_repo::BoardRepository;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
