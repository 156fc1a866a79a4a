//! Todos UI State
//!
//! Browser todo-list store for Leptos apps:
//! - models: todo record and view filter
//! - todo_list: pure collection transformations
//! - storage: key-value persistence (localStorage, in-memory)
//! - store: reactive store with mutations and derived views
//! - context: provider component

mod context;
mod models;
mod storage;
mod store;
mod todo_list;

pub use context::{create_browser_store, TodosProvider};
pub use models::{next_id, Filter, Todo, TodoId};
pub use storage::{
    decode_todos, encode_todos, load_todos, save_todos, BrowserStorage, KeyValueStorage,
    MemoryStorage, StorageError, StorageResult, STORAGE_KEY,
};
pub use store::{use_todos, TodoStore, TodosState};
