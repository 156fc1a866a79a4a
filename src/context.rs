//! Todos Context
//!
//! Provides the todo store to every component below the provider.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::storage::{BrowserStorage, MemoryStorage, STORAGE_KEY};
use crate::store::TodoStore;

/// Store backed by `window.localStorage`, or by memory when the browser refuses
/// storage access (the list then lives only for this page).
///
/// Browser only: on non-wasm targets the `web-sys` calls panic instead of
/// returning an error, so native hosts build a [`TodoStore`] over
/// [`MemoryStorage`] directly.
pub fn create_browser_store(storage_key: &str) -> TodoStore {
    match BrowserStorage::new() {
        Ok(storage) => TodoStore::with_key(storage, storage_key),
        Err(e) => {
            warn!("[TodosProvider] {}, keeping todos in memory", e);
            TodoStore::with_key(MemoryStorage::new(), storage_key)
        }
    }
}

/// Creates the store and provides it via context.
///
/// Children read it with [`use_todos`](crate::store::use_todos).
#[component]
pub fn TodosProvider(
    /// Storage key for the serialized list (defaults to `"todos"`)
    #[prop(into, optional)]
    storage_key: Option<String>,
    children: Children,
) -> impl IntoView {
    let key = storage_key.unwrap_or_else(|| STORAGE_KEY.to_string());
    provide_context(create_browser_store(&key));
    children()
}
