//! Todo Store
//!
//! Observable todo collection, synced to key-value storage after every change.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::Utc;
use leptos::logging::{error, log};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{next_id, Filter, Todo, TodoId};
use crate::storage::{load_todos, save_todos, KeyValueStorage, StorageResult, STORAGE_KEY};
use crate::todo_list;

/// Reactive state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodosState {
    /// All todos in insertion order
    pub todos: Vec<Todo>,
    /// Bumped on every committed change
    pub revision: u32,
}

/// Handle to the single todo store.
///
/// `Copy`, so it can be captured by any number of view closures. All
/// mutations replace the collection with a new one and then persist it.
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: Store<TodosState>,
    storage: StoredValue<Box<dyn KeyValueStorage>, LocalStorage>,
    key: StoredValue<String>,
    last_id: StoredValue<TodoId>,
}

impl TodoStore {
    /// Store persisted under the default `"todos"` key
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Load whatever is stored under `key`; missing or unreadable data starts empty
    pub fn with_key(storage: impl KeyValueStorage + 'static, key: impl Into<String>) -> Self {
        let key = key.into();
        let todos = match load_todos(&storage, &key) {
            Ok(Some(todos)) => {
                log!("[TodoStore] Loaded {} todos from '{}'", todos.len(), key);
                todos
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("[TodoStore] Ignoring stored todos under '{}': {}", key, e);
                Vec::new()
            }
        };
        let last_id = todo_list::max_id(&todos);

        Self {
            state: Store::new(TodosState { todos, revision: 0 }),
            storage: StoredValue::new_local(Box::new(storage) as Box<dyn KeyValueStorage>),
            key: StoredValue::new(key),
            last_id: StoredValue::new(last_id),
        }
    }

    // ========================
    // Reads
    // ========================

    /// Current collection (tracked)
    pub fn todos(&self) -> Vec<Todo> {
        self.state.todos().get()
    }

    pub fn todos_untracked(&self) -> Vec<Todo> {
        self.state.todos().get_untracked()
    }

    pub fn revision(&self) -> u32 {
        self.state.revision().get()
    }

    /// Number of todos not yet completed
    pub fn todo_count(&self) -> usize {
        self.state.todos().with(|todos| todo_list::active_count(todos))
    }

    /// Whether at least one todo is completed
    pub fn has_completed_todos(&self) -> bool {
        self.state.todos().with(|todos| todo_list::any_completed(todos))
    }

    pub fn filter_todos(&self, filter: Filter) -> Vec<Todo> {
        self.state.todos().with(|todos| todo_list::filtered(todos, filter))
    }

    /// Same as `filter_todos`; unknown names show everything
    pub fn filter_todos_by_name(&self, name: &str) -> Vec<Todo> {
        self.filter_todos(Filter::from_str(name))
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new active todo, returns its ID
    pub fn add_todo(&self, title: impl Into<String>) -> TodoId {
        let todo = Todo::new(self.allocate_id(), title);
        let id = todo.id;
        self.apply(|todos| todo_list::with_added(todos, todo));
        id
    }

    /// Remove a todo by ID
    pub fn delete_todo(&self, id: TodoId) {
        self.apply(|todos| todo_list::without(todos, id));
    }

    /// Flip completion of a todo by ID; unknown IDs change nothing
    pub fn toggle_selected_todo(&self, id: TodoId) {
        let next = self
            .state
            .todos()
            .with_untracked(|todos| todo_list::with_toggled(todos, id));
        if let Some(next) = next {
            self.commit(next);
        }
    }

    /// Rename a todo by ID
    pub fn change_selected_todo(&self, id: TodoId, new_title: &str) {
        self.apply(|todos| todo_list::with_title(todos, id, new_title));
    }

    /// Remove all completed todos
    pub fn delete_completed_todos(&self) {
        self.apply(todo_list::without_completed);
    }

    /// Complete every todo, or reopen them all when all are already completed
    pub fn toggle_completion_of_all_todos(&self) {
        self.apply(todo_list::with_all_toggled);
    }

    /// Write the current collection to storage in full
    pub fn flush(&self) -> StorageResult<()> {
        let key = self.key.get_value();
        let todos = self.todos_untracked();
        self.storage
            .with_value(|storage| save_todos(storage.as_ref(), &key, &todos))
    }

    fn apply(&self, transform: impl FnOnce(&[Todo]) -> Vec<Todo>) {
        let next = self.state.todos().with_untracked(|todos| transform(todos));
        self.commit(next);
    }

    fn commit(&self, next: Vec<Todo>) {
        *self.state.todos().write() = next;
        self.state.revision().update(|r| *r = r.wrapping_add(1));
        if let Err(e) = self.flush() {
            error!("[TodoStore] Failed to persist todos: {}", e);
        }
    }

    fn allocate_id(&self) -> TodoId {
        let now = Utc::now().timestamp_millis().max(0) as TodoId;
        let id = next_id(now, self.last_id.get_value());
        self.last_id.set_value(id);
        id
    }
}

/// Get the todo store from context
pub fn use_todos() -> TodoStore {
    expect_context::<TodoStore>()
}
