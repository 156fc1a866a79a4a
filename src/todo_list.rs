//! Todo List Utilities
//!
//! Pure transformations over the todo collection. Every mutation returns a new
//! collection and leaves the input untouched.

use crate::models::{Filter, Todo, TodoId};

/// Append a todo at the end
pub fn with_added(todos: &[Todo], todo: Todo) -> Vec<Todo> {
    let mut next = Vec::with_capacity(todos.len() + 1);
    next.extend_from_slice(todos);
    next.push(todo);
    next
}

/// Drop every todo with the given ID
pub fn without(todos: &[Todo], id: TodoId) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

/// Flip completion of the first todo with the given ID, `None` when absent
pub fn with_toggled(todos: &[Todo], id: TodoId) -> Option<Vec<Todo>> {
    let index = todos.iter().position(|todo| todo.id == id)?;
    let mut next = todos.to_vec();
    next[index] = Todo { completed: !todos[index].completed, ..todos[index].clone() };
    Some(next)
}

/// Replace the title of the todo with the given ID
pub fn with_title(todos: &[Todo], id: TodoId, title: &str) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                Todo { title: title.to_string(), ..todo.clone() }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Keep only todos not yet completed
pub fn without_completed(todos: &[Todo]) -> Vec<Todo> {
    filtered(todos, Filter::Active)
}

/// All completed -> all active, otherwise everything becomes completed
pub fn with_all_toggled(todos: &[Todo]) -> Vec<Todo> {
    let all_completed = todos.iter().all(|todo| todo.completed);
    todos
        .iter()
        .map(|todo| Todo { completed: !all_completed, ..todo.clone() })
        .collect()
}

/// Count todos not yet completed
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

/// Whether any todo is completed
pub fn any_completed(todos: &[Todo]) -> bool {
    todos.iter().any(|todo| todo.completed)
}

/// Todos matching the filter, in order
pub fn filtered(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

/// Largest ID in the collection (0 when empty)
pub fn max_id(todos: &[Todo]) -> TodoId {
    todos.iter().map(|todo| todo.id).max().unwrap_or(0)
}
