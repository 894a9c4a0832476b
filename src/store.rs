//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::Todo;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, in store order
    pub todos: Vec<Todo>,
    /// Set once the platform reports ready; queries wait for it
    pub store_ready: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list (full re-fetch)
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Update a todo in place, or append it when unseen
pub fn store_upsert_todo(store: &AppStore, todo: Todo) {
    // The subfield lens must outlive its write guard, so bind it first.
    let todos_field = store.todos();
    let mut todos = todos_field.write();
    match todos.iter_mut().find(|t| t.id == todo.id) {
        Some(slot) => *slot = todo,
        None => todos.push(todo),
    }
}

/// Remove a todo by id
pub fn store_remove_todo(store: &AppStore, id: &str) {
    store.todos().write().retain(|todo| todo.id != id);
}
