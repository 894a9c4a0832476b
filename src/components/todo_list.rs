//! Todo List Component
//!
//! Renders the fetched todos as rows.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// List of todo rows
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let todos = move || store.todos().get();

    view! {
        <div class="todo-list">
            <For
                each=todos
                // Key on the mutable fields too so edits cause a re-render
                key=|todo| (todo.id.clone(), todo.name.clone(), todo.description.clone())
                children=move |todo| view! { <TodoRow todo=todo/> }
            />
        </div>
    }
}
