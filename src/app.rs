//! Todo-All Frontend App
//!
//! Main application component: platform startup, change subscription,
//! page layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use leptos_toast::Toaster;

use crate::components::{TodoForm, TodoList, Toolbar};
use crate::context::AppContext;
use crate::datastore;
use crate::edit_session::EditSessions;
use crate::store::{store_set_todos, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let edit_sessions = RwSignal::new(EditSessions::default());

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), edit_sessions);
    provide_context(store);
    provide_context(ctx);

    // Gate queries until the platform has loaded config and local cache
    spawn_local(async move {
        match datastore::ready().await {
            Ok(()) => store.store_ready().set(true),
            Err(err) => {
                web_sys::console::error_1(&format!("[APP] store failed to start: {}", err).into());
                leptos_toast::error(format!("Store failed to start: {}", err));
            }
        }
    });

    // Load todos once ready and whenever a reload is requested.
    // Re-fetches replace the list only; edit sessions are left alone.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        if !store.store_ready().get() {
            return;
        }
        web_sys::console::log_1(&format!("[APP] Loading todos, trigger={}", trigger).into());
        spawn_local(async move {
            match datastore::query_todos().await {
                Ok(todos) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", todos.len()).into());
                    store_set_todos(&store, todos);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] load failed: {}", err).into());
                    leptos_toast::error(format!("Could not load todos: {}", err));
                }
            }
        });
    });

    // One observe() registration for the app's lifetime; any change is a
    // hint to re-query, not a delta to apply
    let subscription = datastore::observe_todos(move |event| {
        web_sys::console::log_1(&format!("[APP] change event: {:?}", event).into());
        ctx.reload();
    });
    // The handle is not Send, so park it thread-locally and take it back
    // when the owner is cleaned up
    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        if let Some(subscription) = subscription.try_update_value(|s| s.take()).flatten() {
            subscription.unsubscribe();
        }
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <Toolbar />

                <h2>"Todos"</h2>

                <TodoForm />

                <TodoList />

                <p class="todo-count">{move || format!("{} todos", store.todos().get().len())}</p>
            </main>

            <Toaster />
        </div>
    }
}
