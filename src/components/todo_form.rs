//! New Todo Form Component
//!
//! Inputs for name and description plus the create button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::datastore;
use crate::models::Todo;
use crate::store::{store_upsert_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_name = name.get();
        let new_description = description.get();
        // Both fields are required; incomplete submits are ignored
        if new_name.is_empty() || new_description.is_empty() {
            return;
        }

        spawn_local(async move {
            match datastore::save_todo(&Todo::new(new_name, new_description)).await {
                Ok(saved) => {
                    store_upsert_todo(&store, saved);
                    set_name.set(String::new());
                    set_description.set(String::new());
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] create failed: {}", err).into());
                    leptos_toast::error(format!("Could not create todo: {}", err));
                }
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Create Todo"</button>
        </form>
    }
}
