//! Todo Row Component
//!
//! One list row. View mode shows the stored fields with Edit and Delete
//! actions; edit mode binds two inputs to the row's draft with Save
//! Changes / Cancel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::datastore;
use crate::edit_session::{commit_edit, DraftField};
use crate::models::Todo;
use crate::store::{store_remove_todo, store_upsert_todo, use_app_store};

/// One todo row with inline edit mode
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let sessions = ctx.edit_sessions;

    // Draft presence decides the row's mode
    let editing_id = todo.id.clone();
    let is_editing = move || sessions.with(|s| s.is_editing(&editing_id));
    let view_id = todo.id.clone();
    let in_view_mode = move || sessions.with(|s| !s.is_editing(&view_id));

    let draft_name_id = todo.id.clone();
    let draft_name = move || {
        sessions.with(|s| {
            s.draft(&draft_name_id)
                .and_then(|d| d.name.clone())
                .unwrap_or_default()
        })
    };
    let draft_description_id = todo.id.clone();
    let draft_description = move || {
        sessions.with(|s| {
            s.draft(&draft_description_id)
                .and_then(|d| d.description.clone())
                .unwrap_or_default()
        })
    };

    let edit_todo = todo.clone();
    let start_edit = move |_| {
        sessions.update(|s| {
            if let Err(err) = s.begin(&edit_todo) {
                web_sys::console::warn_1(&format!("[APP] edit rejected: {}", err).into());
            }
        });
    };

    let name_input_id = todo.id.clone();
    let edit_name = move |ev| {
        sessions.update(|s| s.set_field(&name_input_id, DraftField::Name, event_target_value(&ev)));
    };
    let description_input_id = todo.id.clone();
    let edit_description = move |ev| {
        sessions.update(|s| {
            s.set_field(
                &description_input_id,
                DraftField::Description,
                event_target_value(&ev),
            )
        });
    };

    // Commit: fetch the persisted row, merge the draft over it, save.
    // On failure the session stays so the user can retry or cancel.
    let save_id = todo.id.clone();
    let save_changes = move |_| {
        let id = save_id.clone();
        spawn_local(async move {
            match commit_edit(
                sessions,
                &id,
                |id| async move { datastore::get_todo(&id).await },
                |merged| async move { datastore::save_todo(&merged).await },
            )
            .await
            {
                Ok(saved) => {
                    store_upsert_todo(&store, saved);
                    leptos_toast::success("Changes saved");
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] save failed: {}", err).into());
                    leptos_toast::error(format!("Could not save changes: {}", err));
                }
            }
        });
    };

    let cancel_id = todo.id.clone();
    let cancel_edit = move |_| {
        sessions.update(|s| {
            if let Err(err) = s.discard(&cancel_id) {
                web_sys::console::warn_1(&format!("[APP] cancel rejected: {}", err).into());
            }
        });
    };

    let delete_id = todo.id.clone();
    let delete_todo = move |_| {
        let id = delete_id.clone();
        spawn_local(async move {
            match datastore::delete_todo(&id).await {
                Ok(()) => {
                    store_remove_todo(&store, &id);
                    // A draft for a deleted row has no surface left
                    sessions.update(|s| {
                        let _ = s.discard(&id);
                    });
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] delete failed: {}", err).into());
                    leptos_toast::error(format!("Could not delete todo: {}", err));
                }
            }
        });
    };

    view! {
        <div class="todo-row">
            <Show when=in_view_mode>
                <p class="todo-name">{todo.name.clone()}</p>
                <p class="todo-description">{todo.description.clone()}</p>
                <div class="todo-actions">
                    <button class="edit-btn" on:click=start_edit.clone()>"Edit"</button>
                    <button class="delete-btn" on:click=delete_todo.clone()>"Delete"</button>
                </div>
            </Show>
            <Show when=is_editing>
                <div class="todo-edit">
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=draft_name.clone()
                        on:input=edit_name.clone()
                    />
                    <input
                        type="text"
                        placeholder="Description"
                        prop:value=draft_description.clone()
                        on:input=edit_description.clone()
                    />
                    <div class="todo-actions">
                        <button class="save-btn" on:click=save_changes.clone()>"Save Changes"</button>
                        <button class="cancel-btn" on:click=cancel_edit.clone()>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
