//! Toolbar Component
//!
//! Sign out and local store reset, top of the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::datastore;
use crate::edit_session::EditSessions;
use crate::store::{store_set_todos, use_app_store};

/// Sign out / Clear button row
#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let sign_out = move |_| {
        spawn_local(async move {
            // The platform redirects on success, so only failures surface
            if let Err(err) = datastore::sign_out().await {
                web_sys::console::error_1(&format!("[APP] sign out failed: {}", err).into());
                leptos_toast::error(format!("Sign out failed: {}", err));
            }
        });
    };

    let clear = move |_| {
        spawn_local(async move {
            match datastore::clear_todos().await {
                Ok(()) => {
                    store_set_todos(&store, Vec::new());
                    // Every row is gone, so no draft has a surface left
                    ctx.edit_sessions.set(EditSessions::default());
                    leptos_toast::success("Local store cleared");
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] clear failed: {}", err).into());
                    leptos_toast::error(format!("Could not clear store: {}", err));
                }
            }
        });
    };

    view! {
        <div class="toolbar">
            <button class="toolbar-btn" on:click=sign_out>"Sign out"</button>
            <button class="toolbar-btn" on:click=clear>"Clear"</button>
        </div>
    }
}
