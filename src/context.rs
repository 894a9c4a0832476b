//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::edit_session::EditSessions;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from the store - write
    set_reload_trigger: WriteSignal<u32>,
    /// Rows currently in edit mode with their drafts. Reloads driven by
    /// change notifications never touch this.
    pub edit_sessions: RwSignal<EditSessions>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        edit_sessions: RwSignal<EditSessions>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            edit_sessions,
        }
    }

    /// Trigger a reload of the todo list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
