//! Change Subscriptions
//!
//! observe() wiring: a Rust callback handed to the adapter, kept alive
//! until unsubscribed.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use sync_datastore::{ChangeEvent, Record};

use super::js;
use crate::models::Todo;

/// Live observe() registration. App unsubscribes in on_cleanup; the
/// closure must outlive the registration, so it rides along here.
pub struct StoreSubscription {
    handle: js::ObserveHandle,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl StoreSubscription {
    /// Stop receiving change events. Safe even if nothing ever fired.
    pub fn unsubscribe(self) {
        self.handle.unsubscribe();
    }
}

/// Register for Todo change events. Events are hints to re-query, not
/// deltas; malformed payloads are logged and dropped.
pub fn observe_todos(on_change: impl Fn(ChangeEvent) + 'static) -> StoreSubscription {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
        match serde_wasm_bindgen::from_value::<ChangeEvent>(payload) {
            Ok(event) => on_change(event),
            Err(err) => {
                web_sys::console::warn_1(&format!("[STORE] bad change event: {}", err).into());
            }
        }
    });
    let handle = js::observe(Todo::MODEL, callback.as_ref().unchecked_ref());
    StoreSubscription {
        handle,
        _callback: callback,
    }
}
