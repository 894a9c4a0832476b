//! DataStore Bridge
//!
//! Frontend bindings to the managed platform, organized by concern.
//! datastore.js configures the platform SDK and exposes a small adapter
//! at window.__DATASTORE__; everything here goes through it.

mod session;
mod subscription;
mod todo;

use wasm_bindgen::JsValue;

use sync_datastore::StoreError;

mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// Handle returned by observe(); unsubscribe() stops delivery
        pub type ObserveHandle;

        #[wasm_bindgen(method)]
        pub fn unsubscribe(this: &ObserveHandle);

        #[wasm_bindgen(js_namespace = ["window", "__DATASTORE__"], catch)]
        pub async fn query(model: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "__DATASTORE__"], catch, js_name = queryById)]
        pub async fn query_by_id(model: &str, id: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "__DATASTORE__"], catch)]
        pub async fn save(model: &str, record: JsValue) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "__DATASTORE__"], catch)]
        pub async fn delete(model: &str, id: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "__DATASTORE__"], catch)]
        pub async fn clear() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "__DATASTORE__"], catch)]
        pub async fn ready() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "__DATASTORE__"], catch, js_name = signOut)]
        pub async fn sign_out() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "__DATASTORE__"])]
        pub fn observe(model: &str, callback: &js_sys::Function) -> ObserveHandle;
    }
}

/// Adapter rejections arrive as arbitrary JS values; keep whatever
/// message they carry
fn store_error(err: JsValue) -> StoreError {
    let message = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err));
    StoreError::Backend(message)
}

// Re-export all public items
pub use session::*;
pub use subscription::*;
pub use todo::*;
