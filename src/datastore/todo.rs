//! Todo Operations
//!
//! Thin typed wrappers over the adapter's record CRUD.

use sync_datastore::{Record, StoreError, StoreResult};

use super::{js, store_error};
use crate::models::Todo;

pub async fn query_todos() -> StoreResult<Vec<Todo>> {
    let result = js::query(Todo::MODEL).await.map_err(store_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| StoreError::Backend(e.to_string()))
}

pub async fn get_todo(id: &str) -> StoreResult<Option<Todo>> {
    let result = js::query_by_id(Todo::MODEL, id).await.map_err(store_error)?;
    if result.is_null() || result.is_undefined() {
        return Ok(None);
    }
    let todo =
        serde_wasm_bindgen::from_value(result).map_err(|e| StoreError::Backend(e.to_string()))?;
    Ok(Some(todo))
}

/// Save a todo; the store assigns the id on first save and returns the
/// stored copy.
pub async fn save_todo(todo: &Todo) -> StoreResult<Todo> {
    let record =
        serde_wasm_bindgen::to_value(todo).map_err(|e| StoreError::Backend(e.to_string()))?;
    let result = js::save(Todo::MODEL, record).await.map_err(store_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| StoreError::Backend(e.to_string()))
}

pub async fn delete_todo(id: &str) -> StoreResult<()> {
    js::delete(Todo::MODEL, id).await.map_err(store_error)?;
    Ok(())
}
