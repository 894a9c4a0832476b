//! Platform Session Controls
//!
//! Readiness gate, local cache reset and sign-out. Platform
//! configuration itself lives in the JS adapter; this side only awaits
//! outcomes.

use sync_datastore::StoreResult;

use super::{js, store_error};

/// Resolves once the platform has loaded its config and local cache.
/// No queries may be issued before this.
pub async fn ready() -> StoreResult<()> {
    js::ready().await.map_err(store_error)?;
    Ok(())
}

/// Reset the local store. Todo is the only model, so this empties the
/// list; remote data is untouched.
pub async fn clear_todos() -> StoreResult<()> {
    js::clear().await.map_err(store_error)?;
    Ok(())
}

pub async fn sign_out() -> StoreResult<()> {
    js::sign_out().await.map_err(store_error)?;
    Ok(())
}
