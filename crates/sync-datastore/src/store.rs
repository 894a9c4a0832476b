//! DataStore Contract
//!
//! The abstract CRUD + observe interface over persisted records.
//! Implementations can be an in-memory map, a platform bridge, etc.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::event::Subscription;
use crate::model::Record;

/// Core store trait for a single record model
///
/// All operations are async to match remote-backed implementations.
#[async_trait]
pub trait DataStore<T: Record>: Send + Sync {
    /// List every record of the model
    async fn query_all(&self) -> StoreResult<Vec<T>>;

    /// Look up one record by id
    async fn get(&self, id: &str) -> StoreResult<Option<T>>;

    /// Persist a record, assigning an id on first save. Saving under an
    /// id the store has never seen is an error.
    /// Returns the stored copy.
    async fn save(&self, record: T) -> StoreResult<T>;

    /// Remove a record by id. Removing an unknown id is a no-op.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Wipe every record of the model
    async fn clear(&self) -> StoreResult<()>;

    /// Subscribe to change notifications for the model
    async fn observe(&self) -> Subscription;
}
