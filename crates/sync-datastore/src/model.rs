//! Record Contract
//!
//! The basic contract for anything a store can persist. Identifiers are
//! opaque strings owned by the store: a record starts with an empty id and
//! receives one on first save.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Core trait for all stored records
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Model name in the platform schema (e.g. "Todo")
    const MODEL: &'static str;

    /// The record's identifier; empty until the store assigns one
    fn id(&self) -> &str;

    /// Called by the store when it assigns an identifier on first save
    fn set_id(&mut self, id: String);

    /// Whether the record has been persisted at least once
    fn is_saved(&self) -> bool {
        !self.id().is_empty()
    }
}
