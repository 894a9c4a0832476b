//! Sync DataStore Contract
//!
//! Storage-agnostic contract for a synchronizing record store: the CRUD and
//! change-notification surface an app binds against, plus an in-memory
//! engine so store-facing logic can be exercised natively in tests.
//!
//! Layers:
//! - model: the `Record` contract every stored entity implements
//! - store: the `DataStore` trait (query/save/delete/clear/observe)
//! - event: change notifications and per-subscriber handles
//! - memory: reference engine backed by a map

mod error;
mod event;
mod memory;
mod model;
mod store;


pub use error::{StoreError, StoreResult};
pub use event::{ChangeEvent, ChangeKind, Subscription};
pub use memory::MemoryStore;
pub use model::Record;
pub use store::DataStore;
