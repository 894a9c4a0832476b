//! Store Errors
//!
//! Failures a store operation can report. Callers treat them as opaque:
//! whatever went wrong behind the store (network, auth, local cache), the
//! only recovery is to surface the message and let the user retry.

use serde::{Deserialize, Serialize};

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreError {
    /// No record with the requested id exists
    NotFound(String),
    /// The backing platform failed or rejected the operation
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
            StoreError::Backend(msg) => write!(f, "Store failure: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
