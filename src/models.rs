//! Frontend Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Serialize};
use sync_datastore::Record;

/// Todo record (matches backend schema)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned by the store on first save; empty means unsaved
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Todo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Record for Todo {
    const MODEL: &'static str = "Todo";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
