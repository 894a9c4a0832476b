//! In-Memory Store
//!
//! Reference `DataStore` engine backed by a map. The app binds the managed
//! platform in production; this engine implements the same contract so test
//! suites can exercise store-facing logic natively.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::event::{ChangeEvent, ChangeKind, Subscription};
use crate::model::Record;
use crate::store::DataStore;

/// Map-backed store with change notification fan-out
#[derive(Clone)]
pub struct MemoryStore<T: Record> {
    records: Arc<RwLock<HashMap<String, T>>>,
    subscribers: Arc<RwLock<Vec<mpsc::UnboundedSender<ChangeEvent>>>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Load fixtures under their preset ids, without publishing change events
    pub async fn seed(&self, fixtures: impl IntoIterator<Item = T>) {
        let mut records = self.records.write().await;
        for record in fixtures {
            records.insert(record.id().to_string(), record);
        }
    }

    /// Send an event to every live subscriber, pruning dead ones
    async fn publish(&self, event: ChangeEvent) {
        let mut subscribers = self.subscribers.write().await;
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        log::debug!(
            "{} {:?} published to {} subscriber(s)",
            event.model,
            event.kind,
            subscribers.len()
        );
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> DataStore<T> for MemoryStore<T> {
    async fn query_all(&self) -> StoreResult<Vec<T>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn save(&self, mut record: T) -> StoreResult<T> {
        let kind = if record.is_saved() {
            ChangeKind::Update
        } else {
            record.set_id(Uuid::new_v4().to_string());
            ChangeKind::Create
        };
        let id = record.id().to_string();
        let stored = record.clone();

        {
            let mut records = self.records.write().await;
            // Updates must target an existing record; the platform bridge
            // rejects saves against ids it has never handed out
            if kind == ChangeKind::Update && !records.contains_key(&id) {
                return Err(StoreError::NotFound(id));
            }
            records.insert(id.clone(), record);
        }

        self.publish(ChangeEvent {
            model: T::MODEL.to_string(),
            kind,
            id: Some(id),
        })
        .await;

        Ok(stored)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let removed = {
            let mut records = self.records.write().await;
            records.remove(id)
        };

        // Unknown ids are a silent no-op: no event, no error
        if removed.is_some() {
            self.publish(ChangeEvent {
                model: T::MODEL.to_string(),
                kind: ChangeKind::Delete,
                id: Some(id.to_string()),
            })
            .await;
        }

        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        {
            let mut records = self.records.write().await;
            records.clear();
        }
        self.publish(ChangeEvent {
            model: T::MODEL.to_string(),
            kind: ChangeKind::Clear,
            id: None,
        })
        .await;

        Ok(())
    }

    async fn observe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.write().await.push(tx);
        Subscription::new(rx)
    }
}
