//! Change Notifications
//!
//! Events emitted by a store after a mutation, and the per-subscriber
//! handle they arrive through. Events are hints that the model set changed;
//! subscribers re-query rather than applying them as deltas.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// What kind of mutation a change notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
    /// The whole model set was wiped (local reset)
    Clear,
}

/// A change notification emitted by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Model name the event belongs to
    pub model: String,
    pub kind: ChangeKind,
    /// Affected record id; None for whole-model events like clear
    #[serde(default)]
    pub id: Option<String>,
}

/// Receiving end of one `observe` call
///
/// The stream is unbounded and lives until the subscriber unsubscribes or
/// drops the handle; the store prunes dead subscribers on its next publish.
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<ChangeEvent>,
}

impl Subscription {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<ChangeEvent>) -> Self {
        Self { receiver }
    }

    /// Wait for the next change event; None once unsubscribed
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        self.receiver.recv().await
    }

    /// Take an already-delivered event without waiting
    pub fn try_recv(&mut self) -> Option<ChangeEvent> {
        self.receiver.try_recv().ok()
    }

    /// Stop listening. Safe to call even if no event ever arrived.
    pub fn unsubscribe(mut self) {
        self.receiver.close();
    }
}
