//! Shutdown coordination.

use tokio::sync::broadcast;

/// Fan-out cancellation signal shared by every long-running task.
///
/// Triggering is idempotent; subscribers observe the signal at their next
/// suspension point. Nothing is owned by the subscribers, they only watch.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator with no subscribers.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Obtain a receiver that resolves once shutdown has been triggered.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Signal every subscriber that shutdown has begun.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
