//! Periodic liveness emission.
//!
//! # Responsibilities
//! - Emit a liveness log line on a fixed cadence
//! - Stop cleanly, and emit nothing further, once shutdown is triggered

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

/// Emits a liveness marker once per interval until cancelled. Independent
/// of request traffic.
pub struct Heartbeat {
    interval: Duration,
}

impl Heartbeat {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Run the emitter loop. Returns once the shutdown channel fires,
    /// within one tick interval of the trigger.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = time::interval(self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::info!("heartbeat");
                }
                _ = shutdown.recv() => {
                    tracing::debug!("heartbeat stopped");
                    return;
                }
            }
        }
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
