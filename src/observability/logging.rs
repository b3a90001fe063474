//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Default filter keeps the server's own logs at info
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - `RUST_LOG` overrides the default filter (e.g. `tower_http=debug` for
//!   per-request traces)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber. Call once, before any task
/// starts logging.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "explorer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
