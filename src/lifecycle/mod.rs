//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Spawn signal listener → optional heartbeat → server task
//!
//! Shutdown (startup.rs + shutdown.rs):
//!     Exit notification → stop heartbeat → drain connections → delay → exit
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM/SIGQUIT → exit notification
//!     SIGHUP → logged, keep running
//! ```
//!
//! # Design Decisions
//! - Exactly one exit notification per process lifetime
//! - Drain is bounded: remaining connections are closed at the deadline
//! - A listener that fails to bind is logged, not fatal

pub mod heartbeat;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use heartbeat::Heartbeat;
pub use shutdown::Shutdown;
pub use startup::run;
