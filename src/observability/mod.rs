//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     stderr/stdout of the container runtime
//! ```

pub mod logging;
