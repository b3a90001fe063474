//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, graceful shutdown)
//!     → middleware (access log before every dispatch)
//!     → handlers.rs (/_/echo, /_/env, /_/healthcheck)
//!     → files.rs (everything else, rooted at /)
//! ```

pub mod files;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::HttpServer;
