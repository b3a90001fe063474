//! Diagnostic web server for introspecting a running container.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                   EXPLORER                     │
//!                    │                                                │
//!     Request ───────┼─▶ access log ─▶ router ─▶ /_/echo             │
//!                    │                          /_/env               │
//!                    │                          /_/healthcheck       │
//!                    │                          /* (root filesystem) │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐  │
//!                    │  │               lifecycle                  │  │
//!                    │  │  signals ─▶ exit ─▶ drain (≤5s) ─▶ delay │  │
//!                    │  │  heartbeat: 1s liveness log until stop   │  │
//!                    │  └──────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
