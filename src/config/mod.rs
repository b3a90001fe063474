//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags / environment variables
//!     → main.rs (clap parse)
//!     → ServerConfig (immutable)
//!     → passed by value into the lifecycle manager and server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the process starts; there is no reload path
//! - All fields have defaults so every flag is optional

pub mod schema;

pub use schema::ServerConfig;
