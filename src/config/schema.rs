//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Runtime configuration for the diagnostic server.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port the listener binds, on all interfaces.
    pub port: u16,

    /// Emit a liveness log line every second while running.
    pub heartbeat: bool,

    /// Seconds to wait after shutdown completes before the process exits.
    pub shutdown_delay_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5002,
            heartbeat: false,
            shutdown_delay_secs: 5,
        }
    }
}
