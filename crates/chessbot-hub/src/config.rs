//! Hub configuration.

use serde::{Deserialize, Serialize};

/// Hub server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum concurrent WebSocket connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    /// Queued frames per connection before the client counts as stalled.
    #[serde(default = "default_send_buffer")]
    pub send_buffer: usize,
}

fn default_port() -> u16 {
    5001
}

fn default_max_connections() -> usize {
    64
}

fn default_send_buffer() -> usize {
    32
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            max_connections: default_max_connections(),
            send_buffer: default_send_buffer(),
        }
    }
}

/// Activity simulator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Enable the simulator tasks.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Move ticker interval in milliseconds.
    #[serde(default = "default_move_interval_ms")]
    pub move_interval_ms: u64,
    /// Ambient log ticker interval in milliseconds.
    #[serde(default = "default_ambient_interval_ms")]
    pub ambient_interval_ms: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_move_interval_ms() -> u64 {
    2000
}

fn default_ambient_interval_ms() -> u64 {
    5000
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            move_interval_ms: default_move_interval_ms(),
            ambient_interval_ms: default_ambient_interval_ms(),
        }
    }
}
