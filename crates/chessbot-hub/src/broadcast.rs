//! Event fan-out to registered connections.
//!
//! Delivery is fire-and-forget and lossy: a connection that cannot accept
//! a frame is unregistered, never retried, and no other delivery is
//! affected.

use std::sync::Arc;

use chessbot_core::ServerEvent;
use tracing::debug;

use crate::registry::{ConnectionHandle, ConnectionRegistry};

/// Pushes serialized events to connections held by the registry.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    registry: Arc<ConnectionRegistry>,
}

impl Broadcaster {
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Send one event to one connection.
    pub fn unicast(&self, conn: &ConnectionHandle, event: &ServerEvent) {
        if let Some(frame) = encode(event) {
            self.send_frame(conn, frame);
        }
    }

    /// Send one event to every registered connection.
    ///
    /// The event is serialized once; each connection gets the same frame.
    pub fn multicast(&self, event: &ServerEvent) {
        let Some(frame) = encode(event) else {
            return;
        };
        for conn in self.registry.snapshot() {
            self.send_frame(&conn, frame.clone());
        }
    }

    fn send_frame(&self, conn: &ConnectionHandle, frame: String) {
        if conn.send(frame).is_err() {
            debug!(conn_id = %conn.id(), "Dropping unreachable connection");
            self.registry.unregister(conn.id());
        }
    }
}

/// Serialize an event to its wire frame.
pub(crate) fn encode(event: &ServerEvent) -> Option<String> {
    match serde_json::to_string(event) {
        Ok(json) => Some(json),
        Err(e) => {
            debug!(error = %e, "Failed to serialize event");
            None
        }
    }
}
