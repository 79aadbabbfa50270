//! Hub aggregate: the single authority over status and connections.

use std::sync::Arc;

use chessbot_core::{BotStatus, LogEntry, LogKind, ServerEvent, StatusPatch};
use tracing::debug;

use crate::broadcast::{encode, Broadcaster};
use crate::registry::{ConnectionHandle, ConnectionId, ConnectionRegistry};
use crate::status::StatusStore;

/// Cheap-to-clone handle to the hub's shared state.
///
/// The status record and the connection set each live behind their own
/// lock; every clone reaches the same instances.
#[derive(Debug, Clone)]
pub struct Hub {
    store: Arc<StatusStore>,
    registry: Arc<ConnectionRegistry>,
    broadcaster: Broadcaster,
}

impl Hub {
    pub fn new() -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        Self {
            store: Arc::new(StatusStore::new()),
            broadcaster: Broadcaster::new(registry.clone()),
            registry,
        }
    }

    pub fn store(&self) -> &StatusStore {
        &self.store
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub(crate) fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// Attach a new connection.
    ///
    /// The connection immediately receives the current status snapshot,
    /// queued ahead of any broadcast frame.
    pub fn register(&self, handle: ConnectionHandle) {
        let event = ServerEvent::status(self.store.snapshot());
        if let Some(frame) = encode(&event) {
            self.registry.register(handle, frame);
        }
    }

    /// Detach a connection. A no-op if it is already gone.
    pub fn unregister(&self, id: ConnectionId) {
        if self.registry.unregister(id) {
            debug!(conn_id = %id, "Connection unregistered");
        }
    }

    /// Multicast the current status snapshot.
    pub fn broadcast_status(&self) {
        self.broadcaster
            .multicast(&ServerEvent::status(self.store.snapshot()));
    }

    /// Apply an external status change and broadcast the result.
    pub fn update_status(&self, patch: StatusPatch) -> BotStatus {
        let status = self.store.merge(patch);
        self.broadcaster
            .multicast(&ServerEvent::status(status.clone()));
        status
    }

    /// Emit one log entry to every connection.
    pub fn send_log(&self, kind: LogKind, message: impl Into<String>, details: Option<String>) {
        let log = LogEntry::new(kind, message, details);
        self.broadcaster.multicast(&ServerEvent::log(log));
    }

    /// Report a real move executed by the bot driver.
    ///
    /// Broadcasts the refreshed status, then a success log naming the move.
    pub fn execute_move(&self, mv: &str, fen: &str, score: i32) {
        self.update_status(StatusPatch {
            current_move: Some(mv.to_string()),
            current_fen: Some(fen.to_string()),
            current_score: Some(score),
            ..StatusPatch::default()
        });
        self.send_log(
            LogKind::Success,
            format!("Move executed: {mv}"),
            Some(format!("Score: {score}")),
        );
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}
