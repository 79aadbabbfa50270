//! Connection registry.
//!
//! Tracks the set of open dashboard connections. Each connection is the
//! sending side of a bounded channel of pre-serialized frames; a writer
//! task per connection drains the channel into the socket.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Identifier for one dashboard connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is enough to correlate log lines
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Sending side of one connection.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    id: ConnectionId,
    tx: mpsc::Sender<String>,
}

impl ConnectionHandle {
    pub fn new(id: ConnectionId, tx: mpsc::Sender<String>) -> Self {
        Self { id, tx }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Queue one frame without blocking.
    ///
    /// `Err` means the peer is gone (channel closed) or cannot keep up
    /// (channel full); either way the connection should be dropped.
    pub fn send(&self, frame: String) -> Result<(), mpsc::error::TrySendError<String>> {
        self.tx.try_send(frame)
    }
}

/// Owns the connection set. The only component allowed to hold
/// connections past a broadcast call.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: Mutex<HashMap<ConnectionId, ConnectionHandle>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a connection and queue its seed frame in the same critical
    /// section, so the seed always precedes any broadcast frame.
    pub fn register(&self, handle: ConnectionHandle, seed: String) {
        let mut connections = self.connections.lock();
        let _ = handle.send(seed);
        connections.insert(handle.id(), handle);
    }

    /// Remove a connection. Removing an unknown id is a no-op.
    ///
    /// Returns whether the connection was present.
    pub fn unregister(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(&id).is_some()
    }

    /// Stable copy of the current set.
    ///
    /// Iteration happens on the copy, outside the lock, so concurrent
    /// registrations and removals are invisible to an in-flight broadcast.
    pub fn snapshot(&self) -> Vec<ConnectionHandle> {
        self.connections.lock().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.connections.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.lock().is_empty()
    }
}
