//! Log entries pushed to dashboard clients.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Warning,
    Error,
    Success,
}

/// One log event. Immutable once created; the hub broadcasts it and keeps
/// no history (retention is a client concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Collision-resistant id: millisecond timestamp plus a random suffix.
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: LogKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LogEntry {
    /// Build an entry stamped with the current time.
    pub fn new(kind: LogKind, message: impl Into<String>, details: Option<String>) -> Self {
        let now = Utc::now();
        let suffix: u32 = rand::thread_rng().gen();
        Self {
            id: format!("log_{}_{:08x}", now.timestamp_millis(), suffix),
            timestamp: now,
            kind,
            message: message.into(),
            details,
        }
    }
}
