//! Error types for chessbot-core.

use thiserror::Error;

/// Failures decoding inbound frames at the client boundary.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;
