//! Error types for chessbot-hub.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hub operations.
pub type HubResult<T> = Result<T, HubError>;
