//! Status hub server for the chessbot dashboard.
//!
//! Wires configuration, logging, the hub, the activity simulator, and the
//! WebSocket server into one process.

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
