//! Core domain types for the chessbot status hub.
//!
//! This crate provides the types shared between the hub and anything that
//! integrates with it:
//! - `BotStatus` / `StatusPatch`: the live bot state record and partial updates
//! - `LogEntry` / `LogKind`: timestamped log events pushed to dashboards
//! - `ClientMessage` / `ServerEvent`: the JSON wire protocol

pub mod error;
pub mod log;
pub mod protocol;
pub mod status;

pub use error::{ProtocolError, ProtocolResult};
pub use log::{LogEntry, LogKind};
pub use protocol::{BotCommand, ClientMessage, CommandData, ServerEvent};
pub use status::{BotStatus, StatusPatch};
