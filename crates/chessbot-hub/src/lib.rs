//! chessbot-hub - Real-time status broadcast hub.
//!
//! The hub owns the single live `BotStatus` record and the set of open
//! dashboard connections, accepts commands that mutate the status, and
//! pushes `bot_status` and `log` events to every connected viewer. An
//! activity simulator advances the status on timers while the bot runs.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      chessbot-server process                 │
//! │                                                              │
//! │   GET /ws ─► per-connection reader ──┐    ┌──────────────┐   │
//! │                                      ▼    │  simulator   │   │
//! │                              ┌──────────┐ │ (2 tickers)  │   │
//! │                              │   Hub    │◄┴──────────────┘   │
//! │                              │ ┌──────┐ │◄── bot driver      │
//! │                              │ │store │ │  (execute_move,    │
//! │                              │ └──────┘ │   update_status,   │
//! │                              │ ┌──────┐ │   send_log)        │
//! │                              │ │ reg. │ │                    │
//! │                              │ └──────┘ │                    │
//! │                              └────┬─────┘                    │
//! │                        broadcaster│ (serialize once)         │
//! │              ┌────────────────────┼───────────────────┐      │
//! │              ▼                    ▼                   ▼      │
//! │        writer task          writer task          writer task │
//! │         (client A)           (client B)           (client C) │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sends are fire-and-forget: each connection is a bounded channel of
//! pre-serialized frames drained by its writer task, and a client that
//! cannot keep up is dropped rather than allowed to stall the others.

mod broadcast;
mod config;
mod dispatch;
mod error;
mod hub;
mod registry;
mod server;
mod simulator;
mod status;

pub use broadcast::Broadcaster;
pub use config::{HubConfig, SimulatorConfig};
pub use error::{HubError, HubResult};
pub use hub::Hub;
pub use registry::{ConnectionHandle, ConnectionId, ConnectionRegistry};
pub use server::{create_router, run_server, AppState};
pub use simulator::spawn_simulator;
pub use status::StatusStore;
