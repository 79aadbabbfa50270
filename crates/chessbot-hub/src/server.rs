//! HTTP server implementation using axum.
//!
//! One route matters: `GET /ws` upgrades to the dashboard WebSocket. Each
//! accepted socket gets a registry entry plus a writer task; the reader
//! side decodes frames and hands them to the hub.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use futures_util::stream::StreamExt;
use futures_util::SinkExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use chessbot_core::ClientMessage;

use crate::config::HubConfig;
use crate::error::HubResult;
use crate::hub::Hub;
use crate::registry::{ConnectionHandle, ConnectionId};

/// Connection limiter to prevent too many concurrent WebSocket connections.
pub struct ConnectionLimiter {
    current: AtomicUsize,
    max: usize,
}

impl ConnectionLimiter {
    pub fn new(max: usize) -> Self {
        Self {
            current: AtomicUsize::new(0),
            max,
        }
    }

    pub fn try_acquire(&self) -> Option<ConnectionGuard<'_>> {
        loop {
            let current = self.current.load(Ordering::Acquire);
            if current >= self.max {
                return None;
            }
            if self
                .current
                .compare_exchange(current, current + 1, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return Some(ConnectionGuard { limiter: self });
            }
        }
    }

    pub fn current_count(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }
}

pub struct ConnectionGuard<'a> {
    limiter: &'a ConnectionLimiter,
}

impl Drop for ConnectionGuard<'_> {
    fn drop(&mut self) {
        self.limiter.current.fetch_sub(1, Ordering::Release);
    }
}

/// Shared application state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    hub: Hub,
    limiter: Arc<ConnectionLimiter>,
    config: HubConfig,
}

impl AppState {
    pub fn new(hub: Hub, config: HubConfig) -> Self {
        Self {
            hub,
            limiter: Arc::new(ConnectionLimiter::new(config.max_connections)),
            config,
        }
    }
}

/// Create the axum router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ws", get(ws_handler))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// WebSocket upgrade handler.
async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    // Refuse the upgrade outright when full; the real slot is taken once
    // the socket exists.
    match state.limiter.try_acquire() {
        Some(guard) => drop(guard),
        None => {
            warn!(
                current = state.limiter.current_count(),
                max = state.config.max_connections,
                "WebSocket connection limit reached"
            );
            return (StatusCode::SERVICE_UNAVAILABLE, "Too many connections").into_response();
        }
    }

    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle one dashboard connection for its whole lifetime.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let _guard = match state.limiter.try_acquire() {
        Some(guard) => guard,
        None => {
            warn!("Connection limit reached during upgrade");
            return;
        }
    };

    let conn_id = ConnectionId::new();
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (tx, mut rx) = mpsc::channel::<String>(state.config.send_buffer);
    let handle = ConnectionHandle::new(conn_id, tx);

    // Registering queues the current status snapshot as the first frame.
    state.hub.register(handle.clone());
    info!(
        conn_id = %conn_id,
        connections = state.hub.registry().len(),
        "Dashboard client connected"
    );

    // Writer: drain queued frames into the socket.
    let mut writer = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if ws_tx.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    // Reader: decode inbound frames and dispatch them.
    loop {
        tokio::select! {
            msg = ws_rx.next() => match msg {
                Some(Ok(Message::Text(text))) => match ClientMessage::decode(&text) {
                    Ok(msg) => state.hub.dispatch(&handle, msg),
                    // Unknown or malformed frames are dropped; the
                    // connection stays open and no error frame goes back.
                    Err(e) => warn!(conn_id = %conn_id, error = %e, "Ignoring unrecognized frame"),
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {} // ping/pong handled by axum
                Some(Err(e)) => {
                    debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                    break;
                }
            },
            _ = &mut writer => break,
        }
    }

    state.hub.unregister(conn_id);
    info!(
        conn_id = %conn_id,
        connections = state.hub.registry().len(),
        "Dashboard client disconnected"
    );
}

/// Run the hub server until the process exits.
pub async fn run_server(hub: Hub, config: HubConfig) -> HubResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(port = config.port, "Starting hub server");

    let state = AppState::new(hub, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limiter_enforces_max() {
        let limiter = ConnectionLimiter::new(2);
        let a = limiter.try_acquire();
        let b = limiter.try_acquire();
        assert!(a.is_some());
        assert!(b.is_some());
        assert!(limiter.try_acquire().is_none());
        assert_eq!(limiter.current_count(), 2);
    }

    #[test]
    fn test_limiter_releases_on_drop() {
        let limiter = ConnectionLimiter::new(1);
        let guard = limiter.try_acquire().unwrap();
        drop(guard);
        assert_eq!(limiter.current_count(), 0);
        assert!(limiter.try_acquire().is_some());
    }
}
