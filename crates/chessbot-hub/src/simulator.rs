//! Simulated bot activity.
//!
//! Two interval tasks run for the lifetime of the process: a move ticker
//! that advances the status while the bot is running, and an ambient
//! ticker that emits background chatter regardless. Both exist purely so
//! dashboards have something to show before a real bot driver is wired in.

use std::time::Duration;

use chessbot_core::LogKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::SimulatorConfig;
use crate::hub::Hub;

/// Candidate moves for the simulated game.
const MOVES: [&str; 6] = ["e2e4", "Nf3", "d2d4", "Bb5", "O-O", "Qd5"];

/// Chance per move tick of emitting an engine log.
const ENGINE_LOG_PROBABILITY: f64 = 0.3;
/// Chance per move tick of finishing a game.
const GAME_FINISH_PROBABILITY: f64 = 0.1;
/// Chance per ambient tick of emitting a system log.
const AMBIENT_LOG_PROBABILITY: f64 = 0.2;

const ENGINE_LOG_KINDS: [LogKind; 3] = [LogKind::Info, LogKind::Success, LogKind::Warning];
const AMBIENT_LOG_KINDS: [LogKind; 3] = [LogKind::Info, LogKind::Warning, LogKind::Error];

const AMBIENT_MESSAGES: [&str; 5] = [
    "Chess.com connection verified",
    "System memory checked",
    "Settings saved",
    "Checking for updates",
    "Performance optimization complete",
];

/// Spawn both simulator tasks. They run until the process exits.
pub fn spawn_simulator(hub: Hub, config: SimulatorConfig) {
    if !config.enabled {
        info!("Activity simulator disabled");
        return;
    }
    info!(
        move_interval_ms = config.move_interval_ms,
        ambient_interval_ms = config.ambient_interval_ms,
        "Starting activity simulator"
    );
    tokio::spawn(run_move_ticker(hub.clone(), config.move_interval_ms));
    tokio::spawn(run_ambient_ticker(hub, config.ambient_interval_ms));
}

async fn run_move_ticker(hub: Hub, interval_ms: u64) {
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
    let mut rng = StdRng::from_entropy();
    loop {
        interval.tick().await;
        move_tick(&hub, &mut rng);
    }
}

async fn run_ambient_ticker(hub: Hub, interval_ms: u64) {
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
    let mut rng = StdRng::from_entropy();
    loop {
        interval.tick().await;
        ambient_tick(&hub, &mut rng);
    }
}

/// One move-ticker tick. Does nothing while the bot is stopped.
pub(crate) fn move_tick(hub: &Hub, rng: &mut impl Rng) {
    if !hub.store().is_running() {
        return;
    }

    let mv = MOVES[rng.gen_range(0..MOVES.len())];
    let score = rng.gen_range(-200..200);
    let fen = format!(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 {}",
        rng.gen_range(0..50)
    );
    let finished_game = rng.gen_bool(GAME_FINISH_PROBABILITY);
    let win_rate = rng.gen_range(0.0..100.0);

    hub.store().update(|s| {
        s.current_move = mv.to_string();
        s.current_score = score;
        s.current_fen = fen;
        if finished_game {
            s.games_played += 1;
            s.win_rate = win_rate;
        }
    });

    if rng.gen_bool(ENGINE_LOG_PROBABILITY) {
        let kind = ENGINE_LOG_KINDS[rng.gen_range(0..ENGINE_LOG_KINDS.len())];
        hub.send_log(kind, engine_message(rng, mv), None);
    }

    hub.broadcast_status();
}

/// One ambient-ticker tick. Runs whether or not the bot is playing.
pub(crate) fn ambient_tick(hub: &Hub, rng: &mut impl Rng) {
    if !rng.gen_bool(AMBIENT_LOG_PROBABILITY) {
        return;
    }
    let kind = AMBIENT_LOG_KINDS[rng.gen_range(0..AMBIENT_LOG_KINDS.len())];
    let message = AMBIENT_MESSAGES[rng.gen_range(0..AMBIENT_MESSAGES.len())];
    hub.send_log(kind, message, None);
}

fn engine_message(rng: &mut impl Rng, mv: &str) -> String {
    match rng.gen_range(0..5) {
        0 => "Analyzing position...".to_string(),
        1 => format!("Move {mv} calculated"),
        2 => "Position evaluated".to_string(),
        3 => "Searching opening book".to_string(),
        _ => "Calculating variations".to_string(),
    }
}
