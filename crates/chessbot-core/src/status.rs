//! Bot status record and partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Live status of the bot.
///
/// Exactly one instance exists per process, owned by the hub's status
/// store. Dashboards receive copies of it inside `bot_status` events.
/// Field names serialize in camelCase to match the dashboard protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotStatus {
    /// Whether the bot is currently playing.
    pub is_running: bool,
    /// Whether moves are played automatically.
    pub auto_play: bool,
    /// Whether voice recognition is active.
    pub voice_enabled: bool,
    /// Last move in coordinate or SAN notation (e.g. "e2e4").
    pub current_move: String,
    /// Position after the last move, as a FEN string.
    pub current_fen: String,
    /// Engine evaluation of the last move, in centipawns.
    pub current_score: i32,
    /// Games completed since process start.
    pub games_played: u32,
    /// Win rate over completed games, 0-100.
    pub win_rate: f64,
    /// Stamped on every mutation.
    pub last_activity: DateTime<Utc>,
}

impl BotStatus {
    /// A stopped bot with empty move state, stamped now.
    pub fn new() -> Self {
        Self {
            is_running: false,
            auto_play: false,
            voice_enabled: false,
            current_move: String::new(),
            current_fen: String::new(),
            current_score: 0,
            games_played: 0,
            win_rate: 0.0,
            last_activity: Utc::now(),
        }
    }

    /// Overwrite exactly the fields the patch carries.
    ///
    /// `last_activity` is not part of the patch; the status store stamps it
    /// on every merge.
    pub fn apply(&mut self, patch: StatusPatch) {
        if let Some(v) = patch.is_running {
            self.is_running = v;
        }
        if let Some(v) = patch.auto_play {
            self.auto_play = v;
        }
        if let Some(v) = patch.voice_enabled {
            self.voice_enabled = v;
        }
        if let Some(v) = patch.current_move {
            self.current_move = v;
        }
        if let Some(v) = patch.current_fen {
            self.current_fen = v;
        }
        if let Some(v) = patch.current_score {
            self.current_score = v;
        }
        if let Some(v) = patch.games_played {
            self.games_played = v;
        }
        if let Some(v) = patch.win_rate {
            self.win_rate = v;
        }
    }
}

impl Default for BotStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update to `BotStatus`. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusPatch {
    pub is_running: Option<bool>,
    pub auto_play: Option<bool>,
    pub voice_enabled: Option<bool>,
    pub current_move: Option<String>,
    pub current_fen: Option<String>,
    pub current_score: Option<i32>,
    pub games_played: Option<u32>,
    pub win_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites_only_some_fields() {
        let mut status = BotStatus::new();
        status.games_played = 7;

        status.apply(StatusPatch {
            is_running: Some(true),
            current_move: Some("e2e4".to_string()),
            ..StatusPatch::default()
        });

        assert!(status.is_running);
        assert_eq!(status.current_move, "e2e4");
        // Untouched fields keep their values
        assert_eq!(status.games_played, 7);
        assert!(!status.auto_play);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut status = BotStatus::new();
        status.current_score = -42;
        let before = status.clone();

        status.apply(StatusPatch::default());

        assert_eq!(status, before);
    }

    #[test]
    fn test_camel_case_serialization() {
        let status = BotStatus::new();
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"isRunning\":false"));
        assert!(json.contains("\"currentMove\":\"\""));
        assert!(json.contains("\"gamesPlayed\":0"));
        assert!(json.contains("\"lastActivity\""));
    }
}
