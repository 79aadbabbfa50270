//! Inbound command handling.
//!
//! Frames arrive already decoded into `ClientMessage`; unknown commands and
//! malformed frames never get this far (the socket reader logs and drops
//! them). Every `bot_command` ends with a status multicast; `get_status`
//! answers the requester alone.

use chessbot_core::{BotCommand, ClientMessage, CommandData, LogKind, ServerEvent};

use crate::hub::Hub;
use crate::registry::ConnectionHandle;

impl Hub {
    /// Handle one decoded client message.
    pub fn dispatch(&self, conn: &ConnectionHandle, msg: ClientMessage) {
        match msg {
            ClientMessage::BotCommand { command, data } => self.handle_command(command, data),
            ClientMessage::GetStatus => {
                let event = ServerEvent::status(self.store().snapshot());
                self.broadcaster().unicast(conn, &event);
            }
        }
    }

    fn handle_command(&self, command: BotCommand, data: CommandData) {
        match command {
            BotCommand::Start => {
                self.store().update(|s| s.is_running = true);
                self.send_log(LogKind::Success, "Bot started", None);
            }
            BotCommand::Stop => {
                self.store().update(|s| s.is_running = false);
                self.send_log(LogKind::Info, "Bot stopped", None);
            }
            BotCommand::ToggleAutoplay => {
                let status = self.store().update(|s| s.auto_play = !s.auto_play);
                let state = if status.auto_play { "enabled" } else { "disabled" };
                self.send_log(LogKind::Info, format!("Auto-play {state}"), None);
            }
            BotCommand::ToggleVoice => {
                let status = self.store().update(|s| s.voice_enabled = !s.voice_enabled);
                let state = if status.voice_enabled { "enabled" } else { "disabled" };
                self.send_log(LogKind::Info, format!("Voice recognition {state}"), None);
            }
            BotCommand::UpdateSettings => {
                // Values are persisted by the settings service; here they
                // are only reported.
                if let Some(level) = data.skill_level {
                    self.send_log(LogKind::Info, format!("Skill level updated: {level}"), None);
                }
                if let Some(depth) = data.search_depth {
                    self.send_log(LogKind::Info, format!("Search depth updated: {depth}"), None);
                }
                // Still counts as activity
                self.store().update(|_| {});
            }
        }
        self.broadcast_status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ConnectionId;
    use serde_json::Value;
    use tokio::sync::mpsc;

    fn connect(hub: &Hub) -> (ConnectionHandle, mpsc::Receiver<String>) {
        let (tx, mut rx) = mpsc::channel(64);
        let handle = ConnectionHandle::new(ConnectionId::new(), tx);
        hub.register(handle.clone());
        rx.try_recv().unwrap(); // drop the seed frame
        (handle, rx)
    }

    fn command(c: BotCommand) -> ClientMessage {
        ClientMessage::BotCommand {
            command: c,
            data: CommandData::default(),
        }
    }

    fn drain(rx: &mut mpsc::Receiver<String>) -> Vec<Value> {
        let mut frames = Vec::new();
        while let Ok(frame) = rx.try_recv() {
            frames.push(serde_json::from_str(&frame).unwrap());
        }
        frames
    }

    #[test]
    fn test_start_broadcasts_success_log_and_running_status() {
        let hub = Hub::new();
        let (conn, mut rx) = connect(&hub);

        hub.dispatch(&conn, command(BotCommand::Start));

        let frames = drain(&mut rx);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["type"], "log");
        assert_eq!(frames[0]["log"]["kind"], "success");
        assert_eq!(frames[0]["log"]["message"], "Bot started");
        assert_eq!(frames[1]["type"], "bot_status");
        assert_eq!(frames[1]["status"]["isRunning"], true);
    }

    #[test]
    fn test_start_then_stop_only_touches_running_and_activity() {
        let hub = Hub::new();
        let (conn, _rx) = connect(&hub);
        let before = hub.store().snapshot();

        hub.dispatch(&conn, command(BotCommand::Start));
        hub.dispatch(&conn, command(BotCommand::Stop));

        let after = hub.store().snapshot();
        assert!(!after.is_running);
        let mut expected = before.clone();
        expected.last_activity = after.last_activity;
        assert_eq!(after, expected);
    }

    #[test]
    fn test_toggle_autoplay_twice_is_involution() {
        let hub = Hub::new();
        let (conn, _rx) = connect(&hub);
        let original = hub.store().snapshot().auto_play;

        hub.dispatch(&conn, command(BotCommand::ToggleAutoplay));
        assert_eq!(hub.store().snapshot().auto_play, !original);

        hub.dispatch(&conn, command(BotCommand::ToggleAutoplay));
        assert_eq!(hub.store().snapshot().auto_play, original);
    }

    #[test]
    fn test_toggle_voice_logs_new_state() {
        let hub = Hub::new();
        let (conn, mut rx) = connect(&hub);

        hub.dispatch(&conn, command(BotCommand::ToggleVoice));

        let frames = drain(&mut rx);
        assert_eq!(frames[0]["log"]["message"], "Voice recognition enabled");
        assert_eq!(frames[1]["status"]["voiceEnabled"], true);
    }

    #[test]
    fn test_get_status_unicasts_to_requester_only() {
        let hub = Hub::new();
        let (a, mut rx_a) = connect(&hub);
        let (_b, mut rx_b) = connect(&hub);

        hub.dispatch(&a, ClientMessage::GetStatus);

        let frames_a = drain(&mut rx_a);
        assert_eq!(frames_a.len(), 1);
        assert_eq!(frames_a[0]["type"], "bot_status");
        // The other client sees nothing
        assert!(drain(&mut rx_b).is_empty());
    }

    #[test]
    fn test_get_status_does_not_stamp_activity() {
        let hub = Hub::new();
        let (conn, _rx) = connect(&hub);
        let before = hub.store().snapshot();

        hub.dispatch(&conn, ClientMessage::GetStatus);

        assert_eq!(hub.store().snapshot(), before);
    }

    #[test]
    fn test_update_settings_logs_each_field_without_state_change() {
        let hub = Hub::new();
        let (conn, mut rx) = connect(&hub);
        let before = hub.store().snapshot();

        hub.dispatch(
            &conn,
            ClientMessage::BotCommand {
                command: BotCommand::UpdateSettings,
                data: CommandData {
                    skill_level: Some(15),
                    search_depth: Some(12),
                },
            },
        );

        let frames = drain(&mut rx);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0]["log"]["message"], "Skill level updated: 15");
        assert_eq!(frames[1]["log"]["message"], "Search depth updated: 12");
        assert_eq!(frames[2]["type"], "bot_status");

        let after = hub.store().snapshot();
        let mut expected = before.clone();
        expected.last_activity = after.last_activity;
        assert_eq!(after, expected);
    }

    #[test]
    fn test_command_broadcast_reaches_every_client() {
        let hub = Hub::new();
        let (a, mut rx_a) = connect(&hub);
        let (_b, mut rx_b) = connect(&hub);
        let (_c, mut rx_c) = connect(&hub);

        hub.dispatch(&a, command(BotCommand::Start));

        for rx in [&mut rx_a, &mut rx_b, &mut rx_c] {
            let frames = drain(rx);
            assert_eq!(frames.len(), 2);
            assert_eq!(frames[0]["log"]["kind"], "success");
            assert_eq!(frames[1]["status"]["isRunning"], true);
        }
    }
}
