//! JSON wire protocol between dashboard clients and the hub.
//!
//! One JSON document per WebSocket text frame, `type` as the discriminator.
//! Inbound frames decode once at the boundary into closed enums; anything
//! outside the known set is a `ProtocolError` for the caller to log and drop.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolResult;
use crate::log::LogEntry;
use crate::status::BotStatus;

/// Command names accepted under `bot_command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotCommand {
    Start,
    Stop,
    ToggleAutoplay,
    ToggleVoice,
    UpdateSettings,
}

/// Optional payload carried by `update_settings`.
///
/// The hub only reports these values; persisting them belongs to the
/// settings service, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandData {
    pub skill_level: Option<u32>,
    pub search_depth: Option<u32>,
}

/// Frames sent by dashboard clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    BotCommand {
        command: BotCommand,
        #[serde(default)]
        data: CommandData,
    },
    GetStatus,
}

impl ClientMessage {
    /// Decode one inbound frame.
    pub fn decode(frame: &str) -> ProtocolResult<Self> {
        Ok(serde_json::from_str(frame)?)
    }
}

/// Frames pushed by the hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    BotStatus { status: BotStatus },
    Log { log: LogEntry },
}

impl ServerEvent {
    pub fn status(status: BotStatus) -> Self {
        Self::BotStatus { status }
    }

    pub fn log(log: LogEntry) -> Self {
        Self::Log { log }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogKind;

    #[test]
    fn test_decode_bot_command() {
        let msg = ClientMessage::decode(r#"{"type":"bot_command","command":"start"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::BotCommand {
                command: BotCommand::Start,
                data: CommandData::default(),
            }
        );
    }

    #[test]
    fn test_decode_update_settings_data() {
        let frame = r#"{"type":"bot_command","command":"update_settings","data":{"skillLevel":15,"searchDepth":12}}"#;
        let msg = ClientMessage::decode(frame).unwrap();
        match msg {
            ClientMessage::BotCommand { command, data } => {
                assert_eq!(command, BotCommand::UpdateSettings);
                assert_eq!(data.skill_level, Some(15));
                assert_eq!(data.search_depth, Some(12));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_decode_get_status() {
        let msg = ClientMessage::decode(r#"{"type":"get_status"}"#).unwrap();
        assert_eq!(msg, ClientMessage::GetStatus);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(ClientMessage::decode(r#"{"type":"subscribe","channel":"bbo"}"#).is_err());
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(ClientMessage::decode(r#"{"type":"bot_command","command":"self_destruct"}"#).is_err());
    }

    #[test]
    fn test_malformed_frame_is_rejected() {
        assert!(ClientMessage::decode("not json").is_err());
    }

    #[test]
    fn test_event_tagging() {
        let event = ServerEvent::status(BotStatus::new());
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"bot_status\""));
        assert!(json.contains("\"status\":{"));

        let event = ServerEvent::log(LogEntry::new(LogKind::Warning, "low memory", None));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"log\""));
        assert!(json.contains("\"kind\":\"warning\""));
    }
}
