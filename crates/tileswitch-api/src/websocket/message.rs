//! WebSocket message types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tileswitch_engine::EngineStatus;

/// Messages pushed by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// Current engine status.
    StreamStatus { data: EngineStatus, timestamp: String },

    /// The status probe could not reach the page.
    DiscordError { error: String, timestamp: String },
}

impl WsMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Command sent by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct WsCommand {
    pub command: String,
    #[serde(default)]
    pub params: Value,
}

impl WsCommand {
    /// A parameter as a string, accepting numbers too.
    pub fn param_str(&self, name: &str) -> Option<String> {
        match self.params.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stream_status_shape() {
        let msg = WsMessage::StreamStatus {
            data: EngineStatus {
                streams: vec![],
                current_index: 0,
                total_streams: 0,
                pairs: vec![],
            },
            timestamp: "2024-01-01T00:00:00.000Z".into(),
        };
        let value: Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(value["type"], "stream_status");
        assert_eq!(value["data"]["totalStreams"], 0);
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_discord_error_shape() {
        let msg = WsMessage::DiscordError {
            error: "Connection refused".into(),
            timestamp: "t".into(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({"type": "discord_error", "error": "Connection refused", "timestamp": "t"}));
    }

    #[test]
    fn test_command_without_params() {
        let cmd: WsCommand = serde_json::from_str(r#"{"command": "next"}"#).unwrap();
        assert_eq!(cmd.command, "next");
        assert!(cmd.params.is_null());
        assert!(cmd.param_str("index").is_none());
    }

    #[test]
    fn test_command_param_str() {
        let cmd: WsCommand =
            serde_json::from_str(r#"{"command": "switch_by_index", "params": {"index": 2, "streamId": "abc"}}"#)
                .unwrap();
        assert_eq!(cmd.param_str("index").as_deref(), Some("2"));
        assert_eq!(cmd.param_str("streamId").as_deref(), Some("abc"));
    }
}
