//! Wire format of the host bridge.
//!
//! The host posts `{"type": "streamlit:render", "args": {...}}` into the
//! frame; the frame answers with `isStreamlitMessage` envelopes posted to
//! its parent window.

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::request::RenderRequest;

pub const RENDER_EVENT: &str = "streamlit:render";
pub const COMPONENT_READY: &str = "streamlit:componentReady";
pub const SET_FRAME_HEIGHT: &str = "streamlit:setFrameHeight";
pub const API_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("host message has no string `type` field")]
    MalformedMessage,
    #[error("render args could not be decoded: {0}")]
    MalformedArgs(#[from] serde_json::Error),
}

/// A message received from the host.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Render(RenderRequest),
    /// Any other message type; the frame does not act on these.
    Other(String),
}

impl HostEvent {
    pub fn decode(message: &Value) -> Result<Self, BridgeError> {
        let messageType = message
            .get("type")
            .and_then(Value::as_str)
            .ok_or(BridgeError::MalformedMessage)?;

        if messageType != RENDER_EVENT {
            return Ok(HostEvent::Other(messageType.to_string()));
        }

        let args = message
            .get("args")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        let request = serde_json::from_value(args)?;
        Ok(HostEvent::Render(request))
    }
}

/// A message the frame sends to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameMessage {
    ComponentReady,
    SetFrameHeight(u32),
}

impl FrameMessage {
    pub fn to_json(&self) -> Value {
        match self {
            FrameMessage::ComponentReady => json!({
                "isStreamlitMessage": true,
                "apiVersion": API_VERSION,
                "type": COMPONENT_READY,
            }),
            FrameMessage::SetFrameHeight(height) => json!({
                "isStreamlitMessage": true,
                "type": SET_FRAME_HEIGHT,
                "height": height,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CardKind;

    #[test]
    fn test_decode_render_event() {
        let message = json!({
            "type": "streamlit:render",
            "args": { "type": "metric", "title": "Paro", "value": "11.2%" },
            "dfs": [],
            "disabled": false,
        });

        match HostEvent::decode(&message).unwrap() {
            HostEvent::Render(request) => {
                assert_eq!(request.kind, CardKind::Metric);
                assert_eq!(request.value.as_deref(), Some("11.2%"));
            }
            other => panic!("expected render event, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_render_without_args_is_empty_request() {
        let event = HostEvent::decode(&json!({ "type": "streamlit:render" })).unwrap();
        assert_eq!(event, HostEvent::Render(RenderRequest::default()));
    }

    #[test]
    fn test_decode_other_message_type() {
        let event = HostEvent::decode(&json!({ "type": "streamlit:theme" })).unwrap();
        assert_eq!(event, HostEvent::Other("streamlit:theme".into()));
    }

    #[test]
    fn test_decode_rejects_untyped_messages() {
        assert!(matches!(
            HostEvent::decode(&json!("webpackHotUpdate")),
            Err(BridgeError::MalformedMessage)
        ));
        assert!(matches!(
            HostEvent::decode(&json!({ "args": {} })),
            Err(BridgeError::MalformedMessage)
        ));
    }

    #[test]
    fn test_decode_rejects_non_object_args() {
        let message = json!({ "type": "streamlit:render", "args": "metric" });
        assert!(matches!(
            HostEvent::decode(&message),
            Err(BridgeError::MalformedArgs(_))
        ));
    }

    #[test]
    fn test_decode_keeps_render_with_wrong_typed_fields() {
        let message = json!({
            "type": "streamlit:render",
            "args": { "type": "metric", "value": "1", "modebar": 1, "height": "tall" },
        });

        match HostEvent::decode(&message).unwrap() {
            HostEvent::Render(request) => {
                assert_eq!(request.kind, CardKind::Metric);
                assert_eq!(request.modebar, Some(true));
                assert_eq!(request.height, None);
            }
            other => panic!("expected render event, got {other:?}"),
        }
    }

    #[test]
    fn test_frame_messages_wire_shape() {
        assert_eq!(
            FrameMessage::ComponentReady.to_json(),
            json!({ "isStreamlitMessage": true, "apiVersion": 1, "type": "streamlit:componentReady" })
        );
        assert_eq!(
            FrameMessage::SetFrameHeight(336).to_json(),
            json!({ "isStreamlitMessage": true, "type": "streamlit:setFrameHeight", "height": 336 })
        );
    }
}
