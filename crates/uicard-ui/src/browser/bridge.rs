use leptos::prelude::window;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use tracing::warn;
use uicard_render::HostBridge;
use uicard_types::FrameMessage;

/// Posts frame messages to the embedding window.
#[derive(Clone, Copy, Debug, Default)]
pub struct PostMessageBridge;

impl HostBridge for PostMessageBridge {
    fn post(&self, message: FrameMessage) {
        if let Err(e) = post_to_parent(&message.to_json()) {
            warn!("failed to post {message:?} to host: {e}");
        }
    }
}

fn post_to_parent(message: &serde_json::Value) -> Result<(), String> {
    let parent = window()
        .parent()
        .map_err(|e| format!("cannot reach parent window: {e:?}"))?
        .ok_or("frame has no parent window")?;
    let payload = message
        .serialize(&Serializer::json_compatible())
        .map_err(|e| format!("failed to convert message: {e}"))?;
    parent
        .post_message(&payload, "*")
        .map_err(|e| format!("postMessage failed: {e:?}"))
}
