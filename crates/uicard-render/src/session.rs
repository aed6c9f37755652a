//! Host session: the frame's side of the host bridge.
//!
//! A session announces the component once when it starts, then turns each
//! render event into a fresh [`CardPlan`] and reports the card height back.
//! Renders are stateless, so events are handled one at a time in delivery
//! order with no queueing.

use serde_json::Value;
use tracing::{debug, info, warn};
use uicard_types::{BridgeError, FrameMessage, HostEvent, RenderRequest};

use crate::compose::{compose, CardPlan};
use crate::theme::{EffectiveTheme, ThemeDefaults};

/// Outbound half of the host bridge.
pub trait HostBridge {
    fn post(&self, message: FrameMessage);
}

/// Where composed cards end up.
pub trait RenderSurface {
    /// Write the theme variables. They persist until the next write.
    fn apply_theme(&mut self, theme: &EffectiveTheme);
    /// Replace everything currently shown with `plan`.
    fn mount(&mut self, plan: CardPlan);
}

pub struct Session<B> {
    bridge: B,
    defaults: ThemeDefaults,
}

impl<B: HostBridge> Session<B> {
    pub fn start(bridge: B) -> Self {
        Self::with_defaults(bridge, ThemeDefaults::default())
    }

    pub fn with_defaults(bridge: B, defaults: ThemeDefaults) -> Self {
        bridge.post(FrameMessage::ComponentReady);
        info!("component ready");
        Self { bridge, defaults }
    }

    /// Handle one raw host message. Returns the reported frame height when
    /// the message was a render event.
    pub fn handle<S: RenderSurface>(&self, message: &Value, surface: &mut S) -> Option<u32> {
        let request = match HostEvent::decode(message) {
            Ok(HostEvent::Render(request)) => request,
            Ok(HostEvent::Other(messageType)) => {
                debug!("ignoring host message '{messageType}'");
                return None;
            }
            Err(BridgeError::MalformedMessage) => {
                debug!("ignoring message that is not from the host bridge");
                return None;
            }
            Err(e) => {
                warn!("dropping render event: {e}");
                return None;
            }
        };

        Some(self.render(&request, surface))
    }

    pub fn render<S: RenderSurface>(&self, request: &RenderRequest, surface: &mut S) -> u32 {
        let plan = compose(request, &self.defaults);
        let frameHeight = plan.frame_height();
        debug!(
            "rendering {} card, frame height {frameHeight}px",
            request.kind.as_str()
        );

        surface.apply_theme(&plan.theme);
        surface.mount(plan);
        self.bridge.post(FrameMessage::SetFrameHeight(frameHeight));
        frameHeight
    }
}
