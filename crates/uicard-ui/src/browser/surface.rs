use leptos::prelude::*;
use tracing::warn;
use uicard_render::{CardPlan, EffectiveTheme, RenderSurface};

use crate::browser::theme::write_root_vars;

/// Renders into the frame: theme on the document root, plan into the
/// `CardFrame` signal.
pub struct FrameSurface {
    set_plan: WriteSignal<Option<CardPlan>>,
}

impl FrameSurface {
    pub fn new(set_plan: WriteSignal<Option<CardPlan>>) -> Self {
        Self { set_plan }
    }
}

impl RenderSurface for FrameSurface {
    fn apply_theme(&mut self, theme: &EffectiveTheme) {
        if let Err(e) = write_root_vars(theme) {
            warn!("theme not applied: {e}");
        }
    }

    fn mount(&mut self, plan: CardPlan) {
        self.set_plan.set(Some(plan));
    }
}
