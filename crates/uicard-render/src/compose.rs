use serde::Serialize;
use tracing::debug;
use uicard_types::{CardKind, RenderRequest};

use crate::chart::{self, ChartPlan};
use crate::theme::{self, EffectiveTheme, ThemeDefaults};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderPlan {
    pub icon: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
}

/// Card body content. Exactly one variant per request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BodyPlan {
    Metric { value: String },
    /// Trusted host markup, inserted without sanitising.
    Html { markup: String },
    Chart(ChartPlan),
    Empty,
}

/// Fully resolved card, ready to be drawn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardPlan {
    pub height: f64,
    pub header: HeaderPlan,
    pub body: BodyPlan,
    pub theme: EffectiveTheme,
}

impl CardPlan {
    /// Card height as whole pixels, as reported to the host.
    pub fn frame_height(&self) -> u32 {
        self.height.max(0.0).round() as u32
    }
}

fn non_empty(text: &Option<String>) -> Option<String> {
    text.as_ref().filter(|t| !t.is_empty()).cloned()
}

pub fn compose(request: &RenderRequest, defaults: &ThemeDefaults) -> CardPlan {
    let header = HeaderPlan {
        icon: non_empty(&request.icon),
        title: request.title.clone().unwrap_or_default(),
        subtitle: non_empty(&request.subtitle),
    };

    let body = match &request.kind {
        CardKind::Metric => BodyPlan::Metric {
            value: request.value.clone().unwrap_or_default(),
        },
        CardKind::Html => BodyPlan::Html {
            markup: request.html.clone().unwrap_or_default(),
        },
        CardKind::Plotly => match &request.fig {
            Some(fig) => BodyPlan::Chart(chart::plan(fig, request.height, request.modebar)),
            None => {
                debug!("plotly card without a figure, leaving body empty");
                BodyPlan::Empty
            }
        },
        CardKind::Unknown(raw) => {
            debug!("unrecognized card type '{raw}', leaving body empty");
            BodyPlan::Empty
        }
    };

    let tokens = request.tokens.clone().unwrap_or_default();

    CardPlan {
        height: request.card_height(),
        header,
        body,
        theme: theme::apply(defaults, &tokens),
    }
}
