use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Card height when the request carries none.
pub const DEFAULT_CARD_HEIGHT: f64 = 300.0;
/// Height the chart canvas is derived from when the request carries none.
pub const DEFAULT_CHART_HEIGHT: f64 = 360.0;
/// Vertical space reserved for the card header above a chart canvas.
pub const CHART_HEADER_ALLOWANCE: f64 = 64.0;
/// Height used by [`RenderRequest::metric`].
pub const METRIC_CARD_HEIGHT: f64 = 120.0;

/// Which body renderer a request selects.
///
/// Anything other than the three known discriminants lands in `Unknown`,
/// which renders an empty body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Value>", into = "String")]
pub enum CardKind {
    Metric,
    Plotly,
    Html,
    Unknown(String),
}

impl CardKind {
    pub fn as_str(&self) -> &str {
        match self {
            CardKind::Metric => "metric",
            CardKind::Plotly => "plotly",
            CardKind::Html => "html",
            CardKind::Unknown(raw) => raw,
        }
    }
}

impl Default for CardKind {
    fn default() -> Self {
        CardKind::Unknown(String::new())
    }
}

impl From<Option<Value>> for CardKind {
    fn from(raw: Option<Value>) -> Self {
        let raw = raw.as_ref().and_then(value_text);
        match raw.as_deref() {
            Some("metric") => CardKind::Metric,
            Some("plotly") => CardKind::Plotly,
            Some("html") => CardKind::Html,
            _ => CardKind::Unknown(raw.unwrap_or_default()),
        }
    }
}

impl From<CardKind> for String {
    fn from(kind: CardKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Render a loosely typed host value as text.
/// `null` counts as absent; strings are taken verbatim, everything else
/// uses its JSON text.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Loose truthiness, matching how the host's own frontend reads flags:
/// `null`, `false`, `0`, `NaN` and `""` are false, everything else true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a pixel size from a number or a numeric string.
pub fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

// The deserializers below never fail: a value of the wrong shape reads as
// absent so one stray field cannot drop a whole render.

fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_text))
}

fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_number))
}

fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map(is_truthy))
}

fn opt_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok()))
}

fn opt_traces<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(traces)) => Some(traces),
        _ => None,
    })
}

/// Sparse design-token overrides sent with a request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub color_surface: Option<String>,
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub color_border: Option<String>,
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub color_primary: Option<String>,
}

/// Chart specification: an ordered list of traces plus a layout object.
/// Only the fields the chart adapter inspects are typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    #[serde(default, deserialize_with = "opt_traces", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
}

impl Figure {
    pub fn new(data: Vec<Value>, layout: Value) -> Self {
        Self {
            data: Some(data),
            layout: Some(layout),
        }
    }
}

/// Property bag the host sends with every render event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    #[serde(rename = "type", default)]
    pub kind: CardKind,
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "opt_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "opt_object", skip_serializing_if = "Option::is_none")]
    pub fig: Option<Figure>,
    #[serde(default, deserialize_with = "opt_flag", skip_serializing_if = "Option::is_none")]
    pub modebar: Option<bool>,
    #[serde(default, deserialize_with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, deserialize_with = "opt_object", skip_serializing_if = "Option::is_none")]
    pub tokens: Option<ThemeTokens>,
}

impl RenderRequest {
    /// KPI card showing `value` as prominent text.
    pub fn metric(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: CardKind::Metric,
            title: Some(title.into()),
            value: Some(value.into()),
            height: Some(METRIC_CARD_HEIGHT),
            ..Default::default()
        }
    }

    /// Chart card; the modebar starts hidden.
    pub fn plotly(title: impl Into<String>, fig: Figure) -> Self {
        Self {
            kind: CardKind::Plotly,
            title: Some(title.into()),
            fig: Some(fig),
            height: Some(DEFAULT_CHART_HEIGHT),
            modebar: Some(false),
            ..Default::default()
        }
    }

    /// Card whose body is trusted host markup, typically a table.
    pub fn table(title: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            kind: CardKind::Html,
            title: Some(title.into()),
            html: Some(html.into()),
            height: Some(DEFAULT_CARD_HEIGHT),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn modebar(mut self, modebar: bool) -> Self {
        self.modebar = Some(modebar);
        self
    }

    pub fn tokens(mut self, tokens: ThemeTokens) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Height of the outer card in pixels.
    pub fn card_height(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_CARD_HEIGHT)
    }
}
