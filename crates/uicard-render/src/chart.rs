//! Chart adapter: fits a caller-supplied Plotly figure to the card's house
//! style and hands the result to a [`ChartEngine`].
//!
//! House style owns the background, margins, font and five axis keys;
//! everything else the caller put in the layout or the traces survives.

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;
use uicard_types::{is_truthy, Figure, CHART_HEADER_ALLOWANCE, DEFAULT_CHART_HEIGHT};

pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
pub const GRID_COLOR: &str = "#EEF1F5";
pub const AXIS_LINE_COLOR: &str = "#E7EBF0";
pub const TICK_COLOR: &str = "#6B7280";
pub const TICK_SIZE: u32 = 11;
pub const FONT_FAMILY: &str = "Inter, system-ui, -apple-system, Segoe UI, Roboto";
pub const FONT_COLOR: &str = "#0F172A";
pub const LINE_COLOR: &str = "#1B59F8";
pub const LINE_WIDTH: u32 = 2;
pub const FILL_COLOR: &str = "rgba(27,89,248,0.08)";
pub const DEFAULT_FILL: &str = "tozeroy";

/// Options passed alongside data and layout on every draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub display_mode_bar: bool,
    pub responsive: bool,
}

/// Everything needed to draw one chart, already themed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPlan {
    pub canvas_height: f64,
    pub data: Vec<Value>,
    pub layout: Value,
    pub config: ChartConfig,
}

impl ChartPlan {
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// The charting library's in-place update call.
///
/// Implementations must update an existing chart on `target` rather than
/// recreate it, so redrawing with the same plan leaves it unchanged.
pub trait ChartEngine {
    type Target: ?Sized;
    type Error: std::fmt::Display;

    fn react(
        &self,
        target: &Self::Target,
        data: &[Value],
        layout: &Value,
        config: &ChartConfig,
    ) -> Result<(), Self::Error>;
}

/// Height of the chart canvas below the card header, never negative.
pub fn canvas_height(height: Option<f64>) -> f64 {
    (height.unwrap_or(DEFAULT_CHART_HEIGHT) - CHART_HEADER_ALLOWANCE).max(0.0)
}

fn axis_style(caller: Option<&Value>) -> Value {
    let mut axis = caller.and_then(Value::as_object).cloned().unwrap_or_default();
    axis.insert("gridcolor".into(), json!(GRID_COLOR));
    axis.insert("zeroline".into(), json!(false));
    axis.insert("linecolor".into(), json!(AXIS_LINE_COLOR));
    axis.insert(
        "tickfont".into(),
        json!({ "color": TICK_COLOR, "size": TICK_SIZE }),
    );
    Value::Object(axis)
}

/// Merge the caller's layout with the house style. Caller keys are copied
/// first and house keys are written over them.
pub fn merge_layout(caller: Option<&Value>) -> Value {
    let callerLayout = caller.and_then(Value::as_object);
    let mut layout: Map<String, Value> = callerLayout.cloned().unwrap_or_default();

    layout.insert("paper_bgcolor".into(), json!(TRANSPARENT));
    layout.insert("plot_bgcolor".into(), json!(TRANSPARENT));
    layout.insert("margin".into(), json!({ "l": 8, "r": 8, "t": 6, "b": 24 }));
    layout.insert(
        "xaxis".into(),
        axis_style(callerLayout.and_then(|l| l.get("xaxis"))),
    );
    layout.insert(
        "yaxis".into(),
        axis_style(callerLayout.and_then(|l| l.get("yaxis"))),
    );
    layout.insert(
        "font".into(),
        json!({ "family": FONT_FAMILY, "color": FONT_COLOR }),
    );

    Value::Object(layout)
}

/// Give an undecorated scatter trace the themed line and area fill.
/// Other traces, and scatter traces with a line colour, are returned as-is.
pub fn default_trace(trace: &Value) -> Value {
    let Some(fields) = trace.as_object() else {
        return trace.clone();
    };

    let isScatter = fields.get("type").and_then(Value::as_str) == Some("scatter");
    let hasLineColor = fields
        .get("line")
        .and_then(|line| line.get("color"))
        .is_some_and(is_truthy);
    if !isScatter || hasLineColor {
        return trace.clone();
    }

    let mut themed = fields.clone();
    let mut line = fields
        .get("line")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    line.insert("color".into(), json!(LINE_COLOR));
    line.insert("width".into(), json!(LINE_WIDTH));
    themed.insert("line".into(), Value::Object(line));

    let fill = fields
        .get("fill")
        .filter(|f| !f.is_null())
        .cloned()
        .unwrap_or_else(|| json!(DEFAULT_FILL));
    themed.insert("fill".into(), fill);
    themed.insert("fillcolor".into(), json!(FILL_COLOR));

    Value::Object(themed)
}

pub fn default_traces(data: &[Value]) -> Vec<Value> {
    data.iter().map(default_trace).collect()
}

pub fn plan(fig: &Figure, height: Option<f64>, modebar: Option<bool>) -> ChartPlan {
    ChartPlan {
        canvas_height: canvas_height(height),
        data: default_traces(fig.data.as_deref().unwrap_or_default()),
        layout: merge_layout(fig.layout.as_ref()),
        config: ChartConfig {
            display_mode_bar: modebar.unwrap_or(false),
            responsive: true,
        },
    }
}

/// Draw `plan` on `target`. Returns `Ok(false)` without touching the engine
/// when there are no traces.
pub fn draw<E: ChartEngine>(
    engine: &E,
    target: &E::Target,
    plan: &ChartPlan,
) -> Result<bool, E::Error> {
    if !plan.has_data() {
        debug!("chart has no traces, skipping draw");
        return Ok(false);
    }
    engine.react(target, &plan.data, &plan.layout, &plan.config)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingEngine {
        calls: RefCell<Vec<(Vec<Value>, Value, ChartConfig)>>,
    }

    impl ChartEngine for RecordingEngine {
        type Target = str;
        type Error = String;

        fn react(
            &self,
            _target: &str,
            data: &[Value],
            layout: &Value,
            config: &ChartConfig,
        ) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push((data.to_vec(), layout.clone(), *config));
            Ok(())
        }
    }

    struct FailingEngine;

    impl ChartEngine for FailingEngine {
        type Target = str;
        type Error = String;

        fn react(&self, _: &str, _: &[Value], _: &Value, _: &ChartConfig) -> Result<(), String> {
            Err("Plotly is not loaded".into())
        }
    }

    #[test]
    fn test_house_axis_keys_beat_caller() {
        let caller = json!({ "xaxis": { "gridcolor": "red", "title": { "text": "Trimestre" } } });
        let layout = merge_layout(Some(&caller));

        assert_eq!(layout["xaxis"]["gridcolor"], GRID_COLOR);
        assert_eq!(layout["xaxis"]["zeroline"], false);
        assert_eq!(layout["xaxis"]["linecolor"], AXIS_LINE_COLOR);
        assert_eq!(layout["xaxis"]["tickfont"], json!({ "color": TICK_COLOR, "size": 11 }));
        assert_eq!(layout["xaxis"]["title"]["text"], "Trimestre");
    }

    #[test]
    fn test_yaxis_is_styled_even_when_caller_omits_it() {
        let layout = merge_layout(None);
        assert_eq!(layout["yaxis"]["gridcolor"], GRID_COLOR);
        assert_eq!(layout["xaxis"]["gridcolor"], GRID_COLOR);
    }

    #[test]
    fn test_structural_layout_keys_are_forced() {
        let caller = json!({
            "paper_bgcolor": "white",
            "margin": { "l": 80 },
            "font": { "size": 20 },
            "title": { "text": "Tasa de paro" },
            "showlegend": false,
        });
        let layout = merge_layout(Some(&caller));

        assert_eq!(layout["paper_bgcolor"], TRANSPARENT);
        assert_eq!(layout["plot_bgcolor"], TRANSPARENT);
        assert_eq!(layout["margin"], json!({ "l": 8, "r": 8, "t": 6, "b": 24 }));
        assert_eq!(layout["font"], json!({ "family": FONT_FAMILY, "color": FONT_COLOR }));
        assert_eq!(layout["title"]["text"], "Tasa de paro");
        assert_eq!(layout["showlegend"], false);
    }

    #[test]
    fn test_non_object_layout_is_treated_as_empty() {
        let layout = merge_layout(Some(&Value::Null));
        assert_eq!(layout["paper_bgcolor"], TRANSPARENT);
        assert!(layout.get("title").is_none());
    }

    #[test]
    fn test_bare_scatter_gets_theme() {
        let trace = json!({ "type": "scatter", "x": [1, 2], "y": [3, 4] });
        let themed = default_trace(&trace);

        assert_eq!(themed["line"], json!({ "color": LINE_COLOR, "width": 2 }));
        assert_eq!(themed["fill"], "tozeroy");
        assert_eq!(themed["fillcolor"], FILL_COLOR);
        assert_eq!(themed["y"], json!([3, 4]));
    }

    #[test]
    fn test_scatter_with_line_color_is_untouched() {
        let trace = json!({ "type": "scatter", "line": { "color": "#F97316" }, "y": [1] });
        assert_eq!(default_trace(&trace), trace);
    }

    #[test]
    fn test_scatter_keeps_own_fill_and_line_fields() {
        let trace = json!({ "type": "scatter", "fill": "tonexty", "line": { "dash": "dot", "color": "" } });
        let themed = default_trace(&trace);

        assert_eq!(themed["fill"], "tonexty");
        assert_eq!(themed["line"]["dash"], "dot");
        assert_eq!(themed["line"]["color"], LINE_COLOR);
    }

    #[test]
    fn test_other_trace_types_pass_through() {
        let bar = json!({ "type": "bar", "y": [1, 2] });
        let untyped = json!({ "y": [1, 2] });
        assert_eq!(default_traces(&[bar.clone(), untyped.clone()]), vec![bar, untyped]);
    }

    #[test]
    fn test_canvas_height_deducts_header() {
        assert_eq!(canvas_height(Some(400.0)), 336.0);
        assert_eq!(canvas_height(None), 296.0);
        assert_eq!(canvas_height(Some(40.0)), 0.0);
    }

    #[test]
    fn test_plan_config() {
        let fig = Figure::new(vec![json!({ "type": "bar" })], json!({}));
        assert_eq!(
            plan(&fig, None, None).config,
            ChartConfig { display_mode_bar: false, responsive: true }
        );
        assert!(plan(&fig, None, Some(true)).config.display_mode_bar);
    }

    #[test]
    fn test_draw_skips_empty_data() {
        let engine = RecordingEngine::default();
        let empty = plan(&Figure::new(vec![], json!({})), Some(400.0), None);
        let missing = plan(&Figure::default(), Some(400.0), None);

        assert_eq!(draw(&engine, "plot", &empty), Ok(false));
        assert_eq!(draw(&engine, "plot", &missing), Ok(false));
        assert_eq!(engine.calls.borrow().len(), 0);
    }

    #[test]
    fn test_draw_passes_themed_plan_to_engine() {
        let engine = RecordingEngine::default();
        let fig = Figure::new(vec![json!({ "type": "scatter", "y": [1] })], json!({}));
        let chartPlan = plan(&fig, Some(400.0), Some(true));

        assert_eq!(draw(&engine, "plot", &chartPlan), Ok(true));
        assert_eq!(draw(&engine, "plot", &chartPlan), Ok(true));

        let calls = engine.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[0].0[0]["line"]["color"], LINE_COLOR);
        assert_eq!(calls[0].1["paper_bgcolor"], TRANSPARENT);
        assert!(calls[0].2.display_mode_bar);
    }

    #[test]
    fn test_draw_surfaces_engine_errors() {
        let fig = Figure::new(vec![json!({ "type": "bar" })], json!({}));
        let result = draw(&FailingEngine, "plot", &plan(&fig, None, None));
        assert_eq!(result, Err("Plotly is not loaded".to_string()));
    }
}
