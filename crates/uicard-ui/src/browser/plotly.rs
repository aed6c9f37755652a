use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use uicard_render::chart::{ChartConfig, ChartEngine};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = react, catch)]
    fn plotly_react(
        root: &web_sys::Element,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> Result<JsValue, JsValue>;
}

/// `Plotly.react` on the global Plotly bundle. It updates the chart on the
/// element in place, creating it on first use.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlotlyEngine;

fn to_js<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, String> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| format!("failed to convert chart {what}: {e}"))
}

impl ChartEngine for PlotlyEngine {
    type Target = web_sys::Element;
    type Error = String;

    fn react(
        &self,
        target: &web_sys::Element,
        data: &[Value],
        layout: &Value,
        config: &ChartConfig,
    ) -> Result<(), String> {
        let data = to_js(data, "data")?;
        let layout = to_js(layout, "layout")?;
        let config = to_js(config, "config")?;

        plotly_react(target, &data, &layout, &config)
            .map(|_| ())
            .map_err(|e| format!("Plotly.react failed: {e:?}"))
    }
}
