use leptos::prelude::*;
use uicard_render::chart::ChartPlan;

/// Chart canvas filling the card body width below the header.
///
/// The draw happens in an effect, so it only runs in the browser once the
/// canvas exists. Plans without traces leave the canvas blank.
#[component]
pub fn PlotlyChart(plan: ChartPlan) -> impl IntoView {
    let canvasRef = NodeRef::<leptos::html::Div>::new();
    let style = format!("width: 100%; height: {}px", plan.canvas_height);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::browser::plotly::PlotlyEngine;

        if let Some(canvas) = canvasRef.get() {
            let target: &web_sys::Element = &canvas;
            if let Err(e) = uicard_render::chart::draw(&PlotlyEngine, target, &plan) {
                tracing::warn!("chart draw failed: {e}");
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = plan;

    view! { <div class="plot" style=style node_ref=canvasRef></div> }
}
