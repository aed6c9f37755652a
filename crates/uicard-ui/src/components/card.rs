use leptos::prelude::*;
use uicard_render::{BodyPlan, CardPlan, HeaderPlan};

use crate::components::html_slot::HtmlSlot;
use crate::components::metric_value::MetricValue;
use crate::components::plotly_chart::PlotlyChart;

/// Card chrome: header with optional icon pill and subtitle, then the body
/// selected by the plan.
#[component]
pub fn Card(plan: CardPlan) -> impl IntoView {
    let CardPlan {
        height,
        header,
        body,
        ..
    } = plan;
    let HeaderPlan {
        icon,
        title,
        subtitle,
    } = header;

    let content = match body {
        BodyPlan::Metric { value } => Some(view! { <MetricValue value /> }.into_any()),
        BodyPlan::Html { markup } => Some(view! { <HtmlSlot markup /> }.into_any()),
        BodyPlan::Chart(chartPlan) => Some(view! { <PlotlyChart plan=chartPlan /> }.into_any()),
        BodyPlan::Empty => None,
    };

    view! {
        <div class="card" style=format!("height: {height}px")>
            <div class="header">
                {icon.map(|icon| view! { <div class="pill">{icon}</div> })}
                <div>
                    <div class="title">{title}</div>
                    {subtitle.map(|subtitle| view! { <div class="subtitle">{subtitle}</div> })}
                </div>
            </div>
            <div class="body">{content}</div>
        </div>
    }
}
