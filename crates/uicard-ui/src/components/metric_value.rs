use leptos::prelude::*;

/// Prominent metric text. The value is shown exactly as sent.
#[component]
pub fn MetricValue(value: String) -> impl IntoView {
    view! { <div class="value">{value}</div> }
}
