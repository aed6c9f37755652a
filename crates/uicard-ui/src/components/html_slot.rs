use leptos::prelude::*;

/// Inserts host markup as-is. The host is trusted; nothing is sanitised.
#[component]
pub fn HtmlSlot(markup: String) -> impl IntoView {
    view! { <div inner_html=markup></div> }
}
