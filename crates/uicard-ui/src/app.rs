use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::card_frame::CardFrame;

/// Plotly bundle loaded into the frame; the chart engine calls its global.
pub const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <script src=PLOTLY_SRC></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/uicard.css" />
        <Title text="ui_card" />
        <Router>
            <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                <Route path=StaticSegment("") view=CardFrame />
            </Routes>
        </Router>
    }
}
