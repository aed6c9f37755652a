use leptos::prelude::*;
use uicard_render::CardPlan;

use crate::components::card::Card;

/// Root of the frame. Holds the latest plan; every new plan replaces the
/// whole card.
#[component]
pub fn CardFrame() -> impl IntoView {
    #[allow(unused_variables)]
    let (plan, setPlan) = signal(Option::<CardPlan>::None);

    #[cfg(feature = "hydrate")]
    {
        use crate::browser::{bridge::PostMessageBridge, surface::FrameSurface};
        use uicard_render::Session;

        // The host can only answer the ready message after this task yields,
        // by which point the listener below is installed.
        let session = Session::start(PostMessageBridge);

        let handle = window_event_listener(leptos::ev::message, move |event| {
            let message = match serde_wasm_bindgen::from_value::<serde_json::Value>(event.data()) {
                Ok(message) => message,
                Err(e) => {
                    tracing::debug!("ignoring unreadable message event: {e}");
                    return;
                }
            };
            let mut surface = FrameSurface::new(setPlan);
            session.handle(&message, &mut surface);
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div id="root">
            {move || plan.get().map(|plan| view! { <Card plan /> })}
        </div>
    }
}
