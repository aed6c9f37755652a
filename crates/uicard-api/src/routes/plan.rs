//! Resolve a render request the same way the frame would, so hosts can
//! inspect the themed figure and reported height without a browser.

use axum::{routing::post, Json, Router};
use serde::Serialize;
use tracing::debug;
use uicard_render::{compose, CardPlan, ThemeDefaults};
use uicard_types::RenderRequest;

#[derive(Serialize)]
struct PlanResponse {
    frame_height: u32,
    plan: CardPlan,
}

pub fn routes() -> Router {
    Router::new().route("/api/v1/plan", post(post_plan))
}

async fn post_plan(Json(request): Json<RenderRequest>) -> Json<PlanResponse> {
    let plan = compose(&request, &ThemeDefaults::default());
    debug!("planned {} card", request.kind.as_str());
    Json(PlanResponse {
        frame_height: plan.frame_height(),
        plan,
    })
}
