pub mod health;
pub mod plan;

use axum::Router;

pub fn api_routes() -> Router {
    Router::new()
        .merge(health::routes())
        .merge(plan::routes())
}
