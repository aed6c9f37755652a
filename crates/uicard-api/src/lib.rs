#![allow(non_snake_case)]

pub mod routes;

use axum::Router;

pub fn api_router() -> Router {
    Router::new().merge(routes::api_routes())
}
