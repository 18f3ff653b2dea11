//! /api/customers routes. Cross-origin calls are accepted from one configured origin only.

use crate::handlers::customer::{create, delete, list, read, update};
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

pub fn customer_routes(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(1800));
    Router::new()
        .route("/api/customers", get(list).post(create))
        .route("/api/customers/:id", get(read).put(update).delete(delete))
        .layer(cors)
        .with_state(state)
}
