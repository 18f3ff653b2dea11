//! /api/suppliers routes. Any origin may call these.

use crate::handlers::supplier::{create, delete, list, paged, read, update};
use crate::state::AppState;
use axum::http::Method;
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

pub fn supplier_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(1800));
    Router::new()
        .route("/api/suppliers", get(list).post(create))
        .route("/api/suppliers/paged", get(paged))
        .route("/api/suppliers/:id", get(read).put(update).delete(delete))
        .layer(cors)
        .with_state(state)
}
