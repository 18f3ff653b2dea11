//! Route tables and the assembled application router.

mod common;
mod customer;
mod supplier;

pub use common::common_routes;
pub use customer::customer_routes;
pub use supplier::supplier_routes;

use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest request body accepted on any route.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application: operational routes plus both resources, each with its own CORS policy.
pub fn app(state: AppState, customer_origin: HeaderValue) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(customer_routes(state.clone(), customer_origin))
        .merge(supplier_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
