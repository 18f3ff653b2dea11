//! Supplier handlers. Updates and deletes answer an empty 404 for any failure.

use crate::error::Failure;
use crate::extractors::JsonBody;
use crate::model::Supplier;
use crate::pagination::{Page, PageRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;

const INTERNAL: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Supplier>>, Failure> {
    state.suppliers.list().await.map(Json).map_err(|e| {
        tracing::error!(error = %e, "Error fetching suppliers");
        e.into_failure(INTERNAL, "Error fetching suppliers")
    })
}

/// GET /api/suppliers/paged?page=&size=&sort=property,asc with a zero-based page index.
pub async fn paged(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Page<Supplier>>, Failure> {
    let request = PageRequest::from_query(&params);
    let (page, size) = (request.page, request.size);
    state.suppliers.page(request).await.map(Json).map_err(|e| {
        tracing::error!(page, size, error = %e, "Error fetching supplier page");
        e.into_failure(INTERNAL, "Error fetching suppliers")
    })
}

/// Responds with a text confirmation rather than the created record. Failures are 400.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(supplier): JsonBody<Supplier>,
) -> Result<(StatusCode, String), Failure> {
    match state.suppliers.create(supplier).await {
        Ok(created) => Ok((
            StatusCode::OK,
            format!(
                "Supplier created successfully with ID: {}",
                created.id.unwrap_or_default()
            ),
        )),
        Err(e) => {
            tracing::error!(error = %e, "Error creating supplier");
            Err(e.into_failure(StatusCode::BAD_REQUEST, "Error creating supplier"))
        }
    }
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Supplier>, Failure> {
    match state.suppliers.get(id).await {
        Ok(Some(supplier)) => Ok(Json(supplier)),
        Ok(None) => Err(Failure::NotFound),
        Err(e) => {
            tracing::error!(id, error = %e, "Error fetching supplier");
            Err(e.into_failure(INTERNAL, "Error fetching supplier"))
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(details): JsonBody<Supplier>,
) -> Result<Json<Supplier>, Failure> {
    state.suppliers.update(id, details).await.map(Json).map_err(|e| {
        tracing::error!(id, error = %e, "Error updating supplier");
        Failure::NotFound
    })
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Failure> {
    match state.suppliers.delete(id).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::error!(id, error = %e, "Error deleting supplier");
            Err(Failure::NotFound)
        }
    }
}
