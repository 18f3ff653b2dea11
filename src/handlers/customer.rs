//! Customer handlers. Reads and creates answer 500 with the underlying message
//! on failure; updates and deletes answer an empty 404 for any failure.

use crate::error::Failure;
use crate::extractors::JsonBody;
use crate::model::Customer;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

const INTERNAL: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, Failure> {
    tracing::info!("Fetching all customers");
    match state.customers.list().await {
        Ok(customers) => Ok(Json(customers)),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching customers");
            Err(e.into_failure(INTERNAL, "Error fetching customers"))
        }
    }
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, Failure> {
    tracing::info!(id, "Fetching customer");
    match state.customers.get(id).await {
        Ok(Some(customer)) => Ok(Json(customer)),
        Ok(None) => Err(Failure::NotFound),
        Err(e) => {
            tracing::error!(id, error = %e, "Error fetching customer");
            Err(e.into_failure(INTERNAL, "Error fetching customer"))
        }
    }
}

/// Responds 200 (not 201) with the stored customer.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(customer): JsonBody<Customer>,
) -> Result<Json<Customer>, Failure> {
    tracing::info!(name = ?customer.name, "Creating new customer");
    match state.customers.create(customer).await {
        Ok(created) => Ok(Json(created)),
        Err(e) => {
            tracing::error!(error = %e, "Error creating customer");
            Err(e.into_failure(INTERNAL, "Error creating customer"))
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(details): JsonBody<Customer>,
) -> Result<Json<Customer>, Failure> {
    tracing::info!(id, "Updating customer");
    match state.customers.update(id, details).await {
        Ok(updated) => Ok(Json(updated)),
        Err(e) => {
            tracing::error!(id, error = %e, "Error updating customer");
            Err(Failure::NotFound)
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Failure> {
    tracing::info!(id, "Deleting customer");
    match state.customers.delete(id).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::error!(id, error = %e, "Error deleting customer");
            Err(Failure::NotFound)
        }
    }
}
