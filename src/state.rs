//! Shared application state for all routes: one service per resource.

use crate::model::{Customer, Supplier};
use crate::repository::{MemoryRepository, PgRepository};
use crate::service::{CustomerService, SupplierService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub suppliers: SupplierService,
}

impl AppState {
    pub fn new(customers: CustomerService, suppliers: SupplierService) -> Self {
        AppState {
            customers,
            suppliers,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            CustomerService::new(Arc::new(PgRepository::<Customer>::new(pool.clone()))),
            SupplierService::new(Arc::new(PgRepository::<Supplier>::new(pool))),
        )
    }

    /// State backed by empty in-memory repositories. Data is lost on restart.
    pub fn in_memory() -> Self {
        Self::new(
            CustomerService::new(Arc::new(MemoryRepository::<Customer>::new())),
            SupplierService::new(Arc::new(MemoryRepository::<Supplier>::new())),
        )
    }
}
