//! crm-api: customer and supplier CRUD REST backend.

pub mod case;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::{AppConfig, StorageBackend};
pub use error::{AppError, ConfigError, Failure};
pub use extractors::JsonBody;
pub use migration::{ensure_database_exists, ensure_schema};
pub use model::{Customer, Record, Supplier};
pub use pagination::{Direction, Page, PageRequest, Sort};
pub use repository::{MemoryRepository, PgRepository, Repository};
pub use routes::app;
pub use service::{CrudService, CustomerService, SupplierService};
pub use state::AppState;
