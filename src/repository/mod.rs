//! Storage interface for records and its PostgreSQL and in-memory implementations.

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use crate::error::AppError;
use crate::model::Record;
use crate::pagination::{Page, PageRequest};
use async_trait::async_trait;

#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// All records, ordered by id.
    async fn find_all(&self) -> Result<Vec<R>, AppError>;

    async fn find_page(&self, request: PageRequest) -> Result<Page<R>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, AppError>;

    /// Insert when the record has no id, otherwise overwrite the stored row.
    /// Returns the stored record with its id set.
    async fn save(&self, record: R) -> Result<R, AppError>;

    async fn delete(&self, record: &R) -> Result<(), AppError>;

    /// Cheap liveness check of the backing store.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
