//! In-memory repository keyed by id. Used by tests and `STORAGE=memory`.

use super::Repository;
use crate::error::AppError;
use crate::model::Record;
use crate::pagination::{Page, PageRequest};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

pub struct MemoryRepository<R> {
    rows: RwLock<BTreeMap<i64, R>>,
    next_id: AtomicI64,
}

impl<R> MemoryRepository<R> {
    pub fn new() -> Self {
        MemoryRepository {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<R> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> Repository<R> for MemoryRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<R>, AppError> {
        let order = request.order_by::<R>()?;
        let rows = self.rows.read().await;
        let total = rows.len() as u64;
        let mut sorted: Vec<&R> = rows.values().collect();
        sorted.sort_by(|a, b| order.compare(*a, *b));
        let content = sorted
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .cloned()
            .collect();
        Ok(Page::new(content, &request, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, AppError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, mut record: R) -> Result<R, AppError> {
        let mut rows = self.rows.write().await;
        let id = match record.id() {
            Some(id) => {
                if !rows.contains_key(&id) {
                    return Err(AppError::Storage(format!(
                        "{} with id {} does not exist",
                        R::NAME,
                        id
                    )));
                }
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        record.set_id(Some(id));
        rows.insert(id, record.clone());
        Ok(record)
    }

    async fn delete(&self, record: &R) -> Result<(), AppError> {
        if let Some(id) = record.id() {
            self.rows.write().await.remove(&id);
        }
        Ok(())
    }
}
