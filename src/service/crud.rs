//! Generic CRUD: delegation to the repository plus the fetch-then-mutate
//! not-found check on update and delete.

use crate::error::AppError;
use crate::model::Record;
use crate::pagination::{Page, PageRequest};
use crate::repository::Repository;
use std::sync::Arc;

pub struct CrudService<R: Record> {
    repository: Arc<dyn Repository<R>>,
}

impl<R: Record> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        CrudService {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Record> CrudService<R> {
    pub fn new(repository: Arc<dyn Repository<R>>) -> Self {
        CrudService { repository }
    }

    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        self.repository.find_all().await
    }

    pub async fn page(&self, request: PageRequest) -> Result<Page<R>, AppError> {
        self.repository.find_page(request.normalize()).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<R>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Persist a new record. Any id in the input is discarded; the repository assigns one.
    pub async fn create(&self, mut record: R) -> Result<R, AppError> {
        record.set_id(None);
        self.repository.save(record).await
    }

    /// Overwrite every mutable field of the stored record with `details`.
    pub async fn update(&self, id: i64, details: R) -> Result<R, AppError> {
        let mut existing = self.require(id).await?;
        existing.overwrite_from(details);
        self.repository.save(existing).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let existing = self.require(id).await?;
        self.repository.delete(&existing).await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn require(&self, id: i64) -> Result<R, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found with id: {}", R::NAME, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, Supplier};
    use crate::repository::MemoryRepository;
    use async_trait::async_trait;

    fn service() -> CrudService<Customer> {
        CrudService::new(Arc::new(MemoryRepository::<Customer>::new()))
    }

    fn acme() -> Customer {
        Customer {
            id: None,
            name: Some("Acme".into()),
            email: Some("a@x.com".into()),
            phone: Some("555".into()),
            address: Some("1 Rd".into()),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_record() {
        let svc = service();
        let created = svc.create(acme()).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(svc.get(1).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let svc = service();
        let mut input = acme();
        input.id = Some(500);
        let created = svc.create(input).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let svc = service();
        svc.create(acme()).await.unwrap();
        let updated = svc
            .update(
                1,
                Customer {
                    name: Some("Acme2".into()),
                    email: Some("b@x.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.name.as_deref(), Some("Acme2"));
        assert_eq!(updated.phone, None);
        assert_eq!(svc.get(1).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_and_delete_missing_id_are_not_found() {
        let svc = service();
        let err = svc.update(9, acme()).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Customer not found with id: 9");
        assert!(svc.delete(9).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_then_get_is_empty() {
        let svc = service();
        svc.create(acme()).await.unwrap();
        svc.delete(1).await.unwrap();
        assert_eq!(svc.get(1).await.unwrap(), None);
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn page_normalizes_zero_size() {
        let svc: CrudService<Supplier> =
            CrudService::new(Arc::new(MemoryRepository::<Supplier>::new()));
        for _ in 0..12 {
            svc.create(Supplier::default()).await.unwrap();
        }
        let page = svc.page(PageRequest::new(0, 0)).await.unwrap();
        assert_eq!(page.size, 10);
        assert_eq!(page.content.len(), 10);
        assert_eq!(page.total_pages, 2);
    }

    struct BrokenRepository;

    #[async_trait]
    impl Repository<Customer> for BrokenRepository {
        async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
            Err(AppError::Storage("offline".into()))
        }
        async fn find_page(&self, _: PageRequest) -> Result<Page<Customer>, AppError> {
            Err(AppError::Storage("offline".into()))
        }
        async fn find_by_id(&self, _: i64) -> Result<Option<Customer>, AppError> {
            Err(AppError::Storage("offline".into()))
        }
        async fn save(&self, _: Customer) -> Result<Customer, AppError> {
            Err(AppError::Storage("offline".into()))
        }
        async fn delete(&self, _: &Customer) -> Result<(), AppError> {
            Err(AppError::Storage("offline".into()))
        }
    }

    #[tokio::test]
    async fn storage_failures_on_update_are_not_not_found() {
        let svc = CrudService::<Customer>::new(Arc::new(BrokenRepository));
        let err = svc.update(1, acme()).await.unwrap_err();
        assert!(!err.is_not_found());
    }
}
