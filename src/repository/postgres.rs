//! PostgreSQL repository built on the SQL builder.

use super::Repository;
use crate::error::AppError;
use crate::model::Record;
use crate::pagination::{Page, PageRequest};
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::marker::PhantomData;

pub struct PgRepository<R> {
    pool: PgPool,
    _record: PhantomData<fn() -> R>,
}

impl<R> PgRepository<R> {
    pub fn new(pool: PgPool) -> Self {
        PgRepository {
            pool,
            _record: PhantomData,
        }
    }
}

impl<R: Record> PgRepository<R> {
    async fn fetch_many(&self, q: QueryBuf) -> Result<Vec<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in q.params {
            query = p.bind(query);
        }
        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_record).collect()
    }

    async fn fetch_optional(&self, q: QueryBuf) -> Result<Option<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in q.params {
            query = p.bind(query);
        }
        let row = query.fetch_optional(&self.pool).await?;
        row.as_ref().map(row_to_record).transpose()
    }
}

fn row_to_record<R: Record>(row: &PgRow) -> Result<R, AppError> {
    let id: i64 = row.try_get("id")?;
    let mut values = Vec::with_capacity(R::COLUMNS.len());
    for col in R::COLUMNS {
        values.push(row.try_get::<Option<String>, _>(*col)?);
    }
    Ok(R::from_columns(id, values))
}

#[async_trait]
impl<R: Record> Repository<R> for PgRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        self.fetch_many(sql::select_all::<R>()).await
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<R>, AppError> {
        let order = request.order_by::<R>()?;
        let q = sql::count::<R>();
        tracing::debug!(sql = %q.sql, "query");
        let (total,): (i64,) = sqlx::query_as(&q.sql).fetch_one(&self.pool).await?;
        let page = sql::select_page::<R>(order, request.size as i64, request.offset() as i64);
        let content = self.fetch_many(page).await?;
        Ok(Page::new(content, &request, total.max(0) as u64))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, AppError> {
        self.fetch_optional(sql::select_by_id::<R>(id)).await
    }

    async fn save(&self, record: R) -> Result<R, AppError> {
        match record.id() {
            None => self
                .fetch_optional(sql::insert(&record))
                .await?
                .ok_or_else(|| {
                    AppError::Storage(format!("insert into {} returned no row", R::TABLE))
                }),
            Some(id) => self
                .fetch_optional(sql::update(id, &record))
                .await?
                .ok_or_else(|| {
                    AppError::Storage(format!("{} with id {} does not exist", R::NAME, id))
                }),
        }
    }

    async fn delete(&self, record: &R) -> Result<(), AppError> {
        let Some(id) = record.id() else {
            return Ok(());
        };
        let q = sql::delete::<R>(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in q.params {
            query = p.bind(query);
        }
        query.execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
