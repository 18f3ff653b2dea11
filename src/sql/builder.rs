//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for a `Record` table.

use super::params::SqlParam;
use crate::model::Record;
use crate::pagination::{OrderBy, SortKey};

/// Quote identifier for PostgreSQL (safe: only from record definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// `"id", "col1", ...` in the order `Record::from_columns` expects.
fn select_column_list<R: Record>() -> String {
    std::iter::once("id")
        .chain(R::COLUMNS.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn select_all<R: Record>() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY \"id\"",
        select_column_list::<R>(),
        quoted(R::TABLE)
    );
    q
}

/// `ORDER BY` clause for a resolved sort; non-id sorts fall back to ascending id on ties.
fn order_clause<R: Record>(order: OrderBy) -> String {
    let primary = format!("{} {}", quoted(order.column::<R>()), order.direction.as_sql());
    match order.key {
        SortKey::Id => format!("ORDER BY {}", primary),
        SortKey::Column(_) => format!("ORDER BY {}, \"id\" ASC", primary),
    }
}

pub fn select_page<R: Record>(order: OrderBy, limit: i64, offset: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let l = q.push_param(SqlParam::BigInt(limit));
    let o = q.push_param(SqlParam::BigInt(offset));
    q.sql = format!(
        "SELECT {} FROM {} {} LIMIT ${} OFFSET ${}",
        select_column_list::<R>(),
        quoted(R::TABLE),
        order_clause::<R>(order),
        l,
        o
    );
    q
}

pub fn count<R: Record>() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT COUNT(*) FROM {}", quoted(R::TABLE));
    q
}

pub fn select_by_id<R: Record>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::BigInt(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE \"id\" = ${}",
        select_column_list::<R>(),
        quoted(R::TABLE),
        n
    );
    q
}

/// INSERT every mutable column; the database assigns the id.
pub fn insert<R: Record>(record: &R) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols: Vec<String> = R::COLUMNS.iter().map(|c| quoted(c)).collect();
    let placeholders: Vec<String> = record
        .column_values()
        .into_iter()
        .map(|v| format!("${}", q.push_param(SqlParam::Text(v))))
        .collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(R::TABLE),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list::<R>()
    );
    q
}

/// UPDATE every mutable column of the row with `id`.
pub fn update<R: Record>(id: i64, record: &R) -> QueryBuf {
    let mut q = QueryBuf::new();
    let sets: Vec<String> = R::COLUMNS
        .iter()
        .zip(record.column_values())
        .map(|(col, v)| format!("{} = ${}", quoted(col), q.push_param(SqlParam::Text(v))))
        .collect();
    let n = q.push_param(SqlParam::BigInt(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE \"id\" = ${} RETURNING {}",
        quoted(R::TABLE),
        sets.join(", "),
        n,
        select_column_list::<R>()
    );
    q
}

pub fn delete<R: Record>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::BigInt(id));
    q.sql = format!("DELETE FROM {} WHERE \"id\" = ${}", quoted(R::TABLE), n);
    q
}

/// DDL for the record's table. One nullable TEXT column per mutable field.
pub fn create_table<R: Record>() -> String {
    let cols: Vec<String> = R::COLUMNS
        .iter()
        .map(|c| format!("{} TEXT", quoted(c)))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\"id\" BIGSERIAL PRIMARY KEY, {})",
        quoted(R::TABLE),
        cols.join(", ")
    )
}
