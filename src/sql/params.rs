//! Values bound to `$n` placeholders.

/// A parameter for a built statement. Record columns are nullable text; ids and paging are BIGINT.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlParam {
    Text(Option<String>),
    BigInt(i64),
}

impl SqlParam {
    pub fn bind<'q>(
        self,
        query: sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>,
    ) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
        match self {
            SqlParam::Text(v) => query.bind(v),
            SqlParam::BigInt(n) => query.bind(n),
        }
    }
}
