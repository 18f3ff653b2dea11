//! Persisted business records.

mod customer;
mod supplier;

pub use customer::Customer;
pub use supplier::Supplier;

/// A record stored in its own table with a repository-assigned `BIGINT` id.
///
/// Every mutable field is an optional string column; `COLUMNS` lists them in
/// the order `column_values` returns them.
pub trait Record: Clone + Send + Sync + 'static {
    /// Singular name used in messages, e.g. "Customer".
    const NAME: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>);

    /// Full overwrite: every mutable field takes the value from `other`, including nulls.
    fn overwrite_from(&mut self, other: Self);

    fn column_values(&self) -> Vec<Option<String>>;

    /// Build a record from an id and column values in `COLUMNS` order.
    fn from_columns(id: i64, values: Vec<Option<String>>) -> Self;
}
