//! HTTP handlers for customer and supplier CRUD.

pub mod customer;
pub mod supplier;
