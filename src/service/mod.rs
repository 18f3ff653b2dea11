//! Business logic over a record repository.

mod crud;
pub use crud::CrudService;

use crate::model::{Customer, Supplier};

pub type CustomerService = CrudService<Customer>;
pub type SupplierService = CrudService<Supplier>;
