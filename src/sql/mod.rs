//! SQL builder: identifiers come from record definitions only, values are always parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
