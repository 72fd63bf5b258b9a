//! Product aggregate
//!
//! The product record and the filter criteria that select products.

pub mod filter;
pub mod model;

pub use filter::{NumericRange, ProductFilter};
pub use model::{Dimensions, InvalidProduct, Product};
