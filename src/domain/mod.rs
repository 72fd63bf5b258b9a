//! Domain layer: catalog entities and the rules that select from them

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Dimensions, InvalidProduct, NumericRange, Product, ProductFilter};
