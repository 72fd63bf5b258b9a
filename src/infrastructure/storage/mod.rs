//! Catalog sources

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileCatalog;
pub use memory::InMemoryCatalog;
pub use traits::CatalogSource;
