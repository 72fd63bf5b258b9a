//! Infrastructure layer - external concerns

pub mod storage;

pub use storage::{CatalogSource, InMemoryCatalog, JsonFileCatalog};
