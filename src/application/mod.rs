//! Application layer: use cases composed from domain rules and sources

pub mod services;

pub use services::CatalogService;
