//! # Product Catalog Service
//!
//! Read-only HTTP API over a product catalog stored in a single JSON file:
//! filtered and paginated listing, lookup by id, and distinct categories.
//!
//! ## Architecture
//!
//! - **domain**: products, the catalog, filter criteria
//! - **application**: the load → filter → paginate pipeline
//! - **infrastructure**: catalog sources (JSON file, in-memory)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: pagination, lenient number parsing, errors, shutdown
//! - **server**: runtime lifecycle used by the CLI binary

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::CatalogService;
pub use domain::{Catalog, Product, ProductFilter};
pub use infrastructure::{CatalogSource, InMemoryCatalog, JsonFileCatalog};

// Re-export API router
pub use interfaces::http::create_api_router;
