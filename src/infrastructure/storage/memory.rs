//! In-memory catalog source

use async_trait::async_trait;

use super::CatalogSource;
use crate::domain::{Catalog, Product};

/// Fixed catalog for development and testing
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            catalog: Catalog::new(products),
        }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn load(&self) -> Catalog {
        self.catalog.clone()
    }
}
