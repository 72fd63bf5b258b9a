//! JSON file catalog source
//!
//! Re-reads the data file on every call; nothing is cached between requests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, error};

use super::CatalogSource;
use crate::domain::Catalog;
use crate::shared::types::CatalogError;

/// Catalog backed by a `{ "products": [...] }` JSON file
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file, reporting what went wrong.
    pub async fn try_load(&self) -> Result<Catalog, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Catalog {
        match self.try_load().await {
            Ok(catalog) => {
                debug!(path = %self.path.display(), products = catalog.len(), "Catalog loaded");
                catalog
            }
            Err(e) => {
                error!("Error reading products data: {}. Serving an empty catalog.", e);
                Catalog::empty()
            }
        }
    }
}
