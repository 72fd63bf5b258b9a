//! Catalog source trait

use async_trait::async_trait;

use crate::domain::Catalog;

/// Where the catalog comes from.
///
/// `load` is called once per request and is infallible: sources that can
/// fail return [`Catalog::empty`] instead of an error.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Catalog;
}
