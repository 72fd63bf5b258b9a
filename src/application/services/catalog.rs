//! Catalog query service
//!
//! Composes the read pipeline behind every endpoint:
//! load (fresh per call) → filter → paginate.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Product, ProductFilter};
use crate::infrastructure::CatalogSource;
use crate::shared::types::{PageRequest, PaginatedResult};

/// Service for catalog read operations
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Filter the catalog, then slice the matches into the requested page.
    ///
    /// `total` and `total_pages` describe the filtered set.
    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> PaginatedResult<Product> {
        let invalid = filter.invalid_bounds();
        if !invalid.is_empty() {
            warn!(criteria = ?invalid, "Non-numeric filter bound; no product can match");
        }

        let catalog = self.source.load().await;
        let matching = filter.apply(catalog.into_products());
        let result = PaginatedResult::paginate(matching, page);

        debug!(
            total = result.total,
            page = result.page,
            limit = result.limit,
            returned = result.items.len(),
            "Listed products"
        );

        result
    }

    pub async fn get_product(&self, id: i64) -> Option<Product> {
        let catalog = self.source.load().await;
        catalog.find_by_id(id).cloned()
    }

    pub async fn list_categories(&self) -> Vec<String> {
        self.source.load().await.categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NumericRange;
    use crate::infrastructure::InMemoryCatalog;
    use serde_json::json;

    fn service() -> CatalogService {
        let products: Vec<Product> = (1..=25)
            .map(|id| {
                serde_json::from_value(json!({
                    "id": id,
                    "category": if id % 2 == 0 { "even" } else { "odd" },
                    "price": id * 10,
                    "dimensions": { "length": id, "width": 1 },
                }))
                .unwrap()
            })
            .collect();
        CatalogService::new(Arc::new(InMemoryCatalog::new(products)))
    }

    #[tokio::test]
    async fn pagination_counts_the_filtered_set() {
        let filter = ProductFilter {
            category: Some("even".to_string()),
            ..Default::default()
        };

        let page = service().list_products(&filter, PageRequest::new(2, 5)).await;

        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<i64> = page.items.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![12, 14, 16, 18, 20]);
    }

    #[tokio::test]
    async fn last_page_is_partial() {
        let filter = ProductFilter {
            price: NumericRange::new(Some(100.0), None),
            ..Default::default()
        };

        let page = service().list_products(&filter, PageRequest::new(2, 10)).await;

        assert_eq!(page.total, 16);
        assert_eq!(page.items.len(), 6);
    }

    #[tokio::test]
    async fn get_product_and_categories() {
        let service = service();
        assert_eq!(service.get_product(7).await.map(|p| p.id()), Some(7));
        assert!(service.get_product(0).await.is_none());
        assert_eq!(service.list_categories().await, vec!["odd", "even"]);
    }
}
