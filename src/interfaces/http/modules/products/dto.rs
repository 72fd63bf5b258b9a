//! Product DTOs

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{NumericRange, Product, ProductFilter};
use crate::interfaces::http::error::ApiError;
use crate::shared::types::{PageRequest, PaginatedResult};

/// Query string of `GET /api/products`.
///
/// Values are kept as raw strings; coercion happens when the filter and page
/// request are built. When a key is repeated the first value wins, and keys
/// that are not listed here are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Page number (1-based). Default: 1
    pub page: Option<String>,
    /// Page size. Default: 10
    pub limit: Option<String>,
    /// Exact, case-sensitive category
    pub category: Option<String>,
    /// Inclusive lower bound on `price`
    pub min_price: Option<String>,
    /// Inclusive upper bound on `price`
    pub max_price: Option<String>,
    /// Inclusive lower bound on `dimensions.length`
    pub min_length: Option<String>,
    /// Inclusive upper bound on `dimensions.length`
    pub max_length: Option<String>,
    /// Inclusive lower bound on `dimensions.width`
    pub min_width: Option<String>,
    /// Inclusive upper bound on `dimensions.width`
    pub max_width: Option<String>,
}

impl ProductListQuery {
    /// Build the query from decoded `key=value` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, serde_json::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }
        serde_json::from_value(Value::Object(fields))
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category: self.category.clone().filter(|c| !c.is_empty()),
            price: NumericRange::from_raw(self.min_price.as_deref(), self.max_price.as_deref()),
            length: NumericRange::from_raw(self.min_length.as_deref(), self.max_length.as_deref()),
            width: NumericRange::from_raw(self.min_width.as_deref(), self.max_width.as_deref()),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

impl<S> FromRequestParts<S> for ProductListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;

        Self::from_pairs(pairs).map_err(|e| ApiError::InvalidQuery(e.to_string()))
    }
}

/// Pagination metadata; `total` counts the filtered products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

/// One page of products
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pagination: PaginationMeta,
}

impl From<PaginatedResult<Product>> for ProductListResponse {
    fn from(result: PaginatedResult<Product>) -> Self {
        Self {
            pagination: PaginationMeta {
                total: result.total,
                page: result.page,
                limit: result.limit,
                total_pages: result.total_pages,
            },
            products: result.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builds_filter_and_page() {
        let query: ProductListQuery = parse_query(
            "page=3&limit=5&category=lamps&minPrice=10&maxWidth=abc&minLength=",
        );

        let filter = query.filter();
        assert_eq!(filter.category.as_deref(), Some("lamps"));
        assert_eq!(filter.price, NumericRange::new(Some(10.0), None));
        assert_eq!(filter.length, NumericRange::default());
        assert!(filter.width.max.is_some_and(f64::is_nan));
        assert_eq!(query.page_request(), PageRequest::new(3, 5));
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let query = parse_query("page=1&page=2&category=A&category=B&sort=price");
        assert_eq!(query.page_request(), PageRequest::new(1, 10));
        assert_eq!(query.filter().category.as_deref(), Some("A"));
    }

    #[test]
    fn every_dimension_bound_is_wired() {
        let filter = parse_query("minLength=1&maxLength=2&minWidth=3&maxWidth=4").filter();
        assert_eq!(filter.length, NumericRange::new(Some(1.0), Some(2.0)));
        assert_eq!(filter.width, NumericRange::new(Some(3.0), Some(4.0)));
        assert_eq!(filter.price, NumericRange::default());
    }

    #[test]
    fn empty_category_is_absent() {
        let query: ProductListQuery = parse_query("category=");
        assert!(query.filter().is_empty());
    }

    #[test]
    fn pagination_meta_uses_camel_case() {
        let response = ProductListResponse::from(PaginatedResult::new(Vec::new(), 21, 2, 10));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "products": [],
                "pagination": { "total": 21, "page": 2, "limit": 10, "totalPages": 3 }
            })
        );
    }

    fn parse_query(raw: &str) -> ProductListQuery {
        let uri: axum::http::Uri = format!("/api/products?{raw}").parse().unwrap();
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri).unwrap();
        ProductListQuery::from_pairs(pairs).unwrap()
    }
}
