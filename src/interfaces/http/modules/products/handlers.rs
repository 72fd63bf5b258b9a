//! Product REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use super::dto::{ProductListQuery, ProductListResponse};
use crate::application::CatalogService;
use crate::domain::Product;
use crate::interfaces::http::error::{ApiError, ErrorResponse};
use crate::shared::types::parse_int_prefix;

/// State shared by the catalog endpoints
#[derive(Clone)]
pub struct CatalogState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "One page of matching products", body = ProductListResponse),
        (status = 400, description = "Query string could not be decoded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_products(
    State(state): State<CatalogState>,
    query: ProductListQuery,
) -> Json<ProductListResponse> {
    let filter = query.filter();
    let page = query.page_request();
    debug!(?filter, ?page, "Listing products");

    let result = state.catalog.list_products(&filter, page).await;
    Json(result.into())
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID (leading integer is used)")),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    // A non-numeric id matches nothing and falls through to 404
    let Some(id) = parse_int_prefix(&id) else {
        debug!(id = %id, "Product id is not numeric");
        return Err(ApiError::ProductNotFound);
    };

    state
        .catalog
        .get_product(id)
        .await
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}
