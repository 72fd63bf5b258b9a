//! Category listing handler

use axum::{extract::State, Json};

use crate::interfaces::http::error::ErrorResponse;
use crate::interfaces::http::modules::products::CatalogState;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Distinct categories in order of first appearance", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_categories(State(state): State<CatalogState>) -> Json<Vec<String>> {
    Json(state.catalog.list_categories().await)
}
