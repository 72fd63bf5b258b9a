//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::CatalogService;
use crate::domain::{Dimensions, Product};
use crate::interfaces::http::error::{handle_panic, not_found, ErrorResponse};
use crate::interfaces::http::modules::health::{HealthResponse, HealthState};
use crate::interfaces::http::modules::metrics::{http_metrics_middleware, MetricsState};
use crate::interfaces::http::modules::products::{
    CatalogState, PaginationMeta, ProductListResponse,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{categories, health, metrics, products};

/// Router state; each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<CatalogService>,
    pub started_at: Arc<Instant>,
    pub prometheus: PrometheusHandle,
}

impl FromRef<ApiState> for CatalogState {
    fn from_ref(s: &ApiState) -> Self {
        CatalogState {
            catalog: Arc::clone(&s.catalog),
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<ApiState> for MetricsState {
    fn from_ref(s: &ApiState) -> Self {
        MetricsState {
            handle: s.prometheus.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        categories::list_categories,
    ),
    components(
        schemas(
            Product,
            Dimensions,
            ProductListResponse,
            PaginationMeta,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Products", description = "Product listing with filters and pagination, lookup by id"),
        (name = "Categories", description = "Distinct product categories"),
    ),
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "Read-only API over a static JSON product catalog"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(catalog: Arc<CatalogService>, prometheus: PrometheusHandle) -> Router {
    let state = ApiState {
        catalog,
        started_at: Arc::new(Instant::now()),
        prometheus,
    };

    // Any origin, any method, any header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/products", get(products::list_products))
        .route("/products/{id}", get(products::get_product))
        .route("/categories", get(categories::list_categories));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .fallback(not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Innermost first: panics become 500s before metrics and tracing see them
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
