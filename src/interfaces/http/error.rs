//! HTTP error responses
//!
//! Every failure is rendered as `{"error": "<message>"}`. Internal causes are
//! logged, never sent to the client.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

/// Error body returned by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Not found")]
    RouteNotFound,

    /// The detail is for logs only
    #[error("Invalid query string")]
    InvalidQuery(String),

    /// The detail is for logs only
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ProductNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(detail) => error!("Internal server error: {}", detail),
            Self::InvalidQuery(detail) => debug!("Rejected query string: {}", detail),
            _ => {}
        }
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Turn a panic caught by `CatchPanicLayer` into the generic 500 response.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "request handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
