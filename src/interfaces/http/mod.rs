//! HTTP REST API interfaces
//!
//! - `modules`: request handlers and DTOs per resource, plus middleware
//! - `error`: the `{"error": ...}` response type and panic mapping
//! - `router`: API router with Swagger documentation

pub mod error;
pub mod modules;
pub mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::{create_api_router, ApiDoc, ApiState};
