//! Products module — listing with filters and lookup by id

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
