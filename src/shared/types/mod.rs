pub mod coerce;
pub mod errors;
pub mod pagination;

pub use coerce::*;
pub use errors::*;
pub use pagination::*;
