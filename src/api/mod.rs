//! HTTP API: routes, handlers and error mapping

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;
pub use router::{create_api_router, AppState};
