//! API error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use super::dto::ApiResponse;
use crate::domain::DomainError;

/// Errors a handler can surface to the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request body
    #[error("Invalid JSON: {0}")]
    BadRequest(String),

    /// Domain/storage failure, surfaced as a server error
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Domain(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("request failed: {}", self);
        }
        let body = ApiResponse::<()>::error(self.to_string());
        (status, Json(body)).into_response()
    }
}
