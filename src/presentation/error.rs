// API error taxonomy
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients. Upstream integration failures never
/// reach this type; they are absorbed into demo fallbacks by the services.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image provided")]
    MissingImage,
    #[error("Tile not found")]
    TileNotFound,
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingImage => StatusCode::BAD_REQUEST,
            ApiError::TileNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error: {self}");
        }
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}
