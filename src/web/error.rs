//! Error Types
//!
//! Page handlers fail with [`PageError`], which hides all detail behind a
//! generic 500. JSON handlers fail with [`ApiError`], which answers with a
//! JSON envelope and a request id.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::data::DataError;

/// Body sent for any page that fails to render
pub const RENDER_FAILURE_BODY: &str = "Error rendering page";

/// Errors raised while building an HTML page
#[derive(Error, Debug)]
pub enum PageError {
    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// The data provider could not supply the page's records
    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Rendering error");
        (StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILURE_BODY).into_response()
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;

/// API and server error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Data provider error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::Data(_) => "DATA_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
            ApiError::Io(_) => "IO_ERROR",
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
