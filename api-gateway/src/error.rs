//! Error handling for the API gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response body: a single one-line message
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Common(#[from] common::error::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        // Log the error with request ID for backend tracing
        tracing::error!("API Error [{}]: {:?}", request_id, &self);

        // The external contract reports every domain failure as 400 with a
        // one-line message; only genuine faults surface as 500.
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Common(e) => match e {
                common::error::Error::CustomerNotFound(_)
                | common::error::Error::CustomerAlreadyExists(_)
                | common::error::Error::InsufficientFunds(_)
                | common::error::Error::ValidationError(_) => StatusCode::BAD_REQUEST,
                common::error::Error::ConfigurationError(_)
                | common::error::Error::Internal(_)
                | common::error::Error::Serialization(_)
                | common::error::Error::DecimalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
