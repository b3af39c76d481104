//! Error envelope returned by every endpoint
//!
//! `{ "statusCode": 404, "message": "User not found", "error": "Not Found" }`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::support::errors::{AuthError, DomainError, GeocodingError};

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code
    #[schema(example = 400)]
    pub status_code: u16,
    /// Description of the error
    #[schema(example = "Email already exists")]
    pub message: String,
    /// HTTP reason phrase
    #[schema(example = "Bad Request")]
    pub error: String,
}

/// An error ready to be rendered as an HTTP response
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status_code: self.status.as_u16(),
            message: self.message.clone(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let status = match &e {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::EmailTaken
            | DomainError::UnsupportedCity(_)
            | DomainError::LocationUnresolved => StatusCode::BAD_REQUEST,
            DomainError::LocationOutsideEgypt => StatusCode::FORBIDDEN,
            DomainError::Geocoding(GeocodingError::Transport(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DomainError::Geocoding(_) => StatusCode::BAD_GATEWAY,
            DomainError::Token(_) | DomainError::Storage(_) => {
                error!(error = %e, "Request failed with an internal error");
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            }
        };
        Self::new(status, e.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}
