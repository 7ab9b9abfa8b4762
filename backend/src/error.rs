//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to the documented HTTP responses. Response bodies are
//! always `{"message": "..."}`; internal detail stays in the server logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::TokenError;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client input incomplete
    #[error("validation error: {0}")]
    Validation(String),

    /// Username already registered
    #[error("user already exists")]
    DuplicateUser,

    /// Unknown username or wrong password; the two are indistinguishable on
    /// the wire to prevent username enumeration
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Protected request arrived without any bearer token
    #[error("no token provided")]
    NoToken,

    /// Bearer token present but failed verification
    #[error("token rejected: {0}")]
    Unauthenticated(TokenError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::DuplicateUser => {
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            ApiError::NoToken => (StatusCode::FORBIDDEN, "No token provided".to_string()),
            // All verification failures collapse to one external message;
            // the variant was already logged where it was caught.
            ApiError::Unauthenticated(_) => (
                StatusCode::UNAUTHORIZED,
                "Failed to authenticate token".to_string(),
            ),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_validation_error_status() {
        let response = ApiError::Validation("All fields are required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_user_maps_to_400() {
        let response = ApiError::DuplicateUser.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_no_token_maps_to_403() {
        let response = ApiError::NoToken.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_token_failures_collapse_to_one_response() {
        let expired = ApiError::Unauthenticated(TokenError::Expired).into_response();
        let malformed = ApiError::Unauthenticated(TokenError::Malformed).into_response();

        assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(malformed.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_of(expired).await, body_of(malformed).await);
    }

    #[tokio::test]
    async fn test_internal_error_does_not_leak_detail() {
        let response =
            ApiError::Internal(anyhow::anyhow!("connection refused to 10.0.0.7")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert!(body.contains("Internal Server Error"));
        assert!(!body.contains("10.0.0.7"));
    }
}
