//! Error types for the café backend
//!
//! [`AppError`] is the single error type handlers return. `IntoResponse`
//! projects each variant into the response envelope with the right status
//! code, so no failure escapes the API boundary unwrapped.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::ApiResponse;

/// Unified API error
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing/invalid input (400, coded `VALIDATION_ERROR`)
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Duplicate username (400, coded `USERNAME_TAKEN`)
    #[error("username is already taken")]
    UsernameTaken,

    /// Unknown resource or relationship target (404)
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Bad credentials (401); never distinguishes unknown-user from
    /// wrong-password
    #[error("invalid credentials")]
    Unauthorized,

    /// Missing/invalid/expired bearer token (401)
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Authenticated but not allowed (403, no body detail)
    #[error("permission denied")]
    Forbidden,

    /// Object storage failure, message already sanitized (500)
    #[error("storage error: {0}")]
    Storage(String),

    /// Database failure (500, details logged server-side only)
    #[error("database error: {0}")]
    Database(String),

    /// Anything else unexpected (500, details logged server-side only)
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// Validation error carrying a single field-level detail entry
    pub fn validation_field(message: impl Into<String>, field: &str, issue: &str) -> Self {
        Self::Validation {
            message: message.into(),
            details: Some(serde_json::json!([{ "field": field, "issue": issue }])),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::UsernameTaken => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Storage(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body: ApiResponse<()> = match self {
            AppError::Validation { message, details } => {
                ApiResponse::error("VALIDATION_ERROR", message, details)
            }
            AppError::UsernameTaken => {
                ApiResponse::error("USERNAME_TAKEN", "Username is already taken.", None)
            }
            AppError::Unauthorized => {
                ApiResponse::error("UNAUTHORIZED", "Invalid credentials.", None)
            }
            AppError::InvalidToken(_) => ApiResponse::failure("Invalid or expired token"),
            // 403 carries no body detail beyond the status
            AppError::Forbidden => return status.into_response(),
            AppError::NotFound { resource } => {
                ApiResponse::failure(format!("{resource} not found"))
            }
            // Storage messages are sanitized at the storage layer
            AppError::Storage(message) => ApiResponse::failure(message),
            AppError::Database(message) => {
                tracing::error!(target: "database", error = %message, "Database error");
                ApiResponse::failure("Internal server error")
            }
            AppError::Internal(message) => {
                tracing::error!(target: "internal", error = %message, "Internal error");
                ApiResponse::failure("Internal server error")
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UsernameTaken.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("Menu").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::database("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_field_details() {
        let err = AppError::validation_field("phoneOrEmail is required", "phoneOrEmail", "REQUIRED");
        let AppError::Validation { details, .. } = err else {
            panic!("expected validation variant");
        };
        let details = details.expect("details present");
        assert_eq!(details[0]["field"], "phoneOrEmail");
        assert_eq!(details[0]["issue"], "REQUIRED");
    }
}
