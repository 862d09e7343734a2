//! API response types
//!
//! Every endpoint answers with the same envelope:
//!
//! ```json
//! { "success": true, "data": { ... }, "meta": { "count": 3 } }
//! { "success": false, "message": "Menu not found" }
//! { "success": false, "error": { "code": "VALIDATION_ERROR", "message": "..." } }
//! ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload of successful responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Plain failure message (not-found, storage failures)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured failure body (validation, conflicts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    /// Collection metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Structured error body for coded failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Collection metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct Meta {
    pub count: usize,
}

impl<T> ApiResponse<T> {
    /// Successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            meta: None,
        }
    }

    /// Successful collection response with an item count
    pub fn ok_with_count(data: T, count: usize) -> Self {
        Self {
            meta: Some(Meta { count }),
            ..Self::ok(data)
        }
    }

    /// Plain-message failure
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: None,
            meta: None,
        }
    }

    /// Coded failure
    pub fn error(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(ErrorBody {
                code: code.into(),
                message: message.into(),
                details,
            }),
            meta: None,
        }
    }
}

/// Successful JSON envelope
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}

/// Successful JSON envelope for a collection, with `meta.count`
pub fn ok_with_count<T: Serialize>(data: Vec<T>) -> Json<ApiResponse<Vec<T>>> {
    let count = data.len();
    Json(ApiResponse::ok_with_count(data, count))
}
