//! Contact info and contact request endpoints

use axum::Json;
use axum::extract::State;
use shared::error::{ApiResult, AppError};
use shared::models::{
    ContactInfo, ContactInfoUpdate, ContactRequest, ContactRequestCreate, ContactRequestReceipt,
};
use shared::response::{ApiResponse, ok, ok_with_count};

use super::internal;
use crate::db;
use crate::state::AppState;

/// GET /api/v1/contact/info - data is null until the first upsert
pub async fn get_info(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Option<ContactInfo>>>> {
    let info = db::contact_info::find_first(&state.pool)
        .await
        .map_err(internal)?;
    Ok(ok(info))
}

/// PUT /api/v1/contact/info - create-if-absent else overwrite-in-place
pub async fn upsert_info(
    State(state): State<AppState>,
    Json(payload): Json<ContactInfoUpdate>,
) -> ApiResult<Json<ApiResponse<ContactInfo>>> {
    let info = db::contact_info::upsert(&state.pool, &payload)
        .await
        .map_err(internal)?;
    Ok(ok(info))
}

/// POST /api/v1/contact/requests - anonymous; phoneOrEmail is required
pub async fn create_request(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequestCreate>,
) -> ApiResult<Json<ApiResponse<ContactRequestReceipt>>> {
    if payload.phone_or_email.trim().is_empty() {
        return Err(AppError::validation_field(
            "phoneOrEmail is required",
            "phoneOrEmail",
            "REQUIRED",
        ));
    }

    let request = db::contact_requests::insert(&state.pool, &payload)
        .await
        .map_err(internal)?;

    Ok(ok(ContactRequestReceipt {
        request_id: request.id,
        created_at: request.created_at,
        status: "RECEIVED".to_string(),
    }))
}

/// GET /api/v1/contact/requests - authenticated, newest first
pub async fn list_requests(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<ContactRequest>>>> {
    let requests = db::contact_requests::list(&state.pool)
        .await
        .map_err(internal)?;
    Ok(ok_with_count(requests))
}
