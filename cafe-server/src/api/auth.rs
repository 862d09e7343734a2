//! Authentication endpoint

use axum::Json;
use axum::extract::State;
use shared::error::{ApiResult, AppError};
use shared::models::{TokenResponse, UserLogin};
use shared::response::{ApiResponse, ok};

use super::internal;
use crate::auth::credential::verify_password;
use crate::db;
use crate::state::AppState;

/// POST /api/v1/auth/login - unknown username and wrong password produce
/// the identical generic failure
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<UserLogin>,
) -> ApiResult<Json<ApiResponse<TokenResponse>>> {
    let user = db::users::find_by_username(&state.pool, &payload.username)
        .await
        .map_err(internal)?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let token = state
        .jwt
        .issue(&user.id, &user.username, &user.role)
        .map_err(|e| AppError::internal(format!("token issuance failed: {e}")))?;

    Ok(ok(token))
}
