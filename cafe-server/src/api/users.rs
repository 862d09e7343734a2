//! User account endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use shared::error::{ApiResult, AppError};
use shared::models::{UserPublic, UserRegister, UserUpdate};
use shared::response::{ApiResponse, ok};
use shared::util::now_millis;

use super::internal;
use crate::auth::credential::hash_password;
use crate::auth::jwt::CurrentUser;
use crate::db;
use crate::db::users::UserRow;
use crate::state::AppState;

const DEFAULT_ROLE: &str = "User";

/// POST /api/v1/users - anonymous registration. The pre-check gives a
/// friendly error early; the unique constraint settles races
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<UserRegister>,
) -> ApiResult<Json<ApiResponse<UserPublic>>> {
    if payload.username.trim().is_empty() || payload.password.trim().is_empty() {
        return Err(AppError::validation("username and password are required"));
    }

    if db::users::username_exists(&state.pool, &payload.username)
        .await
        .map_err(internal)?
    {
        return Err(AppError::UsernameTaken);
    }

    let password_hash = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))?;
    let now = now_millis();
    let role = payload
        .role
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ROLE.to_string());

    let user = UserRow {
        id: db::new_id(),
        username: payload.username,
        password_hash,
        role,
        created_at: now,
        updated_at: now,
    };

    db::users::insert(&state.pool, &user).await.map_err(|e| {
        if e.is_unique_violation() {
            AppError::UsernameTaken
        } else {
            internal(e)
        }
    })?;

    Ok(ok(user.into_public()))
}

/// GET /api/v1/users - elevated role only
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<UserPublic>>>> {
    let users = db::users::list(&state.pool).await.map_err(internal)?;
    Ok(ok(users.into_iter().map(UserRow::into_public).collect()))
}

/// PUT /api/v1/users/{id} - self or elevated role; role changes are
/// ignored for non-elevated callers
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> ApiResult<Json<ApiResponse<UserPublic>>> {
    let mut user = db::users::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("User"))?;

    let is_admin = current.is_admin();
    if !is_admin && current.id != user.id {
        return Err(AppError::Forbidden);
    }

    if let Some(username) = payload.username.as_deref().filter(|u| !u.trim().is_empty()) {
        if db::users::username_taken_excluding(&state.pool, username, &user.id)
            .await
            .map_err(internal)?
        {
            return Err(AppError::UsernameTaken);
        }
        user.username = username.to_string();
    }

    if let Some(password) = payload.password.as_deref().filter(|p| !p.trim().is_empty()) {
        user.password_hash = hash_password(password)
            .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))?;
    }

    if is_admin {
        if let Some(role) = payload.role.as_deref().filter(|r| !r.trim().is_empty()) {
            user.role = role.to_string();
        }
    }

    user.updated_at = now_millis();

    let updated = db::users::update(&state.pool, &user).await.map_err(|e| {
        if e.is_unique_violation() {
            AppError::UsernameTaken
        } else {
            internal(e)
        }
    })?;
    if !updated {
        return Err(AppError::not_found("User"));
    }

    Ok(ok(user.into_public()))
}

/// DELETE /api/v1/users/{id} - self or elevated role
pub async fn delete(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user = db::users::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("User"))?;

    if !current.is_admin() && current.id != user.id {
        return Err(AppError::Forbidden);
    }

    db::users::delete(&state.pool, &user.id)
        .await
        .map_err(internal)?;

    Ok(StatusCode::NO_CONTENT)
}
