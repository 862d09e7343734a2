//! Branch endpoints

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{ApiResult, AppError};
use shared::models::{Branch, BranchCreate, BranchUpdate};
use shared::response::{ApiResponse, ok, ok_with_count};

use super::{Deleted, internal};
use crate::db;
use crate::state::AppState;

/// GET /api/v1/branches
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Branch>>>> {
    let branches = db::branches::list(&state.pool).await.map_err(internal)?;
    Ok(ok_with_count(branches))
}

/// GET /api/v1/branches/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Branch>>> {
    let branch = db::branches::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Branch"))?;
    Ok(ok(branch))
}

/// POST /api/v1/branches
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BranchCreate>,
) -> ApiResult<Json<ApiResponse<Branch>>> {
    let branch = db::branches::insert(&state.pool, &payload)
        .await
        .map_err(internal)?;
    Ok(ok(branch))
}

/// PUT /api/v1/branches/{id} - replaces the working-hours set wholesale
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BranchUpdate>,
) -> ApiResult<Json<ApiResponse<Branch>>> {
    let updated = db::branches::update(&state.pool, &id, &payload)
        .await
        .map_err(internal)?;
    if !updated {
        return Err(AppError::not_found("Branch"));
    }
    let branch = db::branches::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Branch"))?;
    Ok(ok(branch))
}

/// DELETE /api/v1/branches/{id} - owned working hours cascade
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    let deleted = db::branches::delete(&state.pool, &id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::not_found("Branch"));
    }
    Ok(ok(Deleted { deleted: true, id }))
}
