//! Page section endpoints
//!
//! Keys outside the fixed set are a 404; a known key with no stored
//! content reads back as an empty renderable payload, never a 404.

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{ApiResult, AppError};
use shared::models::{PageKey, PageSection, PageSectionUpsert};
use shared::response::{ApiResponse, ok};

use super::internal;
use crate::db;
use crate::state::AppState;

fn parse_key(raw: &str) -> Result<PageKey, AppError> {
    PageKey::parse(raw).ok_or_else(|| AppError::not_found("Page section"))
}

/// GET /api/v1/page-sections/{key}
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
) -> ApiResult<Json<ApiResponse<PageSection>>> {
    let key = parse_key(&raw_key)?;
    let section = db::page_sections::find_by_key(&state.pool, key)
        .await
        .map_err(internal)?
        .unwrap_or_else(|| PageSection::empty(key));
    Ok(ok(section))
}

/// PUT /api/v1/page-sections/{key} - upsert; tags are normalized on write
pub async fn upsert(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
    Json(payload): Json<PageSectionUpsert>,
) -> ApiResult<Json<ApiResponse<PageSection>>> {
    let key = parse_key(&raw_key)?;
    let section = db::page_sections::upsert(&state.pool, key, &payload)
        .await
        .map_err(internal)?;
    Ok(ok(section))
}
