//! Category endpoints, including menu↔category link operations

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use shared::error::{ApiResult, AppError};
use shared::models::{
    Category, CategoryCreate, CategoryLinkBody, CategoryUpdate, CategoryView,
    CategoryWithProducts, MenuCategoryLink, MenuLinkBody, ProductBrief,
};
use shared::response::{ApiResponse, ok, ok_with_count};

use super::{Deleted, internal};
use crate::db;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListQuery {
    pub menu_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGetQuery {
    pub include_products: Option<bool>,
}

/// GET /api/v1/categories - optionally filtered by `menuId`, each with its
/// linked menu embedded
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CategoryListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<CategoryView>>>> {
    let categories = db::categories::list(&state.pool, query.menu_id.as_deref())
        .await
        .map_err(internal)?;
    let menus = db::menus::list(&state.pool, None).await.map_err(internal)?;

    let data: Vec<CategoryView> = categories
        .into_iter()
        .map(|category| {
            let menu = category
                .menu_id
                .as_deref()
                .and_then(|menu_id| menus.iter().find(|m| m.id == menu_id).cloned());
            CategoryView { category, menu }
        })
        .collect();

    Ok(ok_with_count(data))
}

/// GET /api/v1/menus/{id}/categories - categories of one menu with their
/// products
pub async fn list_by_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<CategoryWithProducts>>>> {
    let categories = db::categories::list(&state.pool, Some(&menu_id))
        .await
        .map_err(internal)?;

    let mut data = Vec::with_capacity(categories.len());
    for category in categories {
        let products = db::products::list(&state.pool, Some(&category.id))
            .await
            .map_err(internal)?;
        data.push(CategoryWithProducts {
            products: products
                .into_iter()
                .map(|p| ProductBrief {
                    id: p.id,
                    name: p.name,
                    description: p.description,
                    price: p.price,
                    discounted_price: p.discounted_price,
                    in_stock: p.in_stock,
                    image_url: p.image_url,
                })
                .collect(),
            category,
        });
    }

    Ok(ok_with_count(data))
}

/// GET /api/v1/categories/{id} - with `?includeProducts=true` the
/// category's products are embedded
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CategoryGetQuery>,
) -> ApiResult<Json<ApiResponse<serde_json::Value>>> {
    let category = db::categories::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Category"))?;

    if query.include_products == Some(true) {
        let products = db::products::list(&state.pool, Some(&id))
            .await
            .map_err(internal)?;
        let view = CategoryWithProducts {
            products: products
                .into_iter()
                .map(|p| ProductBrief {
                    id: p.id,
                    name: p.name,
                    description: p.description,
                    price: p.price,
                    discounted_price: p.discounted_price,
                    in_stock: p.in_stock,
                    image_url: p.image_url,
                })
                .collect(),
            category,
        };
        let value = serde_json::to_value(view)
            .map_err(|e| AppError::internal(e.to_string()))?;
        return Ok(ok(value));
    }

    let value = serde_json::to_value(category).map_err(|e| AppError::internal(e.to_string()))?;
    Ok(ok(value))
}

/// POST /api/v1/categories - created unlinked
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CategoryCreate>,
) -> ApiResult<Json<ApiResponse<Category>>> {
    let category = db::categories::insert(&state.pool, &payload, None)
        .await
        .map_err(internal)?;
    Ok(ok(category))
}

/// POST /api/v1/menus/{id}/categories - created pre-linked to the menu
pub async fn create_in_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
    Json(payload): Json<CategoryCreate>,
) -> ApiResult<Json<ApiResponse<Category>>> {
    if !db::menus::exists(&state.pool, &menu_id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("Menu"));
    }
    let category = db::categories::insert(&state.pool, &payload, Some(&menu_id))
        .await
        .map_err(internal)?;
    Ok(ok(category))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> ApiResult<Json<ApiResponse<Category>>> {
    let updated = db::categories::update(&state.pool, &id, &payload)
        .await
        .map_err(internal)?;
    if !updated {
        return Err(AppError::not_found("Category"));
    }
    let category = db::categories::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Category"))?;
    Ok(ok(category))
}

/// DELETE /api/v1/categories/{id} - linked products survive with a nulled
/// category reference
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    let deleted = db::categories::delete(&state.pool, &id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::not_found("Category"));
    }
    Ok(ok(Deleted { deleted: true, id }))
}

// ========== Link operations ==========

/// POST /api/v1/menus/{id}/category-links - link an existing category to
/// the menu; both endpoints must exist
pub async fn link_to_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
    Json(body): Json<CategoryLinkBody>,
) -> ApiResult<Json<ApiResponse<MenuCategoryLink>>> {
    if body.category_id.trim().is_empty() {
        return Err(AppError::validation("categoryId is required"));
    }
    if !db::menus::exists(&state.pool, &menu_id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("Menu"));
    }
    let linked = db::categories::set_menu(&state.pool, &body.category_id, Some(&menu_id))
        .await
        .map_err(internal)?;
    if !linked {
        return Err(AppError::not_found("Category"));
    }
    Ok(ok(MenuCategoryLink {
        menu_id,
        category_id: body.category_id,
    }))
}

/// DELETE /api/v1/menus/{id}/category-links/{category_id} - unlinking a
/// pair that is not linked is a successful no-op
pub async fn unlink_from_menu(
    State(state): State<AppState>,
    Path((menu_id, category_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let category = db::categories::find_by_id(&state.pool, &category_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Category"))?;

    if category.menu_id.as_deref() == Some(menu_id.as_str()) {
        db::categories::set_menu(&state.pool, &category_id, None)
            .await
            .map_err(internal)?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/categories/{id}/menu-link - same link, category side
pub async fn link_menu(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(body): Json<MenuLinkBody>,
) -> ApiResult<Json<ApiResponse<MenuCategoryLink>>> {
    if body.menu_id.trim().is_empty() {
        return Err(AppError::validation("menuId is required"));
    }
    if !db::categories::exists(&state.pool, &category_id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("Category"));
    }
    if !db::menus::exists(&state.pool, &body.menu_id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("Menu"));
    }
    db::categories::set_menu(&state.pool, &category_id, Some(&body.menu_id))
        .await
        .map_err(internal)?;
    Ok(ok(MenuCategoryLink {
        menu_id: body.menu_id,
        category_id,
    }))
}

/// DELETE /api/v1/categories/{id}/menu-link - idempotent
pub async fn unlink_menu(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let cleared = db::categories::set_menu(&state.pool, &category_id, None)
        .await
        .map_err(internal)?;
    if !cleared {
        return Err(AppError::not_found("Category"));
    }
    Ok(StatusCode::NO_CONTENT)
}
