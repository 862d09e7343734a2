//! Menu endpoints

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use shared::error::{ApiResult, AppError};
use shared::models::{
    CategoryBrief, CategoryWithProducts, MenuCreate, MenuTree, MenuUpdate, MenuWithCategories,
    ProductBrief,
};
use shared::response::{ApiResponse, ok, ok_with_count};

use super::{Deleted, internal};
use crate::db;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MenuListQuery {
    pub active: Option<bool>,
}

/// GET /api/v1/menus - menus with their categories
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MenuListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<MenuWithCategories>>>> {
    let menus = db::menus::list(&state.pool, query.active)
        .await
        .map_err(internal)?;
    let categories = db::categories::list(&state.pool, None)
        .await
        .map_err(internal)?;

    let data: Vec<MenuWithCategories> = menus
        .into_iter()
        .map(|menu| {
            let nested = categories
                .iter()
                .filter(|c| c.menu_id.as_deref() == Some(menu.id.as_str()))
                .map(|c| CategoryBrief {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    order: c.order,
                    image_url: c.image_url.clone(),
                })
                .collect();
            MenuWithCategories {
                menu,
                categories: nested,
            }
        })
        .collect();

    Ok(ok_with_count(data))
}

/// GET /api/v1/menus/{id} - the full categories→products tree
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MenuTree>>> {
    let menu = db::menus::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Menu"))?;

    let categories = db::categories::list(&state.pool, Some(&id))
        .await
        .map_err(internal)?;

    let mut nested = Vec::with_capacity(categories.len());
    for category in categories {
        let products = db::products::list(&state.pool, Some(&category.id))
            .await
            .map_err(internal)?;
        nested.push(CategoryWithProducts {
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

    Ok(ok(MenuTree {
        menu,
        categories: nested,
    }))
}

/// POST /api/v1/menus
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MenuCreate>,
) -> ApiResult<Json<ApiResponse<shared::models::Menu>>> {
    let menu = db::menus::insert(&state.pool, &payload)
        .await
        .map_err(internal)?;
    Ok(ok(menu))
}

/// PUT /api/v1/menus/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuUpdate>,
) -> ApiResult<Json<ApiResponse<shared::models::Menu>>> {
    let updated = db::menus::update(&state.pool, &id, &payload)
        .await
        .map_err(internal)?;
    if !updated {
        return Err(AppError::not_found("Menu"));
    }
    let menu = db::menus::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Menu"))?;
    Ok(ok(menu))
}

/// DELETE /api/v1/menus/{id} - linked categories survive with a nulled
/// menu reference
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    let deleted = db::menus::delete(&state.pool, &id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::not_found("Menu"));
    }
    Ok(ok(Deleted { deleted: true, id }))
}
