//! Product endpoints, including category↔product link operations

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use shared::error::{ApiResult, AppError};
use shared::models::{
    CategoryLinkBody, CategoryProductLink, Product, ProductCreate, ProductDetail, ProductLinkBody,
    ProductUpdate, ProductView,
};
use shared::response::{ApiResponse, ok, ok_with_count};

use super::{Deleted, internal};
use crate::db;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category_id: Option<String>,
}

async fn with_categories(
    state: &AppState,
    products: Vec<Product>,
) -> Result<Vec<ProductView>, AppError> {
    let categories = db::categories::list(&state.pool, None)
        .await
        .map_err(internal)?;
    Ok(products
        .into_iter()
        .map(|product| {
            let category = product
                .category_id
                .as_deref()
                .and_then(|id| categories.iter().find(|c| c.id == id).cloned());
            ProductView { product, category }
        })
        .collect())
}

/// GET /api/v1/products - optionally filtered by `categoryId`, each with
/// its linked category embedded
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<ProductView>>>> {
    let products = db::products::list(&state.pool, query.category_id.as_deref())
        .await
        .map_err(internal)?;
    let data = with_categories(&state, products).await?;
    Ok(ok_with_count(data))
}

/// GET /api/v1/categories/{id}/products
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<ProductView>>>> {
    let products = db::products::list(&state.pool, Some(&category_id))
        .await
        .map_err(internal)?;
    let data = with_categories(&state, products).await?;
    Ok(ok_with_count(data))
}

/// GET /api/v1/products/{id} - with nutrition facts and linked category
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<ProductDetail>>> {
    let (product, nutrition) = db::products::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Product"))?;

    let category = match product.category_id.as_deref() {
        Some(category_id) => db::categories::find_by_id(&state.pool, category_id)
            .await
            .map_err(internal)?,
        None => None,
    };

    Ok(ok(ProductDetail {
        product,
        nutrition,
        category,
    }))
}

/// POST /api/v1/products - created unlinked
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreate>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let product = db::products::insert(&state.pool, &payload, None)
        .await
        .map_err(internal)?;
    Ok(ok(product))
}

/// POST /api/v1/categories/{id}/products - created pre-linked
pub async fn create_in_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(payload): Json<ProductCreate>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    if !db::categories::exists(&state.pool, &category_id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("Category"));
    }
    let product = db::products::insert(&state.pool, &payload, Some(&category_id))
        .await
        .map_err(internal)?;
    Ok(ok(product))
}

/// PUT /api/v1/products/{id} - whole-record replacement; an omitted
/// nutrition clears the stored one
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> ApiResult<Json<ApiResponse<ProductDetail>>> {
    let updated = db::products::update(&state.pool, &id, &payload)
        .await
        .map_err(internal)?;
    if !updated {
        return Err(AppError::not_found("Product"));
    }
    let (product, nutrition) = db::products::find_by_id(&state.pool, &id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Product"))?;
    Ok(ok(ProductDetail {
        product,
        nutrition,
        category: None,
    }))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    let deleted = db::products::delete(&state.pool, &id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::not_found("Product"));
    }
    Ok(ok(Deleted { deleted: true, id }))
}

// ========== Link operations ==========

/// POST /api/v1/categories/{id}/product-links - link an existing product
/// to the category; both endpoints must exist
pub async fn link_to_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(body): Json<ProductLinkBody>,
) -> ApiResult<Json<ApiResponse<CategoryProductLink>>> {
    if body.product_id.trim().is_empty() {
        return Err(AppError::validation("productId is required"));
    }
    if !db::categories::exists(&state.pool, &category_id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("Category"));
    }
    let linked = db::products::set_category(&state.pool, &body.product_id, Some(&category_id))
        .await
        .map_err(internal)?;
    if !linked {
        return Err(AppError::not_found("Product"));
    }
    Ok(ok(CategoryProductLink {
        category_id,
        product_id: body.product_id,
    }))
}

/// DELETE /api/v1/categories/{id}/product-links/{product_id} - unlinking a
/// pair that is not linked is a successful no-op
pub async fn unlink_from_category(
    State(state): State<AppState>,
    Path((category_id, product_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let (product, _) = db::products::find_by_id(&state.pool, &product_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Product"))?;

    if product.category_id.as_deref() == Some(category_id.as_str()) {
        db::products::set_category(&state.pool, &product_id, None)
            .await
            .map_err(internal)?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/products/{id}/category-link - same link, product side
pub async fn link_category(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<CategoryLinkBody>,
) -> ApiResult<Json<ApiResponse<CategoryProductLink>>> {
    if body.category_id.trim().is_empty() {
        return Err(AppError::validation("categoryId is required"));
    }
    if !db::products::exists(&state.pool, &product_id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("Product"));
    }
    if !db::categories::exists(&state.pool, &body.category_id)
        .await
        .map_err(internal)?
    {
        return Err(AppError::not_found("Category"));
    }
    db::products::set_category(&state.pool, &product_id, Some(&body.category_id))
        .await
        .map_err(internal)?;
    Ok(ok(CategoryProductLink {
        category_id: body.category_id,
        product_id,
    }))
}

/// DELETE /api/v1/products/{id}/category-link - idempotent
pub async fn unlink_category(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let cleared = db::products::set_category(&state.pool, &product_id, None)
        .await
        .map_err(internal)?;
    if !cleared {
        return Err(AppError::not_found("Product"));
    }
    Ok(StatusCode::NO_CONTENT)
}
