//! Category queries

use shared::models::{Category, CategoryCreate, CategoryUpdate};
use sqlx::SqlitePool;

use super::{RepoResult, new_id};

#[derive(sqlx::FromRow)]
pub struct CategoryRow {
    pub id: String,
    pub menu_id: Option<String>,
    pub name: String,
    pub sort_order: i64,
    pub image_url: String,
}

impl CategoryRow {
    pub fn into_model(self) -> Category {
        Category {
            id: self.id,
            menu_id: self.menu_id,
            name: self.name,
            order: self.sort_order,
            image_url: self.image_url,
        }
    }
}

pub async fn list(pool: &SqlitePool, menu_id: Option<&str>) -> RepoResult<Vec<Category>> {
    let rows: Vec<CategoryRow> = match menu_id {
        Some(menu_id) => {
            sqlx::query_as(
                "SELECT * FROM categories WHERE menu_id = ?1 ORDER BY sort_order, name",
            )
            .bind(menu_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM categories ORDER BY sort_order, name")
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows.into_iter().map(CategoryRow::into_model).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Category>> {
    let row: Option<CategoryRow> = sqlx::query_as("SELECT * FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(CategoryRow::into_model))
}

pub async fn exists(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn insert(
    pool: &SqlitePool,
    data: &CategoryCreate,
    menu_id: Option<&str>,
) -> RepoResult<Category> {
    let category = Category {
        id: new_id(),
        menu_id: menu_id.map(|s| s.to_string()),
        name: data.name.clone(),
        order: data.order,
        image_url: data.image_url.clone(),
    };
    sqlx::query(
        "INSERT INTO categories (id, menu_id, name, sort_order, image_url)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&category.id)
    .bind(&category.menu_id)
    .bind(&category.name)
    .bind(category.order)
    .bind(&category.image_url)
    .execute(pool)
    .await?;
    Ok(category)
}

/// Whole-record replacement of the scalar fields; the menu link is managed
/// through [`set_menu`] only
pub async fn update(pool: &SqlitePool, id: &str, data: &CategoryUpdate) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE categories SET name = ?1, sort_order = ?2, image_url = ?3 WHERE id = ?4",
    )
    .bind(&data.name)
    .bind(data.order)
    .bind(&data.image_url)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Set or clear the optional menu reference
pub async fn set_menu(
    pool: &SqlitePool,
    category_id: &str,
    menu_id: Option<&str>,
) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE categories SET menu_id = ?1 WHERE id = ?2")
        .bind(menu_id)
        .bind(category_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Hard delete; linked products keep existing with a nulled category
/// reference (ON DELETE SET NULL)
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
